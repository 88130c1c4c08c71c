use super::*;
use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Debug, Clone)]
struct RecordedRequest {
    content_type: Option<String>,
    body: serde_json::Value,
}

#[derive(Clone)]
struct PredictServerState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    reply_status: StatusCode,
    reply: serde_json::Value,
}

async fn handle_predict(
    State(state): State<PredictServerState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    let content_type = headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .await
        .push(RecordedRequest { content_type, body });
    (state.reply_status, Json(state.reply.clone()))
}

async fn serve(app: Router) -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

async fn spawn_predict_server(
    reply_status: StatusCode,
    reply: serde_json::Value,
) -> Result<(String, Arc<Mutex<Vec<RecordedRequest>>>)> {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = PredictServerState {
        requests: requests.clone(),
        reply_status,
        reply,
    };
    let app = Router::new()
        .route("/predict_api", post(handle_predict))
        .with_state(state);
    Ok((serve(app).await?, requests))
}

fn client_for(server_url: &str) -> PredictionClient {
    PredictionClient::new(&ClientSettings {
        server_url: server_url.to_string(),
        ..ClientSettings::default()
    })
    .expect("client")
}

fn sample_form() -> FormInput {
    [("age", "52"), ("ap_hi", "120"), ("ap_lo", "80"), ("smoke", "0")]
        .into_iter()
        .collect()
}

#[tokio::test]
async fn posts_form_as_json_string_map() {
    let (server_url, requests) = spawn_predict_server(
        StatusCode::OK,
        serde_json::json!({ "success": true, "prob": 73.456, "label": 1 }),
    )
    .await
    .expect("spawn server");

    let reply = client_for(&server_url)
        .predict(&sample_form())
        .await
        .expect("predict");
    assert_eq!(reply, PredictionResponse::ok(73.456, 1));

    let requests = requests.lock().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        requests[0].body,
        serde_json::json!({ "age": "52", "ap_hi": "120", "ap_lo": "80", "smoke": "0" })
    );
}

#[tokio::test]
async fn error_status_body_is_still_decoded() {
    let (server_url, _) = spawn_predict_server(
        StatusCode::BAD_REQUEST,
        serde_json::json!({ "success": false, "error": "bad input" }),
    )
    .await
    .expect("spawn server");

    let reply = client_for(&server_url)
        .predict(&sample_form())
        .await
        .expect("decoded reply");
    assert!(!reply.success);
    assert_eq!(reply.error.as_deref(), Some("bad input"));
}

#[tokio::test]
async fn non_json_reply_is_an_error() {
    let app = Router::new().route(
        "/predict_api",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>") }),
    );
    let server_url = serve(app).await.expect("spawn server");

    let err = client_for(&server_url)
        .predict(&sample_form())
        .await
        .expect_err("should fail");
    assert!(format!("{err:#}").contains("decoding"), "{err:#}");
}

#[tokio::test]
async fn unreachable_server_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let result = client_for(&format!("http://{addr}"))
        .predict(&sample_form())
        .await;
    assert!(result.is_err());
}

#[test]
fn endpoint_replaces_base_path() {
    let url = predict_endpoint("http://127.0.0.1:5000/app/", "/predict_api").expect("url");
    assert_eq!(url.as_str(), "http://127.0.0.1:5000/predict_api");
}

#[test]
fn endpoint_accepts_trailing_whitespace_in_server_url() {
    let url = predict_endpoint(" https://risk.example.org ", "/predict_api").expect("url");
    assert_eq!(url.as_str(), "https://risk.example.org/predict_api");
}

#[test]
fn rejects_unparsable_server_url() {
    let err = predict_endpoint("not a url", "/predict_api").expect_err("should fail");
    assert!(matches!(err, ClientSetupError::InvalidServerUrl { .. }));
}

#[test]
fn rejects_non_http_scheme() {
    let err = predict_endpoint("ftp://example.org", "/predict_api").expect_err("should fail");
    assert!(matches!(err, ClientSetupError::UnsupportedScheme { .. }));
}
