use super::*;
use crate::{gauge::GaugeTone, ClientSettings, PredictionClient};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

enum Scripted {
    Reply(PredictionResponse),
    Fail(&'static str),
}

struct ScriptedTransport {
    reply: Scripted,
    sent: Arc<Mutex<Vec<FormInput>>>,
}

impl ScriptedTransport {
    fn replying(reply: PredictionResponse) -> Self {
        Self {
            reply: Scripted::Reply(reply),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            reply: Scripted::Fail(message),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl PredictionTransport for ScriptedTransport {
    async fn predict(&self, payload: &FormInput) -> Result<PredictionResponse> {
        self.sent.lock().expect("sent lock").push(payload.clone());
        match &self.reply {
            Scripted::Reply(reply) => Ok(reply.clone()),
            Scripted::Fail(message) => Err(anyhow!(*message)),
        }
    }
}

fn valid_form() -> FormInput {
    [
        ("age", "52"),
        ("gender", "2"),
        ("ap_hi", "120"),
        ("ap_lo", "80"),
        ("cholesterol", "1"),
    ]
    .into_iter()
    .collect()
}

#[tokio::test]
async fn valid_submit_posts_once_and_shows_high_risk() {
    let transport = ScriptedTransport::replying(PredictionResponse::ok(73.456, 1));
    let sent = transport.sent.clone();
    let mut controller = FormController::new(transport, valid_form());

    let view = controller.submit().await;

    assert_eq!(sent.lock().expect("sent lock").as_slice(), &[valid_form()]);
    assert!(view.submit.enabled);
    assert_eq!(view.submit.label, "Predict Risk");
    assert!(view.error.is_none());
    let result = view.result.expect("result panel");
    assert_eq!(result.probability, "73.5");
    assert_eq!(result.badge.text, "High risk");
    assert_eq!(result.gauge.value(), 73.5);
    assert_eq!(result.gauge.tone(), GaugeTone::Red);
}

#[tokio::test]
async fn low_risk_reply_shows_green_gauge() {
    let mut controller = FormController::new(
        ScriptedTransport::replying(PredictionResponse::ok(20.0, 0)),
        valid_form(),
    );

    let result = controller.submit().await.result.expect("result panel");
    assert_eq!(result.probability, "20");
    assert_eq!(result.badge.text, "Low risk");
    assert_eq!(result.gauge.tone(), GaugeTone::Green);
}

#[tokio::test]
async fn invalid_form_never_reaches_transport() {
    let transport = ScriptedTransport::replying(PredictionResponse::ok(50.0, 0));
    let sent = transport.sent.clone();
    let mut controller = FormController::new(transport, valid_form());
    controller.set_field("ap_lo", "130");

    let view = controller.submit().await;

    assert!(sent.lock().expect("sent lock").is_empty());
    assert!(view.submit.enabled);
    assert!(view.result.is_none());
    assert_eq!(
        view.error.expect("error panel").message,
        "Diastolic must be <= Systolic."
    );
}

#[tokio::test]
async fn server_rejection_shows_its_message() {
    let mut controller = FormController::new(
        ScriptedTransport::replying(PredictionResponse::failure("bad input")),
        valid_form(),
    );

    let view = controller.submit().await;
    assert!(view.result.is_none());
    assert!(view.submit.enabled);
    assert_eq!(view.error.expect("error panel").message, "bad input");
}

#[tokio::test]
async fn rejection_without_message_shows_fallback() {
    let mut controller = FormController::new(
        ScriptedTransport::replying(PredictionResponse::default()),
        valid_form(),
    );

    let view = controller.submit().await;
    assert_eq!(view.error.expect("error panel").message, "Server error");
}

#[tokio::test]
async fn transport_failure_is_a_network_error() {
    let mut controller = FormController::new(ScriptedTransport::failing("timeout"), valid_form());

    let view = controller.submit().await;
    assert!(view.submit.enabled);
    assert!(view.result.is_none());
    assert_eq!(
        view.error.expect("error panel").message,
        "Network error: timeout"
    );
}

#[tokio::test]
async fn success_without_probability_is_a_network_error() {
    let reply = PredictionResponse {
        success: true,
        ..PredictionResponse::default()
    };
    let mut controller = FormController::new(ScriptedTransport::replying(reply), valid_form());

    let view = controller.submit().await;
    assert_eq!(
        view.error.expect("error panel").message,
        "Network error: prediction reply is missing prob"
    );
}

#[tokio::test]
async fn error_is_cleared_by_next_successful_submit() {
    let mut controller = FormController::new(
        ScriptedTransport::replying(PredictionResponse::ok(42.0, 0)),
        valid_form(),
    );
    controller.set_field("age", "0");
    assert!(controller.submit().await.error.is_some());

    controller.set_field("age", "52");
    let view = controller.submit().await;
    assert!(view.error.is_none());
    assert_eq!(view.result.expect("result panel").probability, "42");
}

#[tokio::test]
async fn reset_clears_fields_and_panels() {
    let mut controller = FormController::new(
        ScriptedTransport::replying(PredictionResponse::ok(42.0, 1)),
        valid_form(),
    );
    controller.submit().await;

    controller.reset();

    assert!(controller.form().iter().all(|field| field.value.is_empty()));
    assert_eq!(controller.form().len(), valid_form().len());
    assert_eq!(controller.state(), &UiState::Idle);
    let view = controller.view();
    assert!(view.result.is_none());
    assert!(view.error.is_none());
}

#[tokio::test]
async fn submit_after_reset_reports_empty_fields() {
    let mut controller = FormController::new(
        ScriptedTransport::replying(PredictionResponse::ok(42.0, 1)),
        valid_form(),
    );
    controller.reset();

    let view = controller.submit().await;
    assert_eq!(
        view.error.expect("error panel").message,
        "Please fill all fields correctly."
    );
}

#[test]
fn start_submit_leaves_state_busy_until_completed() {
    let (state, payload) = start_submit(UiState::Idle, &valid_form());
    assert!(state.is_submitting());
    assert!(!render(&state).submit.enabled);
    assert_eq!(payload, Some(valid_form()));

    let settled = complete_submit(state, Err(anyhow!("connection reset")));
    let view = render(&settled);
    assert!(view.submit.enabled);
    assert_eq!(
        view.error.expect("error panel").message,
        "Network error: connection reset"
    );
}

#[test]
fn start_submit_with_invalid_form_settles_immediately() {
    let mut form = valid_form();
    form.set("age", "");
    let (state, payload) = start_submit(UiState::Idle, &form);
    assert!(payload.is_none());
    assert!(!state.is_submitting());
    assert_eq!(
        state,
        UiState::ErrorShown("Please fill all fields correctly.".into())
    );
}

#[tokio::test]
async fn end_to_end_against_http_endpoint() {
    use axum::{routing::post, Json, Router};
    use tokio::net::TcpListener;

    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let hits = Arc::new(Mutex::new(Vec::<serde_json::Value>::new()));
    let recorded = hits.clone();
    let app = Router::new().route(
        "/predict_api",
        post(move |Json(body): Json<serde_json::Value>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().expect("hits lock").push(body);
                Json(serde_json::json!({ "success": true, "prob": 20, "label": 0 }))
            }
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client = PredictionClient::new(&ClientSettings {
        server_url: format!("http://{addr}"),
        ..ClientSettings::default()
    })
    .expect("client");
    let mut controller = FormController::new(client, valid_form());

    let view = controller.submit().await;

    let result = view.result.expect("result panel");
    assert_eq!(result.probability, "20");
    assert_eq!(result.badge.text, "Low risk");
    let hits = hits.lock().expect("hits lock");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["age"], "52");
    assert_eq!(hits[0]["ap_lo"], "80");
}
