use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use client_core::{
    config::SETTINGS_FILE, load_settings_from, FormController, PageView, PredictionClient,
};
use shared::domain::{FormInput, FormSchema};
use tracing_subscriber::EnvFilter;

/// Submits one risk prediction form and prints what the result panel shows.
#[derive(Parser, Debug)]
struct Args {
    /// Overrides the server url from the settings file and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = SETTINGS_FILE)]
    config: PathBuf,
    /// A form value, repeatable: `--field age=52 --field ap_hi=120`.
    #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    fields: Vec<(String, String)>,
    /// Start from every field of the cardio form, blank, so unset ones are
    /// reported as missing.
    #[arg(long)]
    full_form: bool,
    /// Also print the gauge figure as Plotly JSON.
    #[arg(long)]
    gauge_json: bool,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("field name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn build_form(full_form: bool, fields: Vec<(String, String)>) -> FormInput {
    let mut form = if full_form {
        FormSchema::cardio().empty_input()
    } else {
        FormInput::new()
    };
    for (name, value) in fields {
        form.set(name, value);
    }
    form
}

fn view_lines(view: &PageView) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(error) = &view.error {
        lines.push(format!("error: {}", error.message));
    }
    if let Some(result) = &view.result {
        lines.push(format!("probability: {}%", result.probability));
        lines.push(format!("risk: {}", result.badge.text));
        lines.push(format!("{} {}", result.advice.heading, result.advice.body));
    }
    lines
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings_from(&args.config);
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    tracing::debug!(?settings, "loaded client settings");

    let client = PredictionClient::new(&settings)?;
    let mut controller = FormController::new(client, build_form(args.full_form, args.fields));
    let view = controller.submit().await;

    for line in view_lines(&view) {
        println!("{line}");
    }

    if let Some(error) = view.error {
        bail!("prediction not shown: {}", error.message);
    }

    if args.gauge_json {
        if let Some(result) = &view.result {
            println!("{}", serde_json::to_string_pretty(&result.gauge)?);
        }
    }

    Ok(())
}
