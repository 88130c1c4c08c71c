//! Backend worker: owns a tokio runtime and the prediction client.

use std::thread;

use anyhow::anyhow;
use client_core::{ClientSettings, PredictionClient, PredictionTransport};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || run_backend(settings, cmd_rx, ui_tx));
}

fn run_backend(settings: ClientSettings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to build backend runtime: {err}");
            let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                "backend worker startup failure: failed to build runtime: {err}"
            )));
            return;
        }
    };

    runtime.block_on(async move {
        // A bad server url still lets the worker run so that every submit
        // settles with the setup error instead of hanging.
        let client = match PredictionClient::new(&settings) {
            Ok(client) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Predictions go to {}",
                    client.endpoint()
                )));
                Ok(client)
            }
            Err(err) => {
                tracing::error!(server_url = %settings.server_url, "prediction client unavailable: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(err.to_string()));
                Err(err.to_string())
            }
        };

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::Predict { payload } => {
                    let outcome = match &client {
                        Ok(client) => client.predict(&payload).await,
                        Err(setup_error) => Err(anyhow!(setup_error.clone())),
                    };
                    if ui_tx.send(UiEvent::PredictionSettled(outcome)).is_err() {
                        tracing::debug!("ui event receiver dropped; stopping backend worker");
                        break;
                    }
                }
            }
        }
    });
}
