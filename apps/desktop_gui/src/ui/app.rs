//! App shell: the prediction form, its buttons, and the result/error panels.

use anyhow::anyhow;
use client_core::{complete_submit, render, start_submit, UiState};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{FieldKind, FieldSpec, FormInput, FormSchema};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{classify_prediction_failure, UiEvent},
        orchestration::dispatch_backend_command,
    },
    ui::panels::{show_error_panel, show_result_panel},
};

pub struct RiskFormApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    schema: FormSchema,
    form: FormInput,
    state: UiState,
    status: String,
}

impl RiskFormApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        schema: FormSchema,
    ) -> Self {
        let form = schema.empty_input();
        Self {
            cmd_tx,
            ui_rx,
            schema,
            form,
            state: UiState::Idle,
            status: "Starting backend worker...".to_string(),
        }
    }

    fn submit(&mut self) {
        let (state, payload) = start_submit(std::mem::take(&mut self.state), &self.form);
        self.state = state;

        let Some(payload) = payload else {
            return;
        };
        self.status = "Waiting for prediction...".to_string();
        let cmd = BackendCommand::Predict { payload };
        if let Err(reason) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.state = complete_submit(
                std::mem::take(&mut self.state),
                Err(anyhow!(reason.clone())),
            );
            self.status = reason;
        }
    }

    fn reset(&mut self) {
        self.form.clear_values();
        self.state = std::mem::take(&mut self.state).reset();
        if !self.state.is_submitting() {
            self.status = "Form cleared".to_string();
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::BackendUnavailable(message) => {
                    self.status = classify_prediction_failure(&message)
                        .map(str::to_string)
                        .unwrap_or(message);
                }
                UiEvent::PredictionSettled(outcome) => {
                    if !self.state.is_submitting() {
                        tracing::warn!("dropping prediction that arrived with no submit pending");
                        continue;
                    }
                    self.state = complete_submit(std::mem::take(&mut self.state), outcome);
                    self.status = match &self.state {
                        UiState::ErrorShown(message) => classify_prediction_failure(message)
                            .unwrap_or("Prediction failed")
                            .to_string(),
                        _ => "Prediction ready".to_string(),
                    };
                }
            }
        }
    }

    fn show_field(ui: &mut egui::Ui, spec: &FieldSpec, value: &mut String) {
        ui.label(spec.label.as_str());
        match &spec.kind {
            FieldKind::Number { placeholder } => {
                ui.add(
                    egui::TextEdit::singleline(value)
                        .id_salt(spec.name.as_str())
                        .hint_text(placeholder.as_str())
                        .desired_width(180.0),
                );
            }
            FieldKind::Select { options } => {
                let selected = options
                    .iter()
                    .find(|option| option.value == *value)
                    .map_or("Select...", |option| option.label.as_str());
                egui::ComboBox::from_id_salt(spec.name.as_str())
                    .selected_text(selected)
                    .width(180.0)
                    .show_ui(ui, |ui| {
                        for option in options {
                            ui.selectable_value(value, option.value.clone(), option.label.as_str());
                        }
                    });
            }
        }
        ui.end_row();
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("predict-form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for spec in &self.schema.fields {
                    if let Some(value) = self.form.value_mut(&spec.name) {
                        Self::show_field(ui, spec, value);
                    }
                }
            });
    }
}

impl eframe::App for RiskFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).small());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Cardiovascular risk");
                ui.add_space(8.0);
                self.show_form(ui);
                ui.add_space(12.0);

                let view = render(&self.state);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(view.submit.enabled, egui::Button::new(view.submit.label))
                        .clicked()
                    {
                        self.submit();
                    }
                    if ui.button("Reset").clicked() {
                        self.reset();
                    }
                });
                ui.add_space(12.0);

                // Panels come from the state as it was when the frame began;
                // a click above shows up on the next frame.
                if let Some(error) = &view.error {
                    show_error_panel(ui, error);
                }
                if let Some(result) = &view.result {
                    show_result_panel(ui, result);
                }
            });
        });

        if self.state.is_submitting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
