use client_core::view::{ErrorPanel, ResultPanel};
use egui::{Color32, RichText};

use crate::ui::{
    gauge::show_gauge,
    theme::{badge_colors, CARD_FILL, ERROR_FILL, ERROR_STROKE},
};

pub fn show_error_panel(ui: &mut egui::Ui, panel: &ErrorPanel) {
    egui::Frame::NONE
        .fill(ERROR_FILL)
        .stroke(egui::Stroke::new(1.0, ERROR_STROKE))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&panel.message).color(Color32::WHITE));
        });
}

pub fn show_result_panel(ui: &mut egui::Ui, panel: &ResultPanel) {
    egui::Frame::NONE
        .fill(CARD_FILL)
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Estimated probability").strong());
                ui.label(RichText::new(format!("{}%", panel.probability)).heading());

                let (fill, text) = badge_colors(panel.badge.label);
                egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::symmetric(6, 4))
                    .show(ui, |ui| {
                        ui.label(RichText::new(panel.badge.text).color(text).strong());
                    });
            });

            show_gauge(ui, &panel.gauge);

            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(panel.advice.heading).strong());
                ui.label(panel.advice.body);
            });
        });
}
