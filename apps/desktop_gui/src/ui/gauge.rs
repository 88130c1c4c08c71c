//! Native painting of a `GaugeFigure` as a half-dial.

use std::f32::consts::PI;

use client_core::gauge::{GaugeFigure, GAUGE_MAX, GAUGE_MIN};
use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Vec2};

use crate::ui::theme::READOUT_FALLBACK;

const SEGMENTS_PER_HALF_TURN: f32 = 64.0;

/// Dial angle for `value`: the axis minimum sits at the left (pi), the
/// maximum at the right (0).
fn angle_for(value: f64) -> f32 {
    let t = ((value - GAUGE_MIN) / (GAUGE_MAX - GAUGE_MIN)).clamp(0.0, 1.0) as f32;
    PI * (1.0 - t)
}

pub fn arc_points(center: Pos2, radius: f32, from: f64, to: f64) -> Vec<Pos2> {
    let start = angle_for(from);
    let end = angle_for(to);
    let steps = ((start - end).abs() / PI * SEGMENTS_PER_HALF_TURN)
        .ceil()
        .max(1.0) as usize;

    (0..=steps)
        .map(|i| {
            let angle = start + (end - start) * i as f32 / steps as f32;
            center + Vec2::new(radius * angle.cos(), -radius * angle.sin())
        })
        .collect()
}

pub fn show_gauge(ui: &mut egui::Ui, figure: &GaugeFigure) -> egui::Response {
    let height = figure.layout.height as f32;
    let width = ui.available_width().max(height);
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let margin = &figure.layout.margin;
    let inner = egui::Rect::from_min_max(
        rect.min + Vec2::new(margin.l as f32, margin.t as f32),
        rect.max - Vec2::new(margin.r as f32, margin.b as f32),
    );
    let radius = (inner.width() / 2.0).min(inner.height() - 24.0) * 0.85;
    let band_width = radius * 0.28;
    let center = Pos2::new(inner.center().x, inner.bottom() - 24.0);
    let painter = ui.painter_at(rect);

    for band in figure.bands() {
        let color = Color32::from_hex(band.color).unwrap_or(Color32::GRAY);
        painter.add(Shape::line(
            arc_points(center, radius, band.range[0], band.range[1]),
            Stroke::new(band_width, color),
        ));
    }

    let value = figure.value();
    if value > GAUGE_MIN {
        let bar_color = Color32::from_hex(figure.tone().hex()).unwrap_or(Color32::WHITE);
        painter.add(Shape::line(
            arc_points(center, radius, GAUGE_MIN, value),
            Stroke::new(band_width * 0.45, bar_color),
        ));
    }

    let text_color = Color32::from_hex(figure.layout.font.color).unwrap_or(READOUT_FALLBACK);
    painter.text(
        center,
        Align2::CENTER_BOTTOM,
        figure.readout(),
        FontId::proportional((radius * 0.32).max(14.0)),
        text_color,
    );

    let tick_font = FontId::proportional(12.0);
    let tick_offset = Vec2::new(0.0, band_width / 2.0 + 4.0);
    painter.text(
        center + Vec2::new(-radius, 0.0) + tick_offset,
        Align2::CENTER_TOP,
        format!("{GAUGE_MIN}"),
        tick_font.clone(),
        text_color,
    );
    painter.text(
        center + Vec2::new(radius, 0.0) + tick_offset,
        Align2::CENTER_TOP,
        format!("{GAUGE_MAX}"),
        tick_font,
        text_color,
    );

    response.on_hover_text(format!("Estimated risk {}", figure.readout()))
}
