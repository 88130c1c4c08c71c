//! Colors shared by the panels and the gauge.

use egui::Color32;
use shared::domain::RiskLabel;

pub const ERROR_FILL: Color32 = Color32::from_rgb(111, 53, 53);
pub const ERROR_STROKE: Color32 = Color32::from_rgb(175, 96, 96);
pub const CARD_FILL: Color32 = Color32::from_rgb(30, 36, 48);
pub const READOUT_FALLBACK: Color32 = Color32::from_rgb(230, 238, 246);

pub fn badge_colors(label: RiskLabel) -> (Color32, Color32) {
    match label {
        RiskLabel::High => (Color32::from_rgb(127, 29, 29), Color32::from_rgb(254, 202, 202)),
        RiskLabel::Low => (Color32::from_rgb(6, 78, 59), Color32::from_rgb(167, 243, 208)),
    }
}
