//! UI layer for desktop GUI: app shell, result/error panels, gauge painting, colors.

pub mod app;
pub mod gauge;
pub mod panels;
pub mod theme;

pub use app::RiskFormApp;
