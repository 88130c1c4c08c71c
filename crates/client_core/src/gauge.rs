//! Gauge figure for a risk probability.
//!
//! The figure serializes to a Plotly `{data, layout, config}` document so a
//! web surface can hand it to a charting library as-is. Native surfaces read
//! the same structure to paint their own gauge.

use serde::Serialize;

pub const GAUGE_MIN: f64 = 0.0;
pub const GAUGE_MAX: f64 = 100.0;
pub const READOUT_SUFFIX: &str = "%";

const AMBER_THRESHOLD: f64 = 30.0;
const RED_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeTone {
    Green,
    Amber,
    Red,
}

impl GaugeTone {
    pub fn for_value(value: f64) -> Self {
        if value > RED_THRESHOLD {
            GaugeTone::Red
        } else if value > AMBER_THRESHOLD {
            GaugeTone::Amber
        } else {
            GaugeTone::Green
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            GaugeTone::Green => "#10b981",
            GaugeTone::Amber => "#f59e0b",
            GaugeTone::Red => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeBand {
    pub range: [f64; 2],
    pub color: &'static str,
}

pub const GAUGE_BANDS: [GaugeBand; 3] = [
    GaugeBand {
        range: [GAUGE_MIN, AMBER_THRESHOLD],
        color: "#ecfccb",
    },
    GaugeBand {
        range: [AMBER_THRESHOLD, RED_THRESHOLD],
        color: "#fff7ed",
    },
    GaugeBand {
        range: [RED_THRESHOLD, GAUGE_MAX],
        color: "#fff1f2",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeFigure {
    pub data: Vec<IndicatorTrace>,
    pub layout: GaugeLayout,
    pub config: PlotConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub value: f64,
    pub gauge: GaugeSpec,
    pub number: NumberFormat,
    pub domain: Domain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    pub axis: Axis,
    pub bar: Bar,
    pub steps: Vec<GaugeBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub range: [f64; 2],
    pub tickmode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberFormat {
    pub suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeLayout {
    pub margin: Margin,
    pub height: u32,
    pub paper_bgcolor: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
    pub family: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotConfig {
    #[serde(rename = "displayModeBar")]
    pub display_mode_bar: bool,
    pub responsive: bool,
}

impl GaugeLayout {
    fn compact() -> Self {
        Self {
            margin: Margin {
                t: 8,
                b: 8,
                l: 8,
                r: 8,
            },
            height: 220,
            paper_bgcolor: "rgba(0,0,0,0)",
            font: Font {
                color: "#e6eef6",
                family: "Inter, system-ui",
            },
        }
    }
}

/// Builds the gauge for `prob`, clamped to the 0-100 axis.
pub fn render_gauge(prob: f64) -> GaugeFigure {
    let value = prob.clamp(GAUGE_MIN, GAUGE_MAX);
    let tone = GaugeTone::for_value(value);

    GaugeFigure {
        data: vec![IndicatorTrace {
            kind: "indicator",
            mode: "gauge+number",
            value,
            gauge: GaugeSpec {
                axis: Axis {
                    range: [GAUGE_MIN, GAUGE_MAX],
                    tickmode: "auto",
                },
                bar: Bar { color: tone.hex() },
                steps: GAUGE_BANDS.to_vec(),
            },
            number: NumberFormat {
                suffix: READOUT_SUFFIX,
            },
            domain: Domain {
                x: [0.0, 1.0],
                y: [0.0, 1.0],
            },
        }],
        layout: GaugeLayout::compact(),
        config: PlotConfig {
            display_mode_bar: false,
            responsive: true,
        },
    }
}

impl GaugeFigure {
    fn trace(&self) -> Option<&IndicatorTrace> {
        self.data.first()
    }

    pub fn value(&self) -> f64 {
        self.trace().map_or(GAUGE_MIN, |trace| trace.value)
    }

    pub fn tone(&self) -> GaugeTone {
        GaugeTone::for_value(self.value())
    }

    pub fn bands(&self) -> &[GaugeBand] {
        self.trace()
            .map(|trace| trace.gauge.steps.as_slice())
            .unwrap_or_default()
    }

    /// Numeric readout as the chart shows it, e.g. `73.5%`.
    pub fn readout(&self) -> String {
        format!("{}{READOUT_SUFFIX}", self.value())
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
#[path = "tests/gauge_tests.rs"]
mod tests;
