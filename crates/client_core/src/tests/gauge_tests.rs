use super::*;

#[test]
fn clamps_value_to_axis() {
    assert_eq!(render_gauge(140.0).value(), 100.0);
    assert_eq!(render_gauge(-5.0).value(), 0.0);
    assert_eq!(render_gauge(73.5).value(), 73.5);
}

#[test]
fn bar_color_follows_thresholds() {
    assert_eq!(render_gauge(73.5).tone(), GaugeTone::Red);
    assert_eq!(render_gauge(60.0).tone(), GaugeTone::Amber);
    assert_eq!(render_gauge(30.1).tone(), GaugeTone::Amber);
    assert_eq!(render_gauge(30.0).tone(), GaugeTone::Green);
    assert_eq!(render_gauge(20.0).tone(), GaugeTone::Green);

    let figure = render_gauge(61.0);
    assert_eq!(figure.data[0].gauge.bar.color, "#ef4444");
}

#[test]
fn bands_are_fixed_regardless_of_value() {
    for prob in [0.0, 45.0, 99.0] {
        let figure = render_gauge(prob);
        let ranges: Vec<_> = figure.bands().iter().map(|band| band.range).collect();
        assert_eq!(ranges, [[0.0, 30.0], [30.0, 60.0], [60.0, 100.0]]);
    }
}

#[test]
fn readout_has_percent_suffix() {
    assert_eq!(render_gauge(73.5).readout(), "73.5%");
    assert_eq!(render_gauge(20.0).readout(), "20%");
}

#[test]
fn serializes_as_plotly_document() {
    let json = render_gauge(20.0).to_json();

    let trace = &json["data"][0];
    assert_eq!(trace["type"], "indicator");
    assert_eq!(trace["mode"], "gauge+number");
    assert_eq!(trace["value"], 20.0);
    assert_eq!(trace["gauge"]["axis"]["range"], serde_json::json!([0.0, 100.0]));
    assert_eq!(trace["gauge"]["bar"]["color"], "#10b981");
    assert_eq!(trace["gauge"]["steps"][1]["color"], "#fff7ed");
    assert_eq!(trace["number"]["suffix"], "%");

    assert_eq!(json["layout"]["height"], 220);
    assert_eq!(json["layout"]["margin"]["t"], 8);
    assert_eq!(json["layout"]["paper_bgcolor"], "rgba(0,0,0,0)");
    assert_eq!(json["config"]["displayModeBar"], false);
    assert_eq!(json["config"]["responsive"], true);
}

#[test]
fn rerender_replaces_the_single_trace() {
    let first = render_gauge(10.0);
    let second = render_gauge(80.0);
    assert_eq!(first.data.len(), 1);
    assert_eq!(second.data.len(), 1);
    assert_ne!(first, second);
}
