use plotly::{
    color::NamedColor,
    common::{Line, Marker, MarkerSymbol, Mode, Position},
    Plot, Scatter,
};

use starchart::prelude::{PolarChart, PolarProjection};

use super::{build_chart_plot, build_text_trace, marker_size};

/// Zenith distance of the altitude rings
const RINGS: [f64; 5] = [10.0, 30.0, 50.0, 70.0, 90.0];

/*
 * Circle of given zenith distance, in chart coordinates
 */
fn ring(r: f64) -> (Vec<f64>, Vec<f64>) {
    let projection = PolarProjection;
    (0..=360)
        .map(|deg| projection.to_cartesian((deg as f64).to_radians(), r))
        .unzip()
}

/*
 * Horizon rings and cardinal points
 */
fn plot_frame(plot: &mut Plot) {
    let projection = PolarProjection;
    for r in RINGS {
        let (x, y) = ring(r);
        let width = if r == PolarProjection::R_MAX { 1.5 } else { 0.5 };
        let trace = Scatter::new(x, y)
            .mode(Mode::Lines)
            .line(Line::new().color(NamedColor::LightGray).width(width))
            .show_legend(false);
        plot.add_trace(trace);
    }

    let (x, y): (Vec<f64>, Vec<f64>) = [0.0_f64, 90.0, 180.0, 270.0]
        .iter()
        .map(|azimuth| projection.to_cartesian(azimuth.to_radians(), 95.0))
        .unzip();
    let text = ["N", "E", "S", "W"].iter().map(|c| c.to_string()).collect();
    plot.add_trace(build_text_trace(
        x,
        y,
        text,
        Position::MiddleCenter,
        NamedColor::Black,
    ));
}

/// Draws a [PolarChart]: constellation lines first, then stars, labels
/// and planets on top.
pub fn plot_polar_chart(chart: &PolarChart, caption: &str, size: (u32, u32)) -> Plot {
    let projection = PolarProjection;
    let mut plot = build_chart_plot(caption, 100.0, size);
    plot_frame(&mut plot);

    for polyline in chart.drawable_lines() {
        let (x, y): (Vec<f64>, Vec<f64>) = polyline
            .points()
            .iter()
            .map(|(theta, r)| projection.to_cartesian(*theta, *r))
            .unzip();
        let trace = Scatter::new(x, y)
            .mode(Mode::Lines)
            .line(Line::new().color(NamedColor::DarkBlue).width(1.0))
            .show_legend(false);
        plot.add_trace(trace);
    }

    let (x, y): (Vec<f64>, Vec<f64>) = chart
        .faint
        .iter()
        .map(|star| projection.to_cartesian(star.theta, star.r))
        .unzip();
    let names = chart
        .faint
        .iter()
        .map(|star| star.name.clone())
        .collect::<Vec<_>>();
    let trace = Scatter::new(x, y)
        .mode(Mode::Markers)
        .name("faint stars")
        .marker(
            Marker::new()
                .size(2)
                .symbol(MarkerSymbol::Circle)
                .color(NamedColor::Gray),
        )
        .hover_text_array(names);
    plot.add_trace(trace);

    let (x, y): (Vec<f64>, Vec<f64>) = chart
        .bright
        .iter()
        .map(|star| projection.to_cartesian(star.theta, star.r))
        .unzip();
    let sizes = chart
        .bright
        .iter()
        .map(|star| marker_size(star.size))
        .collect();
    let names = chart
        .bright
        .iter()
        .map(|star| format!("{} ({:.2})", star.name, star.magnitude))
        .collect::<Vec<_>>();
    let trace = Scatter::new(x, y)
        .mode(Mode::Markers)
        .name("stars")
        .marker(
            Marker::new()
                .size_array(sizes)
                .symbol(MarkerSymbol::Circle)
                .color(NamedColor::Black),
        )
        .hover_text_array(names);
    plot.add_trace(trace);

    let (x, y): (Vec<f64>, Vec<f64>) = chart
        .labels
        .iter()
        .map(|label| projection.to_cartesian(label.theta, label.r))
        .unzip();
    let text = chart.labels.iter().map(|label| label.text.clone()).collect();
    plot.add_trace(build_text_trace(
        x,
        y,
        text,
        Position::TopRight,
        NamedColor::Blue,
    ));

    if !chart.planets.is_empty() {
        let (x, y): (Vec<f64>, Vec<f64>) = chart
            .planets
            .iter()
            .map(|planet| projection.to_cartesian(planet.theta, planet.r))
            .unzip();
        let text = chart
            .planets
            .iter()
            .map(|planet| planet.planet.to_string())
            .collect::<Vec<_>>();
        let trace = Scatter::new(x, y)
            .mode(Mode::MarkersText)
            .name("planets")
            .marker(
                Marker::new()
                    .size(8)
                    .symbol(MarkerSymbol::Circle)
                    .color(NamedColor::Orange),
            )
            .text_array(text)
            .text_position(Position::BottomCenter);
        plot.add_trace(trace);
    }

    plot
}
