use plotly::{
    color::NamedColor,
    common::{Line, Marker, MarkerSymbol, Mode, Position},
    Plot, Scatter,
};

use starchart::prelude::StereoChart;

use super::{build_chart_plot, build_text_trace, marker_size};

/// Draws a [StereoChart]: constellation edges, stars clipped to the field
/// of view, then the comet track with its date labels.
pub fn plot_stereo_chart(chart: &StereoChart, title: &str, size: (u32, u32)) -> Plot {
    let mut plot = build_chart_plot(title, chart.limit, size);

    for ((x0, y0), (x1, y1)) in chart.edges.iter() {
        let trace = Scatter::new(vec![*x0, *x1], vec![*y0, *y1])
            .mode(Mode::Lines)
            .line(Line::new().color(NamedColor::Blue).width(1.0))
            .opacity(0.4)
            .show_legend(false);
        plot.add_trace(trace);
    }

    let stars = chart
        .stars
        .iter()
        .filter(|star| chart.contains(star.x, star.y))
        .collect::<Vec<_>>();
    let x: Vec<f64> = stars.iter().map(|star| star.x).collect();
    let y: Vec<f64> = stars.iter().map(|star| star.y).collect();
    let sizes: Vec<usize> = stars.iter().map(|star| marker_size(star.size)).collect();
    let names = stars
        .iter()
        .map(|star| format!("HIP {} ({:.2})", star.name, star.magnitude))
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

    if let Some(comet) = &chart.comet {
        let x: Vec<f64> = chart.track.iter().map(|marker| marker.x).collect();
        let y: Vec<f64> = chart.track.iter().map(|marker| marker.y).collect();
        let trace = Scatter::new(x, y)
            .mode(Mode::Markers)
            .name(comet)
            .marker(
                Marker::new()
                    .size(6)
                    .symbol(MarkerSymbol::Circle)
                    .color(NamedColor::Red),
            );
        plot.add_trace(trace);

        let x = chart
            .track
            .iter()
            .map(|marker| marker.x + StereoChart::LABEL_OFFSET)
            .collect();
        let y = chart
            .track
            .iter()
            .map(|marker| marker.y + StereoChart::LABEL_OFFSET)
            .collect();
        let text = chart.track.iter().map(|marker| marker.label.clone()).collect();
        plot.add_trace(build_text_trace(
            x,
            y,
            text,
            Position::TopRight,
            NamedColor::Red,
        ));
    }

    plot
}
