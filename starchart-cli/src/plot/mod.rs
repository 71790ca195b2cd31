use std::fs::File;
use std::io::Write;
use std::path::Path;

use plotly::{
    color::NamedColor,
    common::{Font, Mode, Position, Title},
    layout::Axis,
    Layout, Plot, Scatter,
};

use crate::Error;

mod polar;
pub use polar::plot_polar_chart;

mod stereo;
pub use stereo::plot_stereo_chart;

/*
 * Converts a marker area (square points) to a plotly marker diameter (pixels)
 */
pub fn marker_size(area: f64) -> usize {
    (2.0 * area.max(0.0).sqrt()).round() as usize + 1
}

/*
 * Hidden square axis, symmetric around zero
 */
fn chart_axis(limit: f64) -> Axis {
    Axis::new()
        .range(vec![-limit, limit])
        .show_grid(false)
        .zero_line(false)
        .show_tick_labels(false)
        .visible(false)
}

/*
 * Builds an empty chart: equal axes, no legend
 */
pub fn build_chart_plot(title: &str, limit: f64, size: (u32, u32)) -> Plot {
    let layout = Layout::new()
        .title(Title::with_text(title).font(Font::new().size(18)))
        .x_axis(chart_axis(limit))
        .y_axis(chart_axis(limit))
        .width(size.0 as usize)
        .height(size.1 as usize)
        .show_legend(false);
    let mut p = Plot::new();
    p.set_layout(layout);
    p
}

/*
 * Builds a text only trace
 */
pub fn build_text_trace(
    x: Vec<f64>,
    y: Vec<f64>,
    text: Vec<String>,
    position: Position,
    color: NamedColor,
) -> Box<Scatter<f64, f64>> {
    Scatter::new(x, y)
        .mode(Mode::Text)
        .text_array(text)
        .text_position(position)
        .text_font(Font::new().color(color))
        .show_legend(false)
}

/*
 * Renders given plot as standalone HTML
 */
pub fn render_html(path: &Path, plot: &Plot) -> Result<(), Error> {
    let mut fd = File::create(path)?;
    write!(fd, "{}", plot.to_html())?;
    info!("\"{}\" generated", path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{build_chart_plot, marker_size};
    #[test]
    fn chart_title() {
        let plot = build_chart_plot("Star chart for Potsdam", 1.0, (600, 600));
        assert!(plot.to_html().contains("Star chart for Potsdam"));
    }
    #[test]
    fn marker_sizes() {
        assert_eq!(marker_size(0.0), 1);
        assert_eq!(marker_size(12.5), 8);
        assert_eq!(marker_size(-1.0), 1);
        assert!(marker_size(30.25) > marker_size(12.5));
    }
}
