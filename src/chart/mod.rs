//! Chart models, ready to be rendered.
//!
//! A chart model only contains plot plane coordinates, marker sizes and
//! texts: any renderer can draw it without further astronomy.
use hifitime::Epoch;

pub mod polar;
pub mod stereo;

/// Formats the calendar date of given [Epoch] (UTC), as used in labels
pub fn date_label(epoch: Epoch) -> String {
    let (y, m, d, _, _, _, _) = epoch.to_gregorian_utc();
    format!("{:04}-{:02}-{:02}", y, m, d)
}

