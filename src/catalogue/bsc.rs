//! Yale Bright Star Catalogue (BSC5) records
use super::{normalize_name, CatalogueStar, Error};
use crate::{constants::ARCSEC_PER_DEG, coords::Equatorial};

const HR: (usize, usize) = (0, 4);
const NAME: (usize, usize) = (4, 14);
const RA_HOURS: (usize, usize) = (75, 77);
const RA_MINUTES: (usize, usize) = (77, 79);
const RA_SECONDS: (usize, usize) = (79, 83);
const DEC_SIGN: (usize, usize) = (83, 84);
const DEC_DEGREES: (usize, usize) = (84, 86);
const DEC_MINUTES: (usize, usize) = (86, 88);
const DEC_SECONDS: (usize, usize) = (88, 90);
const VMAG: (usize, usize) = (102, 107);
const PM_RA: (usize, usize) = (148, 154);
const PM_DEC: (usize, usize) = (154, 160);

/// Catalogue entries sharing one name in BSC5, renamed by HR number
pub(crate) const DUPLICATE_NAMES: [(u32, &str); 6] = [
    (5054, "79Zet1UMa"),
    (5055, "79Zet2UMa"),
    (1948, "50Zet1Ori"),
    (1949, "50Zet2Ori"),
    (1851, "34Del1Ori"),
    (1852, "34Del2Ori"),
];

/*
 * Returns the (trimmed) content of a fixed width field,
 * empty when the record is too short
 */
fn field(line: &str, range: (usize, usize)) -> &str {
    let end = range.1.min(line.len());
    if range.0 >= end {
        return "";
    }
    line.get(range.0..end).unwrap_or("").trim()
}

fn parse_f64(line: &str, range: (usize, usize), nth: usize, name: &'static str) -> Result<f64, Error> {
    field(line, range)
        .parse::<f64>()
        .map_err(|_| Error::InvalidField { line: nth, field: name })
}

/// Parses one BSC5 record. Returns None for withdrawn entries
/// (no position or no magnitude).
pub(crate) fn parse_record(line: &str, nth: usize) -> Result<Option<CatalogueStar>, Error> {
    let id = field(line, HR)
        .parse::<u32>()
        .map_err(|_| Error::InvalidField { line: nth, field: "HR" })?;

    if field(line, RA_HOURS).is_empty() || field(line, VMAG).is_empty() {
        return Ok(None);
    }

    let ra_h = parse_f64(line, RA_HOURS, nth, "RAh")?;
    let ra_m = parse_f64(line, RA_MINUTES, nth, "RAm")?;
    let ra_s = parse_f64(line, RA_SECONDS, nth, "RAs")?;
    let ra = 15.0 * (ra_h + ra_m / 60.0 + ra_s / 3600.0);

    let sign = match field(line, DEC_SIGN) {
        "-" => -1.0,
        "+" | "" => 1.0,
        _ => {
            return Err(Error::InvalidField {
                line: nth,
                field: "DE-",
            })
        },
    };
    let dec_d = parse_f64(line, DEC_DEGREES, nth, "DEd")?;
    let dec_m = parse_f64(line, DEC_MINUTES, nth, "DEm")?;
    let dec_s = parse_f64(line, DEC_SECONDS, nth, "DEs")?;
    let dec = sign * (dec_d + dec_m / 60.0 + dec_s / ARCSEC_PER_DEG);

    let magnitude = parse_f64(line, VMAG, nth, "Vmag")?;

    // proper motions are given in arcsec/yr
    let pm_ra = field(line, PM_RA).parse::<f64>().unwrap_or(0.0) * 1000.0;
    let pm_dec = field(line, PM_DEC).parse::<f64>().unwrap_or(0.0) * 1000.0;

    Ok(Some(CatalogueStar {
        id,
        name: normalize_name(field(line, NAME)),
        magnitude,
        position: Equatorial::new(ra, dec),
        pm_ra,
        pm_dec,
    }))
}

/// Renames known duplicates, so each one can be designated
pub(crate) fn rename_duplicates(stars: &mut [CatalogueStar]) {
    for star in stars.iter_mut() {
        if let Some((_, name)) = DUPLICATE_NAMES.iter().find(|(hr, _)| *hr == star.id) {
            star.name = name.to_string();
        }
    }
}
