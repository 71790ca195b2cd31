//! Hipparcos main catalogue (hip_main.dat) records
use super::{CatalogueStar, Error};
use crate::coords::Equatorial;

const HIP: usize = 1;
const VMAG: usize = 5;
const RA_DEG: usize = 8;
const DEC_DEG: usize = 9;
const PM_RA: usize = 12;
const PM_DEC: usize = 13;

/// Parses one hip_main.dat record. Returns None for entries
/// that do not come with an astrometric solution.
pub(crate) fn parse_record(line: &str, nth: usize) -> Result<Option<CatalogueStar>, Error> {
    let fields = line.split('|').map(|f| f.trim()).collect::<Vec<_>>();
    let get = |index: usize| fields.get(index).copied().unwrap_or("");

    let id = get(HIP)
        .parse::<u32>()
        .map_err(|_| Error::InvalidField { line: nth, field: "HIP" })?;

    if get(RA_DEG).is_empty() || get(DEC_DEG).is_empty() || get(VMAG).is_empty() {
        return Ok(None);
    }

    let parse = |index: usize, field: &'static str| {
        get(index)
            .parse::<f64>()
            .map_err(|_| Error::InvalidField { line: nth, field })
    };

    let ra = parse(RA_DEG, "RAdeg")?;
    let dec = parse(DEC_DEG, "DEdeg")?;
    let magnitude = parse(VMAG, "Vmag")?;

    // proper motions are given in mas/yr
    let pm_ra = get(PM_RA).parse::<f64>().unwrap_or(0.0);
    let pm_dec = get(PM_DEC).parse::<f64>().unwrap_or(0.0);

    Ok(Some(CatalogueStar {
        id,
        name: id.to_string(),
        magnitude,
        position: Equatorial::new(ra, dec),
        pm_ra,
        pm_dec,
    }))
}
