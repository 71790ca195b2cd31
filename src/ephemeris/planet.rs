//! Major planets, from the J2000 mean elements and their linear rates
//! (E.M. Standish, "Keplerian Elements for Approximate Positions of the
//! Major Planets", valid from 1800 to 2050).
use hifitime::Epoch;
use nalgebra::Vector3;

use super::{geocentric, solve_kepler, Orientation};
use crate::coords::{julian_centuries, Equatorial};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Planets that can be placed on a chart
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/*
 * a (AU), e, I (deg), L (deg), long.peri (deg), long.node (deg),
 * each followed by its rate per julian century
 */
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    i: (f64, f64),
    l: (f64, f64),
    peri: (f64, f64),
    node: (f64, f64),
}

const EARTH_MOON_BARYCENTER: Elements = Elements {
    a: (1.00000261, 0.00000562),
    e: (0.01671123, -0.00004392),
    i: (-0.00001531, -0.01294668),
    l: (100.46457166, 35999.37244981),
    peri: (102.93768193, 0.32327364),
    node: (0.0, 0.0),
};

impl Elements {
    /*
     * Heliocentric ecliptic J2000 position, in AU
     */
    fn heliocentric(&self, t: f64) -> Vector3<f64> {
        let a = self.a.0 + self.a.1 * t;
        let e = self.e.0 + self.e.1 * t;
        let i = self.i.0 + self.i.1 * t;
        let l = self.l.0 + self.l.1 * t;
        let peri = self.peri.0 + self.peri.1 * t;
        let node = self.node.0 + self.node.1 * t;

        let m = (l - peri).to_radians();
        let ea = solve_kepler(m, e);
        let x = a * (ea.cos() - e);
        let y = a * (1.0 - e * e).sqrt() * ea.sin();

        Orientation {
            perihelion: peri - node,
            node,
            inclination: i,
        }
        .to_ecliptic(x, y)
    }
}

/// Heliocentric ecliptic J2000 position of the Earth (Earth-Moon barycenter), in AU
pub fn earth_heliocentric(epoch: Epoch) -> Vector3<f64> {
    EARTH_MOON_BARYCENTER.heliocentric(julian_centuries(epoch))
}

impl Planet {
    /// All planets, inner to outer
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    fn elements(&self) -> Elements {
        match self {
            Self::Mercury => Elements {
                a: (0.38709927, 0.00000037),
                e: (0.20563593, 0.00001906),
                i: (7.00497902, -0.00594749),
                l: (252.25032350, 149472.67411175),
                peri: (77.45779628, 0.16047689),
                node: (48.33076593, -0.12534081),
            },
            Self::Venus => Elements {
                a: (0.72333566, 0.00000390),
                e: (0.00677672, -0.00004107),
                i: (3.39467605, -0.00078890),
                l: (181.97909950, 58517.81538729),
                peri: (131.60246718, 0.00268329),
                node: (76.67984255, -0.27769418),
            },
            Self::Mars => Elements {
                a: (1.52371034, 0.00001847),
                e: (0.09339410, 0.00007882),
                i: (1.84969142, -0.00813131),
                l: (-4.55343205, 19140.30268499),
                peri: (-23.94362959, 0.44441088),
                node: (49.55953891, -0.29257343),
            },
            Self::Jupiter => Elements {
                a: (5.20288700, -0.00011607),
                e: (0.04838624, -0.00013253),
                i: (1.30439695, -0.00183714),
                l: (34.39644051, 3034.74612775),
                peri: (14.72847983, 0.21252668),
                node: (100.47390909, 0.20469106),
            },
            Self::Saturn => Elements {
                a: (9.53667594, -0.00125060),
                e: (0.05386179, -0.00050991),
                i: (2.48599187, 0.00193609),
                l: (49.95424423, 1222.49362201),
                peri: (92.59887831, -0.41897216),
                node: (113.66242448, -0.28867794),
            },
            Self::Uranus => Elements {
                a: (19.18916464, -0.00196176),
                e: (0.04725744, -0.00004397),
                i: (0.77263783, -0.00242939),
                l: (313.23810451, 428.48202785),
                peri: (170.95427630, 0.40805281),
                node: (74.01692503, 0.04240589),
            },
            Self::Neptune => Elements {
                a: (30.06992276, 0.00026291),
                e: (0.00859048, 0.00005105),
                i: (1.77004347, 0.00035372),
                l: (-55.12002969, 218.45945325),
                peri: (44.96476227, -0.32241464),
                node: (131.78422574, -0.00508664),
            },
        }
    }

    /// Heliocentric ecliptic J2000 position, in AU
    pub fn heliocentric(&self, epoch: Epoch) -> Vector3<f64> {
        self.elements().heliocentric(julian_centuries(epoch))
    }

    /// Geocentric J2000 equatorial position
    pub fn position(&self, epoch: Epoch) -> Equatorial {
        self.position_and_distance(epoch).0
    }

    /// Geocentric J2000 equatorial position and distance to the Earth (AU)
    pub fn position_and_distance(&self, epoch: Epoch) -> (Equatorial, f64) {
        geocentric(&self.heliocentric(epoch), &earth_heliocentric(epoch))
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
