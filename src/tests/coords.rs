#[cfg(test)]
mod test {
    use crate::coords::{
        ecliptic_to_equatorial, greenwich_mean_sidereal_time, julian_year, local_sidereal_time,
    };
    use crate::observer::local_time_to_utc;
    use crate::prelude::*;
    use crate::tests::toolkit::{assert_close, assert_close_deg, potsdam_epoch};
    use nalgebra::Vector3;

    #[test]
    fn sidereal_time() {
        let j2000 = Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);
        assert_close(
            greenwich_mean_sidereal_time(j2000),
            280.46061837,
            1.0E-6,
            "gmst(J2000)",
        );
        assert_close(julian_year(j2000), 2000.0, 1.0E-9, "julian year");

        let epoch = potsdam_epoch();
        assert_close(
            local_sidereal_time(epoch, 13.10),
            53.5703,
            1.0E-3,
            "lst(potsdam)",
        );
        let lst = local_sidereal_time(epoch, -170.0);
        assert!((0.0..360.0).contains(&lst));
    }

    #[test]
    fn horizon_transform() {
        let latitude = 52.4;
        let lst = 100.0;

        let pole = Equatorial::new(0.0, 90.0);
        assert_close(
            pole.to_horizontal(lst, latitude).altitude,
            latitude,
            1.0E-9,
            "celestial pole altitude",
        );

        let zenith = Equatorial::new(lst, latitude);
        assert_close(
            zenith.to_horizontal(lst, latitude).altitude,
            90.0,
            1.0E-5,
            "zenith altitude",
        );

        let south = Equatorial::new(lst, 0.0).to_horizontal(lst, latitude);
        assert_close(south.altitude, 90.0 - latitude, 1.0E-9, "meridian altitude");
        assert_close_deg(south.azimuth, 180.0, 1.0E-9, "meridian azimuth");

        let east = Equatorial::new(lst + 90.0, 0.0).to_horizontal(lst, latitude);
        assert_close(east.altitude, 0.0, 1.0E-9, "rising altitude");
        assert_close_deg(east.azimuth, 90.0, 1.0E-9, "rising azimuth");

        let west = Equatorial::new(lst - 90.0, 0.0).to_horizontal(lst, latitude);
        assert_close_deg(west.azimuth, 270.0, 1.0E-9, "setting azimuth");
        assert_close(west.zenith_distance(), 90.0, 1.0E-9, "setting zenith distance");
    }

    #[test]
    fn precession() {
        let j2000 = Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);
        let vega = Equatorial::new(279.234583, 38.783611);
        let same = vega.precess_from_j2000(j2000);
        assert_close_deg(same.ra, vega.ra, 1.0E-9, "ra");
        assert_close(same.dec, vega.dec, 1.0E-9, "dec");

        // about 50"/yr along the ecliptic
        let equinox = Equatorial::new(0.0, 0.0);
        let later = equinox.precess_from_j2000(Epoch::from_gregorian_utc(2050, 1, 1, 12, 0, 0, 0));
        let separation = equinox.separation(&later);
        assert!(
            separation > 0.6 && separation < 0.8,
            "precession over 50 years: {}°",
            separation
        );
        assert!(later.ra > 0.0 && later.ra < 1.0);
    }

    #[test]
    fn proper_motion() {
        let sirius = Equatorial::new(101.287083, -16.716111);
        let moved = sirius.with_proper_motion(-553.0, -1205.0, 2000.0, 2100.0);
        assert_close(moved.dec, -16.716111 - 120.5 / 3600.0, 1.0E-9, "sirius dec");
        assert!(moved.ra < sirius.ra);

        let none = sirius.with_proper_motion(-553.0, -1205.0, 2000.0, 2000.0);
        assert_eq!(none, sirius);
    }

    #[test]
    fn cartesian() {
        let position = Equatorial::new(-30.0, 45.0);
        assert_close(position.ra, 330.0, 1.0E-9, "wrapped ra");
        let back = Equatorial::from_cartesian(&(position.to_cartesian() * 3.0));
        assert_close_deg(back.ra, 330.0, 1.0E-9, "ra");
        assert_close(back.dec, 45.0, 1.0E-9, "dec");
        assert_close(position.separation(&back), 0.0, 1.0E-6, "separation");
    }

    #[test]
    fn ecliptic_pole() {
        let pole = ecliptic_to_equatorial(&Vector3::new(0.0, 0.0, 1.0));
        let pole = Equatorial::from_cartesian(&pole);
        assert_close(pole.dec, 90.0 - 23.43928, 1.0E-9, "ecliptic pole declination");
        assert_close_deg(pole.ra, 270.0, 1.0E-9, "ecliptic pole right ascension");

        let equinox = ecliptic_to_equatorial(&Vector3::new(1.0, 0.0, 0.0));
        assert_close(equinox.x, 1.0, 1.0E-12, "vernal equinox");
    }

    #[test]
    fn observer() {
        let observer = Observer::default();
        assert_eq!(observer, Observer::new(52.4, 13.10, 36.0));
        assert_eq!(observer.to_string(), "52.40°N 13.10°E 36m");

        let polaris = Equatorial::new(37.954583, 89.264167);
        let horizontal = observer.horizontal(&polaris, potsdam_epoch());
        assert!(
            (horizontal.altitude - observer.latitude).abs() < 1.0,
            "polaris altitude: {}",
            horizontal.altitude
        );
        assert_close_deg(horizontal.azimuth, 0.0, 1.5, "polaris azimuth");
    }

    #[test]
    fn local_time() {
        let epoch = local_time_to_utc("2019-12-01 23:00:00", 1.0).unwrap();
        assert_eq!(epoch, potsdam_epoch());

        let epoch = local_time_to_utc("2019-12-01T23:00:00", 1.0).unwrap();
        assert_eq!(epoch, potsdam_epoch());

        let epoch = local_time_to_utc("2020-07-15 03:30:00", -2.5).unwrap();
        assert_eq!(epoch, Epoch::from_gregorian_utc(2020, 7, 15, 6, 0, 0, 0));

        assert!(local_time_to_utc("not a date", 0.0).is_err());
    }
}
