#[cfg(test)]
mod test {
    use crate::chart::date_label;
    use crate::prelude::*;
    use crate::tests::toolkit::{assert_close, bsc_subset, hip_subset, potsdam_epoch, test_resource};

    fn polar_chart(opts: &PolarChartOpts) -> PolarChart {
        PolarChart::build(&bsc_subset(), Observer::default(), potsdam_epoch(), opts).unwrap()
    }

    fn line<'a>(chart: &'a PolarChart, name: &str) -> &'a Polyline {
        chart
            .lines
            .iter()
            .find(|(figure, _)| figure.as_deref() == Some(name))
            .map(|(_, polyline)| polyline)
            .unwrap()
    }

    #[test]
    fn polar_layers() {
        let chart = polar_chart(&PolarChartOpts::default());

        // Arcturus is below the horizon, HR 7002 is too faint to be loaded
        assert_eq!(chart.stars.len(), 25);
        assert!(chart.stars.iter().all(|star| star.is_visible()));
        assert!(chart.names().iter().all(|name| *name != "16Alp Boo"));
        assert_eq!(chart.theta.len(), chart.stars.len());
        assert_eq!(chart.r.len(), chart.stars.len());
        assert!(chart.r.iter().all(|r| *r >= 0.0 && *r < 90.0));

        assert_eq!(chart.bright.len(), 23);
        assert!(chart.bright.iter().all(|star| star.magnitude < 4.5));
        assert_eq!(chart.faint.len(), 1);
        assert_eq!(chart.faint[0].name, "4Eps1Lyr");

        // brightest star gets the largest marker
        let sirius = chart
            .bright
            .iter()
            .find(|star| star.name == "9Alp CMa")
            .unwrap();
        assert_close(sirius.size, 0.5 * 5.0 * 5.0, 1.0E-9, "sirius marker");
        assert!(chart.bright.iter().all(|star| star.size <= sirius.size));
        assert!(chart.bright.iter().all(|star| star.size >= 0.5 * 0.5 * 0.5 - 1.0E-9));
    }

    #[test]
    fn polar_figures() {
        let chart = polar_chart(&PolarChartOpts::default());
        assert_eq!(chart.lines.len(), 22);

        assert_eq!(line(&chart, "Cassiopeia").len(), 5);
        assert_eq!(line(&chart, "Canis Minor").len(), 2);
        assert_eq!(line(&chart, "Orion").len(), 4);
        assert!(line(&chart, "Leo").is_empty());

        // resolved points are the star coordinates, in figure order
        let names = chart.names();
        let polaris = names.iter().position(|name| *name == "1Alp UMi").unwrap();
        let ursa_minor = line(&chart, "Ursa Minor");
        assert_eq!(ursa_minor.len(), 1);
        assert_eq!(
            ursa_minor.points()[0],
            (chart.theta[polaris], chart.r[polaris])
        );
        assert!(chart.drawable_lines().all(|polyline| polyline.len() >= 2));
    }

    #[test]
    fn polar_labels() {
        let chart = polar_chart(&PolarChartOpts::default());
        // Arcturus is below the horizon
        assert_eq!(chart.labels.len(), 10);
        assert!(chart.labels.iter().all(|label| label.text != "Arcturus"));

        let names = chart.names();
        let aldebaran = names.iter().position(|name| *name == "87Alp Tau").unwrap();
        let label = chart
            .labels
            .iter()
            .find(|label| label.text == "Aldebaran")
            .unwrap();
        assert_eq!((label.theta, label.r), (chart.theta[aldebaran], chart.r[aldebaran]));
    }

    #[test]
    fn polar_planets() {
        let chart = polar_chart(&PolarChartOpts::default());
        assert!(chart
            .planets
            .iter()
            .all(|planet| planet.horizontal.altitude > 0.0 && planet.r < 90.0));
        // Jupiter and Saturn set early in the evening, in december 2019
        assert!(chart
            .planets
            .iter()
            .all(|marker| marker.planet != Planet::Jupiter && marker.planet != Planet::Saturn));

        let opts = PolarChartOpts {
            planets: false,
            ..Default::default()
        };
        assert!(polar_chart(&opts).planets.is_empty());
    }

    #[test]
    fn polar_custom_figures() {
        let opts = PolarChartOpts {
            figures: vec![
                Figure::new(Some("Summer triangle"), &["Alp Lyr", "Alp Cyg", "Alp Aql", "Alp Lyr"]),
                Figure::edge(None, "Unknown", "Nowhere"),
            ],
            labels: vec![
                Label::new(" Bet Ori ", "Rigel"),
                Label::new(" ", "Nothing"),
                Label::new("Alp Aql", "Altair"),
            ],
            ..Default::default()
        };
        let chart = polar_chart(&opts);
        assert_eq!(chart.lines.len(), 2);
        // Altair is not part of the catalogue excerpt
        assert_eq!(chart.lines[0].1.len(), 3);
        assert!(chart.lines[1].1.is_empty());
        assert_eq!(chart.drawable_lines().count(), 1);
        assert_eq!(chart.labels.len(), 1);
        assert_eq!(chart.labels[0].text, "Rigel");
    }

    #[test]
    fn polar_resolution_is_deterministic() {
        let opts = PolarChartOpts::default();
        let first = polar_chart(&opts);
        let second = polar_chart(&opts);
        assert_eq!(first.lines, second.lines);
        assert_eq!(first.labels, second.labels);
    }

    fn stellarium() -> Stellarium {
        Stellarium::from_file(test_resource(&["FAB", "constellationship.fab"])).unwrap()
    }

    #[test]
    fn stereo_chart() {
        let catalogue = hip_subset();
        let stellarium = stellarium();
        let epoch = Epoch::from_gregorian_utc_at_midnight(2020, 7, 15);
        let chart = StereoChart::build(
            &catalogue,
            Some(&stellarium),
            None,
            epoch,
            &StereoChartOpts::default(),
        )
        .unwrap();

        assert_close(chart.limit, (22.5_f64).to_radians().tan(), 1.0E-12, "limit");
        assert_eq!(chart.projection.center(), Equatorial::new(0.0, 90.0));

        // HIP 7 and HIP 7461 are fainter than the limit
        assert_eq!(chart.stars.len(), 9);
        assert!(chart.stars.iter().all(|star| star.magnitude <= 5.0));
        let vega = chart.stars.iter().find(|star| star.name == "91262").unwrap();
        assert_close(vega.size, (0.5 + 5.0 - 0.03) * (0.5 + 5.0 - 0.03), 1.0E-9, "vega marker");

        // Polaris is close to the centre
        let polaris = chart.stars.iter().find(|star| star.name == "11767").unwrap();
        assert!(chart.contains(polaris.x, polaris.y));
        assert!(polaris.x.hypot(polaris.y) < 0.01);

        // one Cygnus edge refers to a missing star
        assert_eq!(chart.edges.len(), 6);
        assert!(chart.comet.is_none());
        assert!(chart.track.is_empty());
    }

    #[test]
    fn stereo_edges_use_exact_numbers() {
        // HIP 746 must not resolve to HIP 7461
        let catalogue = hip_subset();
        let catalogue = Catalogue::new(
            catalogue.kind,
            catalogue
                .stars
                .into_iter()
                .filter(|star| star.id != 746)
                .collect(),
        );
        let chart = StereoChart::build(
            &catalogue,
            Some(&stellarium()),
            None,
            Epoch::from_gregorian_utc_at_midnight(2020, 7, 15),
            &StereoChartOpts::default(),
        )
        .unwrap();
        assert_eq!(chart.edges.len(), 5);
    }

    #[test]
    fn stereo_comet_track() {
        let comets = CometElements::from_file(test_resource(&["COMETS", "CometEls.txt"])).unwrap();
        let neowise = CometElements::select(&comets, "NEOWISE").unwrap();
        let epoch = Epoch::from_gregorian_utc_at_midnight(2020, 7, 15);
        let opts = StereoChartOpts {
            center: Equatorial::new(120.0, 45.0),
            field_of_view: 60.0,
            ..Default::default()
        };
        let chart = StereoChart::build(&hip_subset(), None, Some(&neowise), epoch, &opts).unwrap();

        assert_eq!(chart.comet.as_deref(), Some("C/2020 F3 (NEOWISE)"));
        assert_eq!(chart.track.len(), 7);
        assert_eq!(chart.track[3].epoch, epoch);
        assert_eq!(chart.track[3].label, "2020-07-15");
        assert_eq!(chart.track[0].label, "2020-07-12");
        assert!(chart.track.iter().all(|marker| chart.contains(marker.x, marker.y)));
        assert!(chart.edges.is_empty());
    }

    #[test]
    fn stereo_invalid_centre() {
        let opts = StereoChartOpts {
            center: Equatorial { ra: 0.0, dec: 95.0 },
            ..Default::default()
        };
        assert!(matches!(
            StereoChart::build(&hip_subset(), None, None, potsdam_epoch(), &opts),
            Err(Error::InvalidProjectionCentre)
        ));
    }

    #[test]
    fn date_labels() {
        let epoch = Epoch::from_gregorian_utc(2020, 7, 3, 16, 15, 10, 0);
        assert_eq!(date_label(epoch), "2020-07-03");
    }
}
