#[cfg(test)]
mod test {
    use crate::catalogue::Error as CatalogueError;
    use crate::prelude::*;
    use crate::tests::toolkit::{assert_close, bsc_subset, hip_subset, test_resource};
    use std::io::BufReader;
    use std::str::FromStr;

    #[test]
    fn bright_star_subset() {
        let catalogue = bsc_subset();
        assert_eq!(catalogue.kind, CatalogueKind::BrightStar);
        // HR 92 is a withdrawn entry
        assert_eq!(catalogue.len(), 27);
        assert!(catalogue.get_by_id(92).is_none());

        let vega = catalogue.get_by_name("3Alp Lyr").unwrap();
        assert_eq!(vega.id, 7001);
        assert_close(vega.magnitude, 0.03, 1.0E-9, "vega magnitude");
        assert_close(vega.position.ra, 279.234583, 1.0E-5, "vega ra");
        assert_close(vega.position.dec, 38.783611, 1.0E-5, "vega dec");
        assert_close(vega.pm_ra, 201.0, 1.0E-9, "vega pm ra");
        assert_close(vega.pm_dec, 287.0, 1.0E-9, "vega pm dec");

        let rigel = catalogue.get_by_id(1713).unwrap();
        assert_eq!(rigel.name, "19Bet Ori");
        assert!(rigel.position.dec < 0.0);
        assert_close(rigel.position.dec, -8.201667, 1.0E-5, "rigel dec");

        let sirius = catalogue.get_by_id(2491).unwrap();
        assert_close(sirius.magnitude, -1.46, 1.0E-9, "sirius magnitude");

        // nameless entries are kept
        let nameless = catalogue.get_by_id(7002).unwrap();
        assert!(nameless.name.is_empty());
    }

    #[test]
    fn bright_star_duplicates() {
        let catalogue = bsc_subset();
        for (hr, name) in [
            (1851, "34Del1Ori"),
            (1852, "34Del2Ori"),
            (1948, "50Zet1Ori"),
            (1949, "50Zet2Ori"),
            (5054, "79Zet1UMa"),
            (5055, "79Zet2UMa"),
        ] {
            let star = catalogue.get_by_id(hr).unwrap();
            assert_eq!(star.name, name, "HR {}", hr);
        }
        assert!(catalogue.get_by_name("34Del Ori").is_none());
    }

    #[test]
    fn bright_star_names_are_trimmed() {
        let catalogue = bsc_subset();
        for name in catalogue.names() {
            assert_eq!(name, name.trim());
        }
        assert!(catalogue.names().contains(&"1Alp UMi"));
    }

    #[test]
    fn brighter_than() {
        let catalogue = bsc_subset();
        let bright = catalogue.brighter_than(2.0);
        assert!(bright.stars.iter().all(|star| star.magnitude < 2.0));
        assert!(bright.get_by_name("9Alp CMa").is_some());
        assert!(bright.get_by_name("11Bet Cas").is_none());
        assert!(catalogue.brighter_than(-5.0).is_empty());
    }

    #[test]
    fn hipparcos_subset() {
        let catalogue = hip_subset();
        assert_eq!(catalogue.kind, CatalogueKind::Hipparcos);
        assert_eq!(catalogue.epoch(), 1991.25);
        // HIP 119999 has no astrometric solution
        assert_eq!(catalogue.len(), 11);
        assert!(catalogue.get_by_id(119999).is_none());

        let polaris = catalogue.get_by_name("11767").unwrap();
        assert_eq!(polaris.id, 11767);
        assert_close(polaris.position.ra, 37.94614689, 1.0E-9, "polaris ra");
        assert_close(polaris.position.dec, 89.26413805, 1.0E-9, "polaris dec");
        assert_close(polaris.pm_ra, 44.22, 1.0E-9, "polaris pm ra");
        assert_close(polaris.pm_dec, -11.74, 1.0E-9, "polaris pm dec");
    }

    #[test]
    fn malformed_record() {
        let content = "ABCD 3Alp Lyr\n";
        let mut reader = BufReader::new(content.as_bytes());
        match Catalogue::parse(&mut reader, CatalogueKind::BrightStar) {
            Err(CatalogueError::InvalidField { line, field }) => {
                assert_eq!(line, 1);
                assert_eq!(field, "HR");
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_catalogue() {
        let mut reader = BufReader::new("\n\n".as_bytes());
        assert!(matches!(
            Catalogue::parse(&mut reader, CatalogueKind::Hipparcos),
            Err(CatalogueError::EmptyCatalogue)
        ));
    }

    #[test]
    fn missing_file() {
        let path = test_resource(&["BSC5", "does_not_exist.dat"]);
        assert!(matches!(
            Catalogue::from_path(&path, CatalogueKind::BrightStar),
            Err(CatalogueError::IoError(_))
        ));
    }

    #[test]
    fn catalogue_kind() {
        assert_eq!(
            CatalogueKind::from_str("bsc5").unwrap(),
            CatalogueKind::BrightStar
        );
        assert_eq!(
            CatalogueKind::from_str(" HIP ").unwrap(),
            CatalogueKind::Hipparcos
        );
        assert!(CatalogueKind::from_str("tycho").is_err());
        assert_eq!(CatalogueKind::default(), CatalogueKind::BrightStar);
        assert_eq!(CatalogueKind::BrightStar.epoch(), 2000.0);
    }

    #[cfg(feature = "flate2")]
    #[test]
    fn gzip_catalogue() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let plain = std::fs::read(test_resource(&["BSC5", "bsc5_subset.dat"])).unwrap();
        let path = std::env::temp_dir().join("starchart-bsc5-subset.dat.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&plain).unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let catalogue = Catalogue::from_path(&path, CatalogueKind::BrightStar).unwrap();
        assert_eq!(catalogue, bsc_subset());
        let _ = std::fs::remove_file(&path);
    }

    #[cfg(not(feature = "flate2"))]
    #[test]
    fn gzip_catalogue_requires_flate2() {
        let path = std::env::temp_dir().join("starchart-bsc5-subset.dat.gz");
        std::fs::write(&path, [0x1f, 0x8b, 0x08, 0x00]).unwrap();
        assert!(matches!(
            Catalogue::from_path(&path, CatalogueKind::BrightStar),
            Err(CatalogueError::GzipUnsupported)
        ));
        let _ = std::fs::remove_file(&path);
    }
}
