use starchart::prelude::{Catalogue, CatalogueKind, Epoch, Observer, PolarChart, PolarChartOpts};

#[test]
fn potsdam_winter_evening() {
    let catalogue =
        Catalogue::from_path("test_resources/BSC5/bsc5_subset.dat", CatalogueKind::BrightStar)
            .unwrap();
    let epoch = Epoch::from_gregorian_utc(2019, 12, 1, 22, 0, 0, 0);
    let chart =
        PolarChart::build(&catalogue, Observer::default(), epoch, &PolarChartOpts::default())
            .unwrap();

    let names = chart.names();
    for visible in ["1Alp UMi", "58Alp Ori", "13Alp Aur", "9Alp CMa"] {
        assert!(names.contains(&visible), "{} should be visible", visible);
    }
    assert!(!names.contains(&"16Alp Boo"));

    // Capella stands high in the east
    let capella = chart.stars.iter().find(|star| star.name == "13Alp Aur").unwrap();
    assert!(capella.altitude > 60.0);
    assert!(capella.azimuth > 45.0 && capella.azimuth < 135.0);

    let labels = chart
        .labels
        .iter()
        .map(|label| label.text.as_str())
        .collect::<Vec<_>>();
    assert!(labels.contains(&"Polaris"));
    assert!(labels.contains(&"Aldebaran"));
}

#[test]
fn twelve_hours_later() {
    let catalogue =
        Catalogue::from_file("test_resources/BSC5/bsc5_subset.dat", CatalogueKind::BrightStar)
            .unwrap();
    let epoch = Epoch::from_gregorian_utc(2019, 12, 2, 10, 0, 0, 0);
    let chart =
        PolarChart::build(&catalogue, Observer::default(), epoch, &PolarChartOpts::default())
            .unwrap();

    // circumpolar stars never set
    let names = chart.names();
    for circumpolar in ["1Alp UMi", "18Alp Cas", "11Bet Cas"] {
        assert!(names.contains(&circumpolar), "{} should be visible", circumpolar);
    }
    // Sirius is below the horizon
    assert!(!names.contains(&"9Alp CMa"));
}
