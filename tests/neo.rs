use meteor_madness::neo::{self, NeoError};

const FEED_JSON: &str = r#"{
  "near_earth_objects": {
    "2026-08-28": [
      {
        "id": "3542519",
        "name": "(2010 PK9)",
        "absolute_magnitude_h": 21.87,
        "estimated_diameter": {
          "meters": {
            "estimated_diameter_min": 100.0,
            "estimated_diameter_max": 240.0
          }
        },
        "is_potentially_hazardous_asteroid": true,
        "close_approach_data": [
          {
            "close_approach_date": "2026-08-28",
            "relative_velocity": { "kilometers_per_second": "18.127" },
            "miss_distance": { "kilometers": "42741662.5" }
          }
        ]
      }
    ],
    "2026-08-29": [
      {
        "id": "54016476",
        "name": "(2020 HF4)",
        "estimated_diameter": {
          "meters": {
            "estimated_diameter_min": 30.0,
            "estimated_diameter_max": 70.0
          }
        },
        "is_potentially_hazardous_asteroid": false,
        "close_approach_data": []
      }
    ]
  }
}"#;

#[test]
fn feed_parses_and_flattens_in_date_order() {
    let feed = neo::parse_feed(FEED_JSON.as_bytes()).expect("feed");
    let names: Vec<&str> = feed.asteroids().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["(2010 PK9)", "(2020 HF4)"]);

    let hazardous = feed
        .asteroids()
        .find(|a| a.is_potentially_hazardous_asteroid)
        .expect("hazardous record");
    assert_eq!(hazardous.id, "3542519");
    assert!((hazardous.miss_distance_km().unwrap() - 42_741_662.5).abs() < 1e-3);
}

#[test]
fn record_derives_impact_parameters() {
    let feed = neo::parse_feed(FEED_JSON.as_bytes()).expect("feed");
    let record = feed.asteroids().next().expect("first record");

    let params = neo::impact_parameters(record, 45.0, 3000.0).expect("derived parameters");
    assert!((params.diameter_m - 170.0).abs() < 1e-9);
    assert!((params.velocity_km_s - 18.127).abs() < 1e-9);
    assert_eq!(params.angle_deg, 45.0);
    assert_eq!(params.density_kg_m3, 3000.0);
}

#[test]
fn record_without_close_approach_is_reported() {
    let feed = neo::parse_feed(FEED_JSON.as_bytes()).expect("feed");
    let quiet = feed.asteroids().nth(1).expect("second record");

    let err = neo::impact_parameters(quiet, 90.0, 2600.0).unwrap_err();
    assert!(matches!(err, NeoError::MissingCloseApproach(ref name) if name == "(2020 HF4)"));
}

#[test]
fn unparseable_velocity_is_reported() {
    let mut record = {
        let feed = neo::parse_feed(FEED_JSON.as_bytes()).expect("feed");
        feed.asteroids().next().expect("first record").clone()
    };
    record.close_approach_data[0]
        .relative_velocity
        .kilometers_per_second = "fast".to_string();

    let err = record.approach_velocity_km_s().unwrap_err();
    assert!(matches!(err, NeoError::InvalidFigure { ref value, .. } if value == "fast"));
}
