use mths::{Config, DetectorBuilder, HotSpot, Mths, MthsError, Point};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Two dense clusters plus scattered background points.
fn sample_points() -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for i in 0..60u32 {
        let x = f64::from((i * 37) % 101) * 25.0;
        let y = f64::from((i * 53) % 97) * 25.0;
        points.push((x, y));
    }
    for (cx, cy) in [(400.0, 400.0), (1800.0, 900.0)] {
        for k in 0..8u32 {
            let angle = f64::from(k) * 0.8;
            points.push((cx + 12.0 * angle.cos(), cy + 9.0 * angle.sin()));
        }
    }
    points
}

fn assert_pairwise_disjoint(hot_spots: &[HotSpot]) {
    for (i, a) in hot_spots.iter().enumerate() {
        for b in &hot_spots[i + 1..] {
            assert!(
                !a.overlaps(b),
                "{:?} overlaps {:?}",
                a.contained_indices,
                b.contained_indices
            );
        }
    }
}

#[test]
fn test_coincident_points_scenario() {
    init_logging();
    let mut mths = Mths::from_coordinates(
        vec![(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)],
        Config::default().with_events(3).with_radius(100.0),
    )
    .unwrap();

    let hot_spots = mths.process();
    assert_eq!(hot_spots.len(), 1);

    let spot = &hot_spots[0];
    assert_eq!(spot.center, Point::new(0.0, 0.0));
    assert_eq!(spot.contained_count, 3);
    assert_eq!(spot.contained_indices, vec![0, 1, 2]);
    assert_eq!(spot.min_radius, 0.0);
}

#[test]
fn test_far_point_is_never_grouped() {
    let mut mths = Mths::from_coordinates(
        vec![(0.0, 0.0), (10.0, 0.0), (1000.0, 1000.0)],
        Config::default().with_events(2).with_radius(50.0),
    )
    .unwrap();

    let hot_spots = mths.process();
    assert_eq!(hot_spots.len(), 1);
    assert_eq!(hot_spots[0].contained_indices, vec![0, 1]);
    assert_eq!(hot_spots[0].centroid_x(), 5.0);
    assert_eq!(hot_spots[0].centroid_y(), 0.0);
    assert!(hot_spots.iter().all(|h| !h.contains_index(2)));
}

#[test]
fn test_two_clusters_scenario() {
    let mut points = Vec::new();
    for (cx, cy) in [(1000.0, 1000.0), (9000.0, 9000.0)] {
        for (dx, dy) in [(0.0, 0.0), (20.0, 0.0), (0.0, 20.0), (20.0, 20.0), (10.0, 10.0)] {
            points.push((cx + dx, cy + dy));
        }
    }

    let mut mths =
        Mths::from_coordinates(points, Config::default().with_events(3).with_radius(300.0))
            .unwrap();
    let hot_spots = mths.process();

    assert_eq!(hot_spots.len(), 2);
    assert!(hot_spots.iter().all(|h| h.contained_count == 5));
    assert_pairwise_disjoint(hot_spots);

    let mut members: Vec<Vec<usize>> = hot_spots
        .iter()
        .map(|h| h.contained_indices.clone())
        .collect();
    members.sort();
    assert_eq!(members, vec![vec![0, 1, 2, 3, 4], vec![5, 6, 7, 8, 9]]);

    for spot in hot_spots {
        assert!((spot.min_radius - 200.0f64.sqrt()).abs() < 1e-9);
    }
}

#[test]
fn test_events_above_point_count_yields_empty_result() {
    let mut mths = Mths::from_coordinates(
        vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
        Config::default().with_events(4),
    )
    .unwrap();

    assert!(mths.process().is_empty());
    assert_eq!(mths.stats().candidates, 0);
}

#[test]
fn test_single_point_is_rejected() {
    let result = Mths::from_coordinates(vec![(0.0, 0.0)], Config::default());
    assert!(matches!(
        result,
        Err(MthsError::InsufficientPoints { found: 1 })
    ));
}

#[test]
fn test_non_sequence_points_are_rejected() {
    for value in [
        json!({ "x": 0.0, "y": 0.0 }),
        json!("0,0 1,1"),
        json!(42),
        json!(null),
    ] {
        let result = Mths::from_json(&value, Config::default());
        assert!(matches!(result, Err(MthsError::InvalidInput(_))));
    }

    let result = DetectorBuilder::new().json_points(json!(true)).build();
    assert!(matches!(result, Err(MthsError::InvalidInput(_))));
}

#[test]
fn test_json_points_process_like_typed_points() {
    let value = json!([[0, 0], [10, 0], { "x": 5, "y": 5 }, [900, 900]]);
    let config = Config::default().with_radius(50.0);

    let mut from_json = Mths::from_json(&value, config.clone()).unwrap();
    let mut typed = Mths::from_coordinates(
        vec![(0.0, 0.0), (10.0, 0.0), (5.0, 5.0), (900.0, 900.0)],
        config,
    )
    .unwrap();

    assert_eq!(from_json.process(), typed.process());
    assert_eq!(from_json.result().len(), 1);
}

#[test]
fn test_every_hot_spot_meets_event_threshold() {
    init_logging();
    for events in [2, 3, 5, 8] {
        for keep_overlapping in [false, true] {
            let config = Config::default()
                .with_events(events)
                .with_radius(60.0)
                .with_keep_overlapping(keep_overlapping);
            let mut mths = Mths::from_coordinates(sample_points(), config).unwrap();

            for spot in mths.process() {
                assert!(spot.contained_count >= events);
                assert_eq!(spot.contained_count, spot.contained_indices.len());
                assert!(spot.min_radius <= 60.0);
            }
        }
    }
}

#[test]
fn test_non_overlapping_result_is_pairwise_disjoint() {
    let mut mths = Mths::from_coordinates(
        sample_points(),
        Config::default().with_events(2).with_radius(80.0),
    )
    .unwrap();

    let hot_spots = mths.process();
    assert!(!hot_spots.is_empty());
    assert_pairwise_disjoint(hot_spots);

    // densest first
    let counts: Vec<usize> = hot_spots.iter().map(|h| h.contained_count).collect();
    let mut sorted = counts.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(counts, sorted);
}

#[test]
fn test_keep_overlapping_has_no_duplicate_member_sets() {
    let mut mths = Mths::from_coordinates(
        sample_points(),
        Config::default()
            .with_events(2)
            .with_radius(80.0)
            .with_keep_overlapping(true),
    )
    .unwrap();

    let hot_spots = mths.process();
    assert!(!hot_spots.is_empty());
    for (i, a) in hot_spots.iter().enumerate() {
        for b in &hot_spots[i + 1..] {
            assert_ne!(a.contained_indices, b.contained_indices);
        }
    }
    assert!(mths.stats().selected <= mths.stats().candidates);
}

#[test]
fn test_keep_overlapping_retains_partial_overlaps() {
    let points = vec![(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)];
    let config = Config::default().with_events(2).with_radius(12.0);

    let mut overlapping =
        Mths::from_coordinates(points.clone(), config.clone().with_keep_overlapping(true)).unwrap();
    let members: Vec<Vec<usize>> = overlapping
        .process()
        .iter()
        .map(|h| h.contained_indices.clone())
        .collect();
    assert_eq!(
        members,
        vec![
            vec![0, 1],
            vec![0, 1, 2],
            vec![1, 2],
            vec![1, 2, 3],
            vec![2, 3],
        ]
    );

    let mut disjoint = Mths::from_coordinates(points, config).unwrap();
    let selected = disjoint.process();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].contained_indices, vec![0, 1, 2]);
    assert_eq!(selected[0].min_radius, 10.0);
}

#[test]
fn test_process_is_deterministic() {
    for keep_overlapping in [false, true] {
        let config = Config::default()
            .with_events(3)
            .with_radius(70.0)
            .with_keep_overlapping(keep_overlapping);

        let mut mths = Mths::from_coordinates(sample_points(), config.clone()).unwrap();
        let first = mths.process().to_vec();
        let second = mths.process().to_vec();
        assert_eq!(first, second);

        let mut fresh = Mths::from_coordinates(sample_points(), config).unwrap();
        assert_eq!(fresh.process(), first.as_slice());
    }
}

#[test]
fn test_area_is_rounded_polygon_area() {
    let mut mths = Mths::from_coordinates(
        vec![(0.0, 0.0), (1.0, 0.0), (0.5, 0.5)],
        Config::default(),
    )
    .unwrap();
    let spot = &mths.process()[0];

    let n = 64.0;
    let expected = 0.5 * n * 1320.0 * 1320.0 * (std::f64::consts::TAU / n).sin();
    assert!((spot.area - expected).abs() < 1e-4);
    assert_eq!(spot.geometry.exterior().0.len(), 65);
}

#[cfg(feature = "geojson")]
#[test]
fn test_geojson_export() {
    let mut mths = Mths::from_coordinates(
        vec![(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (500.0, 0.0)],
        Config::default().with_radius(100.0),
    )
    .unwrap();
    mths.process();

    let geojson = mths.to_geojson().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&geojson).unwrap();
    let features = parsed["features"].as_array().unwrap();

    assert_eq!(features.len(), 1);
    let props = &features[0]["properties"];
    assert_eq!(props["n_points_contained"], 3);
    assert_eq!(props["point_indices"], json!([0, 1, 2]));
    assert_eq!(props["radius"], 0.0);
}
