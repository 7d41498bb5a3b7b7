use geocol_catalog::{CatalogSet, NameCatalog};
use geocol_detect::{Decider, LatLonDecider, SingleColumnDecider, build_deciders};
use geocol_model::{ColumnCandidate, DetectionResults, SemanticType};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

fn catalog(special: &[&str], long: &[&str], short: &[&str]) -> NameCatalog {
    NameCatalog {
        special: special.iter().map(|s| (*s).to_string()).collect(),
        long: long.iter().map(|s| (*s).to_string()).collect(),
        short: short.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn columns(results: DetectionResults) -> Vec<ColumnCandidate> {
    match results {
        DetectionResults::Columns { candidates, .. } => candidates,
        DetectionResults::Pairs { .. } => panic!("expected column results"),
    }
}

#[test]
fn short_name_pair_scores_one_hundred() {
    let lat = catalog(&[], &[], &["lat"]);
    let lon = catalog(&[], &[], &["lon"]);
    let decider = LatLonDecider::new(&lat, &lon);
    let DetectionResults::Pairs { pairs } = decider.detect(&headers(&["lat", "lon", "name"]))
    else {
        panic!("expected pair results");
    };
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].lat.column_name, "lat");
    assert_eq!(pairs[0].lon.column_name, "lon");
    assert_eq!(pairs[0].confidence, 100);
}

#[test]
fn long_prefix_pair_scores_seventy() {
    let lat = catalog(&[], &["Latitude"], &[]);
    let lon = catalog(&[], &["Longitude"], &[]);
    let decider = LatLonDecider::new(&lat, &lon);
    let DetectionResults::Pairs { pairs } =
        decider.detect(&headers(&["Latitude_deg", "Longitude_deg"]))
    else {
        panic!("expected pair results");
    };
    assert_eq!(pairs.len(), 1);
    let pair = &pairs[0];
    assert!((pair.lat.confidence - 0.7).abs() < 1e-6);
    assert!((pair.lon.confidence - 0.7).abs() < 1e-6);
    assert_eq!(pair.confidence, 70);
    assert_eq!(pair.lat.suffix, "_deg");
    assert!(pair.lat.is_long_alias);
}

#[test]
fn reserved_color_key_matches_exactly() {
    let decider = SingleColumnDecider::new(
        SemanticType::Color,
        &catalog(&["COLOR"], &[], &[]),
    );
    let candidates = columns(decider.detect(&headers(&["color"])));
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].semantic_type, SemanticType::Color);
    assert_eq!(candidates[0].confidence, 1.0);
}

#[test]
fn unknown_header_is_empty_for_every_decider() {
    let deciders = build_deciders(&CatalogSet::builtin());
    let sample = headers(&["user_id"]);
    for decider in &deciders {
        assert!(
            decider.detect(&sample).is_empty(),
            "decider {} claimed user_id",
            decider.name()
        );
    }
}

#[test]
fn mgrs_prefix_and_interior_matches() {
    let decider = SingleColumnDecider::new(SemanticType::Mgrs, &catalog(&[], &["mgrs"], &[]));

    // "mgrs" leads the cell, so this is a prefix match with the long bonus.
    let candidates = columns(decider.detect(&headers(&["mgrs_grid"])));
    assert_eq!(candidates.len(), 1);
    assert!((candidates[0].confidence - 0.7).abs() < 1e-6);
    assert_eq!(candidates[0].suffix, "_grid");

    // An interior occurrence drops to the substring tier.
    let candidates = columns(decider.detect(&headers(&["grid_mgrs_zone"])));
    assert_eq!(candidates.len(), 1);
    assert!((candidates[0].confidence - (1.0 / 6.0) * 1.4).abs() < 1e-6);
}

#[test]
fn exact_match_always_scores_full_confidence() {
    // Long or short, an exact hit is 1.0.
    let long_side = SingleColumnDecider::new(
        SemanticType::Position,
        &catalog(&[], &["position"], &[]),
    );
    let short_side = SingleColumnDecider::new(
        SemanticType::Position,
        &catalog(&[], &[], &["position"]),
    );
    for decider in [long_side, short_side] {
        let candidates = columns(decider.detect(&headers(&["POSITION"])));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].confidence, 1.0);
    }
}

#[test]
fn first_alias_in_catalog_order_wins() {
    // "posit" precedes "position" in catalog order, so the prefix match on
    // the first alias settles the cell even though a later alias would be
    // an exact match.
    let decider = SingleColumnDecider::new(
        SemanticType::Position,
        &catalog(&[], &["posit", "position"], &[]),
    );
    let candidates = columns(decider.detect(&headers(&["position"])));
    assert_eq!(candidates.len(), 1);
    assert!((candidates[0].confidence - 0.7).abs() < 1e-6);
    assert_eq!(candidates[0].suffix, "ion");

    // With the exact alias first, equality wins outright.
    let decider = SingleColumnDecider::new(
        SemanticType::Position,
        &catalog(&[], &["position", "posit"], &[]),
    );
    let candidates = columns(decider.detect(&headers(&["position"])));
    assert_eq!(candidates[0].confidence, 1.0);
}

#[test]
fn single_claim_per_header_cell() {
    let decider = SingleColumnDecider::new(
        SemanticType::WktGeometry,
        &catalog(&["GEOMETRY"], &["geometry"], &["geom", "wkt"]),
    );
    let candidates = columns(decider.detect(&headers(&["geometry_wkt", "note", "wkt"])));
    assert_eq!(candidates.len(), 2);
    let mut indices: Vec<usize> = candidates.iter().map(|c| c.column_index).collect();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 2]);
}

#[test]
fn long_bonus_is_exactly_1_4x_the_short_score() {
    // Two prefix matches against aliases of equal literal length, one
    // catalogued long and one short.
    let long_decider = SingleColumnDecider::new(
        SemanticType::Position,
        &catalog(&[], &["abcd"], &[]),
    );
    let short_decider = SingleColumnDecider::new(
        SemanticType::Position,
        &catalog(&[], &[], &["abcd"]),
    );
    let long_conf = columns(long_decider.detect(&headers(&["abcd_x"])))[0].confidence;
    let short_conf = columns(short_decider.detect(&headers(&["abcd_x"])))[0].confidence;
    assert!((long_conf - short_conf * 1.4).abs() < 1e-6);
}

#[test]
fn pairing_delta_bound_holds_for_all_emitted_pairs() {
    let lat = catalog(&["LAT"], &["Latitude"], &["lat"]);
    let lon = catalog(&["LON"], &["Longitude"], &["lon"]);
    let decider = LatLonDecider::new(&lat, &lon);
    // Mixed tiers: the special keys claim every cell, exact (1.0) for the
    // bare names and affix (0.92) for the "_deg" variants.
    let DetectionResults::Pairs { pairs } = decider.detect(&headers(&[
        "lat",
        "Longitude_deg",
        "Latitude_deg",
        "lon",
    ])) else {
        panic!("expected pair results");
    };
    assert!(!pairs.is_empty());
    for pair in &pairs {
        assert!(
            (pair.lat.confidence - pair.lon.confidence).abs() < 0.2,
            "pair {}/{} violates delta bound",
            pair.lat.column_name,
            pair.lon.column_name
        );
    }
}

#[test]
fn duplicate_name_pairs_are_deduplicated() {
    let lat = catalog(&[], &[], &["lat"]);
    let lon = catalog(&[], &[], &["lon"]);
    let decider = LatLonDecider::new(&lat, &lon);
    // Two identically named lat columns produce identical (lat, lon) name
    // pairs; only the first survives.
    let DetectionResults::Pairs { pairs } = decider.detect(&headers(&["lat", "lat", "lon"]))
    else {
        panic!("expected pair results");
    };
    assert_eq!(pairs.len(), 1);
}

#[test]
fn pair_order_follows_lat_outer_lon_inner_cross_product() {
    let lat = catalog(&[], &[], &["lat"]);
    let lon = catalog(&[], &[], &["lon"]);
    let decider = LatLonDecider::new(&lat, &lon);
    let DetectionResults::Pairs { pairs } =
        decider.detect(&headers(&["lat_a", "lon_a", "lat_b", "lon_b"]))
    else {
        panic!("expected pair results");
    };
    // Candidates come out of the reverse scan: lat_b before lat_a, lon_b
    // before lon_a. Cross product keeps lat outer.
    let keys: Vec<(String, String)> = pairs
        .iter()
        .map(|p| (p.lat.column_name.clone(), p.lon.column_name.clone()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("lat_b".to_string(), "lon_b".to_string()),
            ("lat_b".to_string(), "lon_a".to_string()),
            ("lat_a".to_string(), "lon_b".to_string()),
            ("lat_a".to_string(), "lon_a".to_string()),
        ]
    );
}

#[test]
fn pipeline_detects_across_semantics() {
    let deciders = build_deciders(&CatalogSet::builtin());
    let sample = headers(&["lat", "lon", "color", "geometry", "notes"]);
    let results: Vec<(&str, DetectionResults)> = deciders
        .iter()
        .map(|decider| (decider.name(), decider.detect(&sample)))
        .collect();

    let latlon = &results[0].1;
    assert_eq!(latlon.len(), 1);
    let color = results
        .iter()
        .find(|(name, _)| *name == "color")
        .map(|(_, r)| r)
        .expect("color decider present");
    assert_eq!(color.len(), 1);
    let mgrs = results
        .iter()
        .find(|(name, _)| *name == "mgrs")
        .map(|(_, r)| r)
        .expect("mgrs decider present");
    assert!(mgrs.is_empty());
}

#[test]
fn deciders_are_reusable_across_samples() {
    // One decider instance, two header samples: no state leaks between runs.
    let decider = match &build_deciders(&CatalogSet::builtin())[0] {
        Decider::LatLon(decider) => decider.clone(),
        Decider::Single(_) => panic!("first decider must be lat/lon"),
    };
    let first = decider.detect(&headers(&["lat", "lon"]));
    let second = decider.detect(&headers(&["lat", "lon"]));
    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
}
