use intensity_segments::configuration::Configuration;
use intensity_segments::intensity::intensityerror::IntensityError;
use intensity_segments::intensity::intensitysegments::IntensitySegments;

#[test]
fn fresh_map_serializes_empty() {
    assert_eq!(IntensitySegments::<f64>::new().serialize(), "[]");
}

#[test]
fn overlapping_adds() {
    let mut segments = IntensitySegments::new();
    segments.add(10.0, 30.0, 1.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,1],[30,0]]");
    segments.add(20.0, 40.0, 1.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,1],[20,2],[30,1],[40,0]]");
    segments.add(10.0, 40.0, -2.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,-1],[20,0],[30,-1],[40,0]]");
}

#[test]
fn adds_cancelling_back_to_zero_drop_leading_breakpoints() {
    let mut segments = IntensitySegments::new();
    segments.add(10.0, 30.0, 1.0).unwrap();
    segments.add(20.0, 40.0, 1.0).unwrap();
    segments.add(10.0, 40.0, -1.0).unwrap();
    assert_eq!(segments.serialize(), "[[20,1],[30,0]]");
    segments.add(10.0, 40.0, -1.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,-1],[20,0],[30,-1],[40,0]]");
}

#[test]
fn overlapping_sets_merge_equal_neighbours() {
    let mut segments = IntensitySegments::new();
    segments.set(10.0, 30.0, 2.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,2],[30,0]]");
    segments.set(20.0, 40.0, 3.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,2],[20,3],[40,0]]");
    segments.set(10.0, 40.0, 1.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,1],[40,0]]");
}

#[test]
fn zero_amount_add_is_noop() {
    let mut segments = IntensitySegments::new();
    segments.add(10.0, 20.0, 0.0).unwrap();
    assert_eq!(segments.serialize(), "[]");
}

#[test]
fn negative_domain() {
    let mut segments = IntensitySegments::new();
    segments.add(-10.0, 0.0, 2.0).unwrap();
    assert_eq!(segments.serialize(), "[[-10,2],[0,0]]");
}

#[test]
fn partial_overlap_and_nested_sets() {
    let mut segments = IntensitySegments::new();
    segments.set(10.0, 20.0, 1.0).unwrap();
    segments.set(15.0, 25.0, 2.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,1],[15,2],[25,0]]");

    let mut segments = IntensitySegments::new();
    segments.set(10.0, 30.0, 1.0).unwrap();
    segments.set(15.0, 25.0, 2.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,1],[15,2],[25,1],[30,0]]");
}

#[test]
fn repeated_set_over_same_range_keeps_last() {
    let mut segments = IntensitySegments::new();
    segments.set(10.0, 20.0, 1.0).unwrap();
    segments.set(10.0, 20.0, 2.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,2],[20,0]]");
}

#[test]
fn set_spanning_two_adjacent_sets() {
    let mut segments = IntensitySegments::new();
    segments.set(10.0, 20.0, 1.0).unwrap();
    segments.set(20.0, 30.0, 2.0).unwrap();
    segments.set(15.0, 25.0, 3.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,1],[15,3],[25,2],[30,0]]");
}

#[test]
fn set_to_zero_inside_a_segment() {
    let mut segments = IntensitySegments::new();
    segments.set(10.0, 30.0, 1.0).unwrap();
    segments.set(15.0, 25.0, 0.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,1],[15,0],[25,1],[30,0]]");
}

#[test]
fn adjacent_sets_with_equal_values_collapse() {
    let mut segments = IntensitySegments::new();
    segments.set(10.0, 20.0, 2.0).unwrap();
    segments.set(20.0, 30.0, 3.0).unwrap();
    segments.set(30.0, 40.0, 3.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,2],[20,3],[40,0]]");

    let mut segments = IntensitySegments::new();
    segments.set(10.0, 20.0, 1.0).unwrap();
    segments.set(30.0, 40.0, 0.0).unwrap();
    assert_eq!(segments.serialize(), "[[10,1],[20,0]]");
}

#[test]
fn invalid_ranges_are_rejected_without_effect() {
    let mut segments = IntensitySegments::new();
    segments.add(10.0, 30.0, 1.0).unwrap();
    assert_eq!(
        segments.add(5.0, 5.0, 1.0),
        Err(IntensityError::InvalidRange { from: "5".to_owned(), to: "5".to_owned() })
    );
    assert!(segments.set(5.0, 3.0, 1.0).is_err());
    assert_eq!(segments.serialize(), "[[10,1],[30,0]]");
}

#[test]
fn shipped_sequences_all_pass() {
    let mut config = Configuration::new();
    config.from_reader(concat!(env!("CARGO_MANIFEST_DIR"), "/json/sequences.json")).unwrap();
    let reports = config.replay_all();
    assert_eq!(reports.len(), 5);
    for report in reports {
        assert!(report.all_passed(), "{} failed: {:?}", report.name(), report.steps());
    }
}
