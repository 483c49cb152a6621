use super::*;

fn square() -> Path {
    Path::builder()
        .move_to((0.0, 0.0))
        .unwrap()
        .line_to((10.0, 0.0))
        .unwrap()
        .line_to((10.0, 10.0))
        .unwrap()
        .line_to((0.0, 10.0))
        .unwrap()
        .close()
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn drawing_before_move_to_is_rejected() {
    assert!(matches!(
        PathBuilder::new().line_to((1.0, 1.0)),
        Err(EpicycleError::InvalidPathState(_))
    ));
    assert!(matches!(
        PathBuilder::new().curve_to((0.0, 0.0), (1.0, 1.0), (2.0, 0.0)),
        Err(EpicycleError::InvalidPathState(_))
    ));
    assert!(matches!(
        PathBuilder::new().close(),
        Err(EpicycleError::InvalidPathState(_))
    ));
    assert!(matches!(
        PathBuilder::new().build(),
        Err(EpicycleError::InvalidPathState(_))
    ));
}

#[test]
fn non_finite_coordinates_are_invalid_arguments() {
    assert!(matches!(
        PathBuilder::new().move_to((f64::NAN, 0.0)),
        Err(EpicycleError::InvalidArgument(_))
    ));
    let b = PathBuilder::new().move_to((0.0, 0.0)).unwrap();
    assert!(matches!(
        b.line_to((0.0, f64::INFINITY)),
        Err(EpicycleError::InvalidArgument(_))
    ));
}

#[test]
fn segments_are_kept_in_call_order_and_close_is_not_repeated() {
    let path = Path::builder()
        .move_to((1.0, 2.0))
        .unwrap()
        .line_to((3.0, 4.0))
        .unwrap()
        .close()
        .unwrap()
        .close()
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        path.segments(),
        &[
            Segment::MoveTo(Point::new(1.0, 2.0)),
            Segment::LineTo(Point::new(3.0, 4.0)),
            Segment::Close,
        ]
    );
    assert_eq!(path.start_point(), Point::new(1.0, 2.0));
}

#[test]
fn flatten_copies_lines_exactly_and_closes_back_to_start() {
    let polys = square().flatten(0.1).unwrap();
    assert_eq!(polys.len(), 1);
    assert_eq!(
        polys[0],
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
        ]
    );
    assert!((square().length(0.1).unwrap() - 40.0).abs() < 1e-12);
}

#[test]
fn flatten_rejects_bad_tolerance() {
    assert!(square().flatten(0.0).is_err());
    assert!(square().flatten(f64::NAN).is_err());
}

#[test]
fn curve_flattening_tightens_with_tolerance() {
    // Quarter-circle approximation of radius 100.
    let k = 0.552_284_75 * 100.0;
    let path = Path::builder()
        .move_to((100.0, 0.0))
        .unwrap()
        .curve_to((100.0, k), (k, 100.0), (0.0, 100.0))
        .unwrap()
        .build()
        .unwrap();
    let coarse = path.flatten(1.0).unwrap()[0].len();
    let fine = path.flatten(0.01).unwrap()[0].len();
    assert!(fine > coarse);

    let len = path.length(0.001).unwrap();
    let quarter = std::f64::consts::FRAC_PI_2 * 100.0;
    assert!((len - quarter).abs() < 0.1, "len {len}");
    assert_eq!(
        *path.flatten(0.01).unwrap()[0].last().unwrap(),
        Point::new(0.0, 100.0)
    );
}

#[test]
fn cubic_flattening_follows_the_curve() {
    let k = 0.552_284_75 * 100.0;
    let path = Path::builder()
        .move_to((100.0, 0.0))
        .unwrap()
        .curve_to((100.0, k), (k, 100.0), (0.0, 100.0))
        .unwrap()
        .close()
        .unwrap()
        .build()
        .unwrap();
    let polys = path.flatten(0.01).unwrap();
    assert_eq!(polys.len(), 1);
    let poly = &polys[0];
    assert_eq!(poly[0], Point::new(100.0, 0.0));
    assert_eq!(*poly.last().unwrap(), Point::new(100.0, 0.0));
    // Every point but the closing one lies on the quarter arc.
    for p in &poly[..poly.len() - 1] {
        assert!((p.to_vec2().hypot() - 100.0).abs() < 0.05, "{p:?}");
    }
    assert!(poly.len() > 4);
}

#[test]
fn drawing_after_close_continues_from_subpath_start() {
    let path = Path::builder()
        .move_to((0.0, 0.0))
        .unwrap()
        .line_to((4.0, 0.0))
        .unwrap()
        .close()
        .unwrap()
        .line_to((0.0, 3.0))
        .unwrap()
        .build()
        .unwrap();
    let polys = path.flatten(0.1).unwrap();
    assert_eq!(polys.len(), 2);
    assert_eq!(polys[1], vec![Point::new(0.0, 0.0), Point::new(0.0, 3.0)]);
    assert!((path.length(0.1).unwrap() - 11.0).abs() < 1e-12);

    let bez = path.to_bez_path();
    let moves = bez
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
}

#[test]
fn bez_path_round_trip_elevates_quadratics() {
    let mut bez = BezPath::new();
    bez.move_to((0.0, 0.0));
    bez.quad_to((3.0, 3.0), (6.0, 0.0));
    bez.close_path();

    let path = Path::try_from(&bez).unwrap();
    let Segment::CurveTo { c1, c2, end } = path.segments()[1] else {
        panic!("expected cubic, got {:?}", path.segments()[1]);
    };
    assert!((c1 - Point::new(2.0, 2.0)).hypot() < 1e-12);
    assert!((c2 - Point::new(4.0, 2.0)).hypot() < 1e-12);
    assert_eq!(end, Point::new(6.0, 0.0));
    assert_eq!(path.segments()[2], Segment::Close);

    assert_eq!(square().to_bez_path().elements().len(), 5);
}

#[test]
fn from_segments_validates_like_the_builder() {
    assert!(Path::from_segments([Segment::LineTo(Point::new(1.0, 1.0))]).is_err());
    let path = Path::from_segments(square().segments().iter().copied()).unwrap();
    assert_eq!(path, square());
}

#[test]
fn segments_deserialize_from_tagged_json() {
    let json = r#"[
        {"op": "move_to", "x": 0.0, "y": 0.0},
        {"op": "line_to", "x": 5.0, "y": 0.0},
        {"op": "curve_to", "c1": {"x": 5.0, "y": 5.0}, "c2": {"x": 0.0, "y": 5.0}, "end": {"x": 0.0, "y": 0.0}},
        {"op": "close"}
    ]"#;
    let segs: Vec<Segment> = serde_json::from_str(json).unwrap();
    let path = Path::from_segments(segs).unwrap();
    assert_eq!(path.segments().len(), 4);
}
