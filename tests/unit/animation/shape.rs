use super::*;
use crate::foundation::error::EpicycleError;

fn small_config() -> SessionConfig {
    SessionConfig {
        sample_count: 128,
        phasor_count: 9,
        ..SessionConfig::default()
    }
}

#[test]
fn shapes_deserialize_from_tagged_json() {
    let rect: Shape = serde_json::from_str(r#"{"kind": "rectangle", "width": 30, "height": 20}"#)
        .unwrap();
    assert_eq!(
        rect,
        Shape::Rectangle {
            width: 30.0,
            height: 20.0
        }
    );

    let synth: Shape = serde_json::from_str(r#"{"kind": "synthetic", "count": 7}"#).unwrap();
    assert_eq!(synth, Shape::Synthetic { count: 7, seed: 0 });

    let line: Shape = serde_json::from_str(
        r#"{"kind": "line_segment", "start": {"x": 0, "y": 0}, "end": {"x": 1, "y": 2}}"#,
    )
    .unwrap();
    assert!(matches!(line, Shape::LineSegment { .. }));
}

#[test]
fn path_backed_shapes_use_config_counts() {
    let cfg = small_config();
    let a = Animator::from_shape(
        &Shape::Rectangle {
            width: 30.0,
            height: 20.0,
        },
        &cfg,
    )
    .unwrap();
    assert_eq!(a.phasor_count(), 9);

    let path = Path::builder()
        .move_to((0.0, 0.0))
        .unwrap()
        .curve_to((10.0, 20.0), (20.0, 20.0), (30.0, 0.0))
        .unwrap()
        .close()
        .unwrap()
        .build()
        .unwrap();
    let a = Animator::from_shape(&Shape::from_path(&path), &cfg).unwrap();
    assert_eq!(a.phasor_count(), 9);
}

#[test]
fn coefficient_shapes_use_their_own_count() {
    let cfg = small_config();
    let a = Animator::from_shape(&Shape::Synthetic { count: 4, seed: 1 }, &cfg).unwrap();
    assert_eq!(a.phasor_count(), 4);
    let a = Animator::from_shape(
        &Shape::Harmonic {
            count: 3,
            radius: 10.0,
        },
        &cfg,
    )
    .unwrap();
    assert_eq!(a.phasor_count(), 3);
}

#[test]
fn invalid_shapes_surface_their_errors() {
    let cfg = small_config();
    let bad_path = Shape::Path {
        segments: vec![Segment::Close],
    };
    assert!(matches!(
        Animator::from_shape(&bad_path, &cfg),
        Err(EpicycleError::InvalidPathState(_))
    ));
    let bad_rect = Shape::Rectangle {
        width: -1.0,
        height: 2.0,
    };
    assert!(matches!(
        Animator::from_shape(&bad_rect, &cfg),
        Err(EpicycleError::InvalidArgument(_))
    ));
}
