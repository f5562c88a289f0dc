// Host-side tests for the image tilt state machine.

use backdrop_core::*;

const RECT: Rect = Rect {
    left: 100.0,
    top: 50.0,
    width: 200.0,
    height: 100.0,
};

#[test]
fn centre_is_flat_but_scaled() {
    let mut tilt = Tilt::default();
    let t = tilt.on_pointer_move(RECT, 200.0, 100.0);
    assert_eq!(t.rotate_x_deg, 0.0);
    assert_eq!(t.rotate_y_deg, 0.0);
    assert_eq!(t.scale, 1.05);
    assert_eq!(t.to_css(), "rotateX(0deg) rotateY(0deg) scale(1.05)");
}

#[test]
fn corners_reach_max_angle_with_inverted_x() {
    let mut tilt = Tilt::default();
    // bottom-right corner
    let t = tilt.on_pointer_move(RECT, 300.0, 150.0);
    assert_eq!(t.rotate_x_deg, -8.0);
    assert_eq!(t.rotate_y_deg, 8.0);
    // top-left corner
    let t = tilt.on_pointer_move(RECT, 100.0, 50.0);
    assert_eq!(t.rotate_x_deg, 8.0);
    assert_eq!(t.rotate_y_deg, -8.0);
    assert_eq!(t.to_css(), "rotateX(8deg) rotateY(-8deg) scale(1.05)");
    assert!(matches!(tilt.state(), TiltState::Tilted(_)));
}

#[test]
fn angle_is_proportional_to_offset() {
    let mut tilt = Tilt::default();
    // quarter of the way right of centre, quarter above centre
    let t = tilt.on_pointer_move(RECT, 250.0, 75.0);
    assert!((t.rotate_y_deg - 4.0).abs() < 1e-5);
    assert!((t.rotate_x_deg - 4.0).abs() < 1e-5);
}

#[test]
fn leave_resets_regardless_of_prior_state() {
    let mut tilt = Tilt::default();
    assert_eq!(tilt.on_pointer_leave(), TiltTransform::NEUTRAL);
    tilt.on_pointer_move(RECT, 123.0, 140.0);
    let t = tilt.on_pointer_leave();
    assert!(t.is_neutral());
    assert_eq!(t.to_css(), "rotateX(0deg) rotateY(0deg) scale(1)");
    assert_eq!(tilt.state(), TiltState::Neutral);
    assert_eq!(tilt.transform(), TiltTransform::NEUTRAL);
}

#[test]
fn zero_sized_rect_stays_neutral() {
    let mut tilt = Tilt::default();
    let empty = Rect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };
    assert!(tilt.on_pointer_move(empty, 10.0, 10.0).is_neutral());
}
