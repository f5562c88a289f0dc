// Host-side tests for scene configuration overrides.

use backdrop_core::*;

#[test]
fn defaults_match_page_constants() {
    let c = SceneConfig::default();
    assert_eq!(c.point_count, 80);
    assert_eq!(c.extent.to_array(), [10.0, 6.0, 6.0]);
    assert_eq!(c.link_distance, 2.5);
    assert_eq!(c.rotation_step, 0.0015);
    assert_eq!(c.seed, None);
    assert!(c.validate().is_ok());
}

#[test]
fn overrides_parse_known_keys() {
    let c = SceneConfig::default()
        .with_overrides([
            ("point-count", "40"),
            ("link-distance", " 1.75 "),
            ("seed", "42"),
            ("rotation-step", "0"),
        ])
        .unwrap();
    assert_eq!(c.point_count, 40);
    assert_eq!(c.link_distance, 1.75);
    assert_eq!(c.seed, Some(42));
    assert_eq!(c.rotation_step, 0.0);
}

#[test]
fn overrides_reject_bad_input() {
    let err = SceneConfig::default()
        .with_overrides([("colour", "red")])
        .unwrap_err();
    assert_eq!(err, ConfigError::UnknownKey("colour".into()));

    let err = SceneConfig::default()
        .with_overrides([("point-count", "many")])
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert_eq!(err.to_string(), "invalid value `many` for `point-count`");

    let err = SceneConfig::default()
        .with_overrides([("point-count", "0")])
        .unwrap_err();
    assert_eq!(err, ConfigError::NotPositive("point-count"));

    let err = SceneConfig::default()
        .with_overrides([("link-distance", "-1")])
        .unwrap_err();
    assert_eq!(err, ConfigError::NotPositive("link-distance"));

    let err = SceneConfig::default()
        .with_overrides([("rotation-step", "-0.1")])
        .unwrap_err();
    assert_eq!(err, ConfigError::Negative("rotation-step"));
}

#[test]
fn every_advertised_key_is_accepted() {
    for key in OVERRIDE_KEYS {
        let mut config = SceneConfig::default();
        assert!(config.apply_override(key, "3").is_ok(), "key `{key}` rejected");
        assert!(config.validate().is_ok(), "key `{key}` produced invalid config");
    }
}

#[test]
fn point_count_is_capped() {
    let at_cap = SceneConfig::default()
        .with_overrides([("point-count", "2000")])
        .unwrap();
    assert_eq!(at_cap.point_count, MAX_POINT_COUNT);

    let err = SceneConfig::default()
        .with_overrides([("point-count", "1000000")])
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::TooLarge {
            key: "point-count",
            max: MAX_POINT_COUNT as u64
        }
    );
}

#[test]
fn marker_segments_must_fit_u16_indices() {
    // 255 x 255 gives a 256 x 256 vertex grid, exactly the u16 index range
    let fits = SceneConfig {
        marker_segments: (255, 255),
        ..SceneConfig::default()
    };
    assert!(fits.validate().is_ok());

    let too_fine = SceneConfig {
        marker_segments: (256, 255),
        ..SceneConfig::default()
    };
    assert!(matches!(
        too_fine.validate(),
        Err(ConfigError::TooLarge {
            key: "marker-segments",
            ..
        })
    ));
}
