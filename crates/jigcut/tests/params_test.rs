use jigcut::{CutParams, Error, Strategy};

#[test]
fn defaults_match_the_documented_values() {
    let p = CutParams::default();
    assert_eq!(p.knob_depth, 0.20);
    assert_eq!(p.flat_ratio, 0.30);
    assert_eq!(p.curve_swell, 0.05);
    assert_eq!(p.organic_jitter, 0.015);
    assert_eq!(p.knob_width, 1.0);
    assert!(p.snap_to_pixels);
    assert!(p.validate().is_ok());
}

#[test]
fn json_uses_camel_case_and_fills_missing_keys() {
    let p = CutParams::from_json_str(r#"{ "knobDepth": 0.3, "knobWidth": 1.5, "snapToPixels": false }"#)
        .unwrap();
    assert_eq!(p.knob_depth, 0.3);
    assert_eq!(p.knob_width, 1.5);
    assert!(!p.snap_to_pixels);
    assert_eq!(p.flat_ratio, CutParams::default().flat_ratio);

    let p = CutParams::from_value(serde_json::json!({ "curveSwell": 0.2 })).unwrap();
    assert_eq!(p.curve_swell, 0.2);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = CutParams::from_json_str(r#"{ "knobDepth": "deep" }"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "{err:?}");
    assert!(CutParams::from_json_str("not json").is_err());
}

#[test]
fn validate_names_the_offending_field() {
    let p = CutParams {
        flat_ratio: 0.45,
        ..CutParams::default()
    };
    match p.validate() {
        Err(Error::InvalidParam { name, value, min, max }) => {
            assert_eq!(name, "flatRatio");
            assert_eq!(value, 0.45);
            assert_eq!((min, max), (0.1, 0.4));
        }
        other => panic!("unexpected {other:?}"),
    }

    let p = CutParams {
        organic_jitter: f64::NAN,
        ..CutParams::default()
    };
    assert!(p.validate().is_err());
}

#[test]
fn clamped_pulls_values_into_range() {
    let p = CutParams {
        knob_depth: 0.01,
        flat_ratio: 0.9,
        curve_swell: -0.2,
        organic_jitter: f64::INFINITY,
        knob_width: 3.0,
        snap_to_pixels: false,
    }
    .clamped();
    assert_eq!(p.knob_depth, 0.05);
    assert_eq!(p.flat_ratio, 0.4);
    assert_eq!(p.curve_swell, 0.0);
    assert_eq!(p.organic_jitter, 0.015);
    assert_eq!(p.knob_width, 2.0);
    assert!(!p.snap_to_pixels);
}

#[test]
fn presets_are_valid_and_distinct() {
    for strategy in Strategy::ALL {
        assert!(CutParams::preset(strategy).validate().is_ok(), "{strategy}");
    }
    assert_eq!(CutParams::preset(Strategy::Standart), CutParams::default());
    assert_eq!(CutParams::preset(Strategy::Educa), CutParams::default());

    let laser = CutParams::preset(Strategy::Laser);
    assert_eq!(laser.knob_depth, 0.18);
    assert_eq!(laser.organic_jitter, 0.0);

    let victorian = CutParams::preset(Strategy::Victorian);
    assert_eq!(
        (victorian.knob_depth, victorian.flat_ratio, victorian.knob_width),
        (0.30, 0.12, 1.5)
    );
}
