use super::*;

#[test]
fn test_default_config() {
    let config = GridConfig::default();
    assert_eq!(config.max_cols, 6);
    assert_eq!(config.min_cols, 1);
    assert_eq!(config.gutter_width, 20.0);
    assert_eq!(config.gutter_height, 20.0);
}

#[test]
fn test_from_options_only_overrides_set_keys() {
    let options = GridOptions::new("card").max_cols(4);
    let config = GridConfig::from_options(&options).expect("valid options");

    assert_eq!(config.element_selector, "card");
    assert_eq!(config.max_cols, 4);
    assert_eq!(config.min_cols, 1);
    assert_eq!(config.gutter_width, 20.0);
    assert_eq!(config.gutter_height, 20.0);
}

#[test]
fn test_from_settings_json() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        grid: GridOptions,
    }

    let data = r#"{
      "grid": {
        "gridElementClass": "masonry-item",
        "gutterHeight": 0
      }
    }"#;

    let parsed: Wrapper = serde_json::from_str(data).expect("parse settings");
    let config = GridConfig::from_options(&parsed.grid).expect("valid options");
    assert_eq!(config.element_selector, "masonry-item");
    assert_eq!(config.gutter_height, 0.0);
    assert_eq!(config.gutter_width, 20.0);
}

#[test]
fn test_missing_selector_is_rejected() {
    let err = GridConfig::from_options(&GridOptions::default()).unwrap_err();
    assert_eq!(err, ConfigError::MissingSelector);

    let err = GridConfig::from_options(&GridOptions::new("  ")).unwrap_err();
    assert_eq!(err, ConfigError::MissingSelector);
}

#[test]
fn test_column_range_is_validated() {
    let err = GridConfig::from_options(&GridOptions::new("card").min_cols(0)).unwrap_err();
    assert!(matches!(err, ConfigError::ColumnRange { min_cols: 0, .. }));

    let err = GridConfig::from_options(&GridOptions::new("card").min_cols(4).max_cols(3))
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::ColumnRange {
            min_cols: 4,
            max_cols: 3
        }
    );

    let config = GridConfig::from_options(&GridOptions::new("card").min_cols(3).max_cols(3))
        .expect("equal bounds are allowed");
    assert_eq!(config.min_cols, config.max_cols);
}

#[test]
fn test_negative_or_nan_gutters_are_rejected() {
    let err = GridConfig::from_options(&GridOptions::new("card").gutter_width(-1.0)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidGutter {
            name: "gutterWidth",
            ..
        }
    ));

    let err =
        GridConfig::from_options(&GridOptions::new("card").gutter_height(f64::NAN)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidGutter {
            name: "gutterHeight",
            ..
        }
    ));
}

#[test]
fn test_breakpoint_defaults() {
    let bp = Breakpoints::default();
    let values: Vec<f64> = BreakpointTier::DESCENDING
        .iter()
        .map(|tier| bp.threshold(*tier))
        .collect();
    assert_eq!(values, vec![1200.0, 1000.0, 768.0, 600.0, 450.0]);
}

#[test]
fn test_breakpoints_merge_per_tier() {
    let overrides = BreakpointOverrides {
        large: Some(900.0),
        ..BreakpointOverrides::default()
    };
    let bp = Breakpoints::merged(&overrides);
    assert_eq!(bp.large, 900.0);
    assert_eq!(bp.xtra_large, 1200.0);
    assert_eq!(bp.medium, 768.0);
    assert_eq!(bp.small, 600.0);
    assert_eq!(bp.xtra_small, 450.0);
}

#[test]
fn test_tier_names_match_option_keys() {
    let names: Vec<&str> = BreakpointTier::DESCENDING
        .iter()
        .map(|tier| tier.name())
        .collect();
    assert_eq!(
        names,
        vec!["xtraLarge", "large", "medium", "small", "xtraSmall"]
    );
}
