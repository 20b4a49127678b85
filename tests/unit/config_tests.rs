// Configuration loading tests

use resize_params::{
    ConfigError, ImageDimensions, ParameterResolver, ParamsConfig, ParamsError, RouteMatch,
};
use std::io::Write;

#[test]
fn test_can_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "max_image_size: 2000").unwrap();
    writeln!(file, "max_blur_amount: 8").unwrap();

    let config = ParamsConfig::from_file(file.path()).expect("Failed to load config");
    assert_eq!(config.max_image_size, 2000);
    assert_eq!(config.min_blur_amount, 1);
    assert_eq!(config.max_blur_amount, 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ParamsConfig::from_file(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_unknown_field_types_are_rejected() {
    let result = ParamsConfig::from_yaml_with_env("max_blur_amount: high\n");
    assert!(matches!(result, Err(ConfigError::Yaml(_))));
}

#[test]
fn test_configured_limits_drive_resolution() {
    let config = ParamsConfig::from_yaml_with_env(
        r#"
max_image_size: 1000
min_blur_amount: 2
max_blur_amount: 6
"#,
    )
    .unwrap();

    let resolver = ParameterResolver::new(config).expect("Limits should be accepted");
    let image = ImageDimensions::new(3000, 2000);

    let too_wide = RouteMatch::new()
        .with_path_var("width", "1500")
        .with_path_var("height", "100");
    assert_eq!(
        resolver.resolve_for(&too_wide, &image),
        Err(ParamsError::InvalidSize)
    );

    let default_blur = RouteMatch::new()
        .with_path_var("size", "100")
        .with_query_string("blur");
    let resolved = resolver.resolve_for(&default_blur, &image).unwrap();
    assert_eq!(resolved.params.blur_amount, 5);

    let heavy_blur = RouteMatch::new()
        .with_path_var("size", "100")
        .with_query_string("blur=7");
    assert_eq!(
        resolver.resolve_for(&heavy_blur, &image),
        Err(ParamsError::InvalidBlurAmount)
    );
}

#[test]
fn test_config_cannot_loosen_fixed_limits() {
    let config =
        ParamsConfig::from_yaml_with_env("max_blur_amount: 50\nmax_image_size: 100000\n").unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    assert!(ParameterResolver::new(config.clone()).is_err());

    // Even if the config is used directly, validation keeps the fixed bounds
    let route = RouteMatch::new()
        .with_path_var("size", "90000")
        .with_query_string("blur=42");
    let image = ImageDimensions::new(800, 600);
    let params = ParameterResolver::default().resolve(&route).unwrap();
    assert_eq!(
        params.validate_with(&image, &config),
        Err(ParamsError::InvalidSize)
    );

    let blurred = RouteMatch::new()
        .with_path_var("size", "100")
        .with_query_string("blur=42");
    let params = ParameterResolver::default().resolve(&blurred).unwrap();
    assert_eq!(
        params.validate_with(&image, &config),
        Err(ParamsError::InvalidBlurAmount)
    );
}
