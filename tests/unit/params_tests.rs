// Parameter resolution tests exercising the public API end to end

use resize_params::{
    Extension, ImageDimensions, ParameterResolver, Params, ParamsError, RouteMatch,
};
use rstest::rstest;

fn resolve(route: &RouteMatch) -> Result<Params, ParamsError> {
    ParameterResolver::default().resolve(route)
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(200)]
#[case(5000)]
#[case(12000)]
#[case(-3)]
fn test_size_sets_width_and_height(#[case] size: i64) {
    let route = RouteMatch::new().with_path_var("size", size.to_string());
    let params = resolve(&route).unwrap();
    assert_eq!(params.width, size);
    assert_eq!(params.height, size);
}

#[rstest]
#[case::nothing(RouteMatch::new())]
#[case::width_only(RouteMatch::new().with_path_var("width", "100"))]
#[case::height_only(RouteMatch::new().with_path_var("height", "100"))]
#[case::non_integer_size(RouteMatch::new().with_path_var("size", "big"))]
#[case::float_width(
    RouteMatch::new()
        .with_path_var("width", "10.5")
        .with_path_var("height", "100")
)]
fn test_missing_or_invalid_size(#[case] route: RouteMatch) {
    assert_eq!(resolve(&route), Err(ParamsError::InvalidSize));
}

#[rstest]
#[case(None, Ok(Extension::Jpg))]
#[case(Some(".jpg"), Ok(Extension::Jpg))]
#[case(Some(".JPG"), Ok(Extension::Jpg))]
#[case(Some(".webp"), Ok(Extension::Webp))]
#[case(Some(".WEBP"), Ok(Extension::Webp))]
#[case(Some(".png"), Err(ParamsError::InvalidFileExtension))]
#[case(Some("jpg"), Err(ParamsError::InvalidFileExtension))]
fn test_extension_resolution(
    #[case] extension: Option<&str>,
    #[case] expected: Result<Extension, ParamsError>,
) {
    let mut route = RouteMatch::new().with_path_var("size", "100");
    if let Some(ext) = extension {
        route = route.with_path_var("extension", ext);
    }
    assert_eq!(resolve(&route).map(|p| p.extension), expected);
}

#[rstest]
#[case("", false, 0)]
#[case("blur", true, 5)]
#[case("blur=", true, 5)]
#[case("blur=3", true, 3)]
#[case("blur=abc", true, 5)]
#[case("blur=0", true, 0)]
#[case("grayscale&blur=10", true, 10)]
#[case("blur=%zz", false, 0)]
#[case("blur=%37", true, 7)]
fn test_blur_flag(#[case] query: &str, #[case] blur: bool, #[case] amount: i64) {
    let route = RouteMatch::new()
        .with_path_var("size", "100")
        .with_query_string(query);
    let params = resolve(&route).unwrap();
    assert_eq!(params.blur, blur);
    assert_eq!(params.blur_amount, amount);
}

#[test]
fn test_grayscale_value_is_ignored() {
    for query in ["grayscale", "grayscale=", "grayscale=0", "grayscale=no"] {
        let route = RouteMatch::new()
            .with_path_var("size", "100")
            .with_query_string(query);
        assert!(resolve(&route).unwrap().grayscale, "query: {}", query);
    }
}

#[rstest]
#[case(0, Err(ParamsError::InvalidBlurAmount))]
#[case(1, Ok(()))]
#[case(5, Ok(()))]
#[case(10, Ok(()))]
#[case(11, Err(ParamsError::InvalidBlurAmount))]
fn test_blur_amount_validation(#[case] amount: i64, #[case] expected: Result<(), ParamsError>) {
    let params = Params {
        width: 100,
        height: 100,
        blur: true,
        blur_amount: amount,
        ..Default::default()
    };
    assert_eq!(params.validate(&ImageDimensions::new(800, 600)), expected);
}

#[rstest]
#[case(6000, 6000, Ok(()))]
#[case(6000, 3000, Err(ParamsError::InvalidSize))]
#[case(5000, 3000, Ok(()))]
#[case(5001, 3000, Err(ParamsError::InvalidSize))]
fn test_width_ceiling_and_natural_size_exception(
    #[case] width: i64,
    #[case] natural_width: i64,
    #[case] expected: Result<(), ParamsError>,
) {
    let params = Params {
        width,
        height: 100,
        ..Default::default()
    };
    assert_eq!(
        params.validate(&ImageDimensions::new(natural_width, 100)),
        expected
    );
}

#[test]
fn test_dimension_resolution() {
    let image = ImageDimensions::new(800, 600);
    let resolver = ParameterResolver::default();

    let zero = Params {
        width: 0,
        height: 0,
        ..Default::default()
    };
    assert_eq!(resolver.dimensions(&zero, &image), (800, 600));

    let explicit = Params {
        width: 200,
        height: 0,
        ..Default::default()
    };
    assert_eq!(resolver.dimensions(&explicit, &image), (200, 600));
}

#[test]
fn test_resolution_is_idempotent() {
    let route = RouteMatch::new()
        .with_path_var("width", "640")
        .with_path_var("height", "480")
        .with_path_var("extension", ".WebP")
        .with_query_string("grayscale&blur=2");
    let resolver = ParameterResolver::default();

    assert_eq!(resolver.resolve(&route), resolver.resolve(&route));
}

#[test]
fn test_native_size_request_above_ceiling() {
    let route = RouteMatch::new()
        .with_path_var("width", "8000")
        .with_path_var("height", "6000");
    let image = ImageDimensions::new(8000, 6000);

    let resolved = ParameterResolver::default()
        .resolve_for(&route, &image)
        .unwrap();
    assert_eq!((resolved.width, resolved.height), (8000, 6000));
}

#[test]
fn test_resolver_shared_across_threads() {
    let resolver = std::sync::Arc::new(ParameterResolver::default());
    let handles: Vec<_> = (1..=8)
        .map(|i| {
            let resolver = resolver.clone();
            std::thread::spawn(move || {
                let route = RouteMatch::new().with_path_var("size", (i * 100).to_string());
                resolver.resolve(&route).map(|p| p.width)
            })
        })
        .collect();

    for (i, handle) in (1..=8).zip(handles) {
        assert_eq!(handle.join().unwrap(), Ok(i * 100));
    }
}
