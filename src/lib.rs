// Resize request parameter resolution library

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod params;
pub mod request;

pub use config::ParamsConfig;
pub use error::{ConfigError, ParamsError};
pub use params::{Extension, ParameterResolver, Params, ResolvedImage};
pub use request::{ImageDimensions, ImageMetadata, RequestVars, RouteMatch, RoutedRequest};
