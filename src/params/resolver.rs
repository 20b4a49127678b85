//! Composition of the size, extension, and query resolvers

use serde::Serialize;

use super::extension::resolve_extension;
use super::query::resolve_query_flags;
use super::size::resolve_size;
use super::Params;
use crate::config::ParamsConfig;
use crate::error::{ConfigError, ParamsError};
use crate::request::{ImageMetadata, RequestVars};

/// Validated parameters plus the final output dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    pub params: Params,
    pub width: i64,
    pub height: i64,
}

/// Resolves and validates request parameters against a set of limits
///
/// Holds no per-request state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ParameterResolver {
    config: ParamsConfig,
}

impl ParameterResolver {
    /// Build a resolver, rejecting limits looser than the built-in ones
    pub fn new(config: ParamsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParamsConfig {
        &self.config
    }

    /// Parse all the path and query parameters
    ///
    /// Size is resolved first, then the extension; the first error wins.
    pub fn resolve<R: RequestVars + ?Sized>(&self, request: &R) -> Result<Params, ParamsError> {
        let (width, height) = resolve_size(request)?;
        let extension = resolve_extension(request)?;
        let flags = resolve_query_flags(request);

        let params = Params {
            width,
            height,
            blur: flags.blur,
            blur_amount: flags.blur_amount,
            grayscale: flags.grayscale,
            extension,
        };

        tracing::debug!(
            width = params.width,
            height = params.height,
            blur = params.blur,
            blur_amount = params.blur_amount,
            grayscale = params.grayscale,
            extension = %params.extension,
            "Resolved image request parameters"
        );

        Ok(params)
    }

    pub fn validate<M: ImageMetadata + ?Sized>(
        &self,
        params: &Params,
        image: &M,
    ) -> Result<(), ParamsError> {
        params.validate_with(image, &self.config)
    }

    pub fn dimensions<M: ImageMetadata + ?Sized>(&self, params: &Params, image: &M) -> (i64, i64) {
        let (width, height) = params.dimensions(image);
        tracing::debug!(
            requested_width = params.width,
            requested_height = params.height,
            width,
            height,
            "Computed output dimensions"
        );
        (width, height)
    }

    /// Resolve, validate against `image`, and compute the output dimensions
    pub fn resolve_for<R, M>(&self, request: &R, image: &M) -> Result<ResolvedImage, ParamsError>
    where
        R: RequestVars + ?Sized,
        M: ImageMetadata + ?Sized,
    {
        let params = self.resolve(request)?;
        self.validate(&params, image)?;
        let (width, height) = self.dimensions(&params, image);

        Ok(ResolvedImage {
            params,
            width,
            height,
        })
    }
}
