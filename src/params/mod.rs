//! Image request parameter resolution
//!
//! Turns the raw path and query variables of a resize request into a
//! [`Params`] value, then checks it against the source image:
//!
//! ```text
//! /id/{id}/{size}{extension}?grayscale&blur=3
//! /id/{id}/{width}/{height}{extension}?blur
//! ```
//!
//! - [`size`] resolves width/height from `size` or `width` + `height`
//! - [`extension`] normalizes the optional output extension
//! - [`query`] reads the `grayscale` and `blur` flags
//! - [`validate`] enforces limits and computes final output dimensions
//!
//! [`ParameterResolver`] composes all of them.

pub mod extension;
pub mod query;
pub mod resolver;
pub mod size;
pub mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ParamsError;

pub use resolver::{ParameterResolver, ResolvedImage};

/// Output format requested through the path extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extension {
    #[default]
    Jpg,
    Webp,
}

impl Extension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpg => ".jpg",
            Self::Webp => ".webp",
        }
    }
}

impl FromStr for Extension {
    type Err = ParamsError;

    /// Case-insensitive exact match; a missing leading dot is not corrected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            ".jpg" => Ok(Extension::Jpg),
            ".webp" => Ok(Extension::Webp),
            _ => Err(ParamsError::InvalidFileExtension),
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Extension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// All the parameters for a request
///
/// A width or height of `0` means "unspecified": the natural dimension of the
/// source image is used instead (see [`Params::dimensions`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Params {
    pub width: i64,
    pub height: i64,
    pub blur: bool,
    /// Only meaningful when `blur` is set; `0` otherwise
    pub blur_amount: i64,
    pub grayscale: bool,
    pub extension: Extension,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            blur: false,
            blur_amount: 0,
            grayscale: false,
            extension: Extension::Jpg,
        }
    }
}
