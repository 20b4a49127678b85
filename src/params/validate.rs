//! Limit checks and final output dimensions

use super::Params;
use crate::config::ParamsConfig;
use crate::constants::{DEFAULT_MAX_IMAGE_SIZE, MAX_BLUR_AMOUNT, MIN_BLUR_AMOUNT};
use crate::error::ParamsError;
use crate::request::ImageMetadata;

impl Params {
    /// Check the size and blur amount against the default limits
    pub fn validate<M: ImageMetadata + ?Sized>(&self, image: &M) -> Result<(), ParamsError> {
        self.validate_with(image, &ParamsConfig::default())
    }

    /// Check the size and blur amount against `limits`
    ///
    /// A dimension above the ceiling is still accepted when it equals the
    /// image's natural dimension, so native-size requests always pass.
    /// Limits looser than the built-in ones are clamped to them.
    pub fn validate_with<M: ImageMetadata + ?Sized>(
        &self,
        image: &M,
        limits: &ParamsConfig,
    ) -> Result<(), ParamsError> {
        let max_size = limits.max_image_size.min(DEFAULT_MAX_IMAGE_SIZE);
        let min_blur = limits.min_blur_amount.max(MIN_BLUR_AMOUNT);
        let max_blur = limits.max_blur_amount.min(MAX_BLUR_AMOUNT);

        if self.width > max_size && self.width != image.width() {
            return Err(ParamsError::InvalidSize);
        }

        if self.height > max_size && self.height != image.height() {
            return Err(ParamsError::InvalidSize);
        }

        if self.blur && self.blur_amount < min_blur {
            return Err(ParamsError::InvalidBlurAmount);
        }

        if self.blur && self.blur_amount > max_blur {
            return Err(ParamsError::InvalidBlurAmount);
        }

        Ok(())
    }

    /// Output dimensions, with `0` replaced by the natural dimension
    ///
    /// Does not re-validate.
    pub fn dimensions<M: ImageMetadata + ?Sized>(&self, image: &M) -> (i64, i64) {
        let width = if self.width == 0 {
            image.width()
        } else {
            self.width
        };

        let height = if self.height == 0 {
            image.height()
        } else {
            self.height
        };

        (width, height)
    }
}
