// Constants module - centralized default values for parameter resolution
//
// These are the limits applied when no configuration file overrides them.

// =============================================================================
// Size defaults
// =============================================================================

/// The max allowed image width/height that can be requested
pub const DEFAULT_MAX_IMAGE_SIZE: i64 = 5000;

// =============================================================================
// Blur defaults
// =============================================================================

/// Blur intensity used when `blur` is present without an integer value
pub const DEFAULT_BLUR_AMOUNT: i64 = 5;

/// Lowest accepted blur intensity
pub const MIN_BLUR_AMOUNT: i64 = 1;

/// Highest accepted blur intensity
pub const MAX_BLUR_AMOUNT: i64 = 10;

// =============================================================================
// Path variable names
// =============================================================================

pub const VAR_SIZE: &str = "size";
pub const VAR_WIDTH: &str = "width";
pub const VAR_HEIGHT: &str = "height";
pub const VAR_EXTENSION: &str = "extension";

// =============================================================================
// Query parameter names
// =============================================================================

pub const QUERY_GRAYSCALE: &str = "grayscale";
pub const QUERY_BLUR: &str = "blur";
