//! Width/height resolution from the path variables

use crate::constants::{VAR_HEIGHT, VAR_SIZE, VAR_WIDTH};
use crate::error::ParamsError;
use crate::request::RequestVars;

/// Resolve `(width, height)` from the `size` or the `width`/`height` variables
///
/// A valid `size` wins even when `width` and `height` are also present.
/// Otherwise both `width` and `height` must be present integers.
pub fn resolve_size<R: RequestVars + ?Sized>(request: &R) -> Result<(i64, i64), ParamsError> {
    if let Some(size) = int_var(request, VAR_SIZE) {
        return Ok((size, size));
    }

    let width = int_var(request, VAR_WIDTH).ok_or(ParamsError::InvalidSize)?;
    let height = int_var(request, VAR_HEIGHT).ok_or(ParamsError::InvalidSize)?;

    Ok((width, height))
}

/// Path variable parsed as a decimal integer with optional sign
fn int_var<R: RequestVars + ?Sized>(request: &R, name: &str) -> Option<i64> {
    request.path_var(name)?.parse().ok()
}
