//! Output extension resolution

use super::Extension;
use crate::constants::VAR_EXTENSION;
use crate::error::ParamsError;
use crate::request::RequestVars;

/// Resolve the optional `extension` path variable
///
/// Absent or empty defaults to `.jpg`. Only `.jpg` and `.webp` are served,
/// compared after lowercasing.
pub fn resolve_extension<R: RequestVars + ?Sized>(request: &R) -> Result<Extension, ParamsError> {
    match request.path_var(VAR_EXTENSION) {
        Some(raw) if !raw.is_empty() => raw.parse(),
        _ => Ok(Extension::default()),
    }
}
