//! Grayscale and blur query flags

use crate::constants::{DEFAULT_BLUR_AMOUNT, QUERY_BLUR, QUERY_GRAYSCALE};
use crate::request::RequestVars;

/// Flags read from the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryFlags {
    pub grayscale: bool,
    pub blur: bool,
    /// `0` when blur was not requested
    pub blur_amount: i64,
}

/// Read the `grayscale` and `blur` flags
///
/// Presence alone turns a flag on. An integer `blur` value overrides the
/// default intensity of 5; anything else keeps it. Range checks happen later,
/// in validation.
pub fn resolve_query_flags<R: RequestVars + ?Sized>(request: &R) -> QueryFlags {
    let grayscale = request.query_var(QUERY_GRAYSCALE).is_some();

    let (blur, blur_amount) = match request.query_var(QUERY_BLUR) {
        Some(value) => (true, value.parse().unwrap_or(DEFAULT_BLUR_AMOUNT)),
        None => (false, 0),
    };

    QueryFlags {
        grayscale,
        blur,
        blur_amount,
    }
}
