//! Read-only views of the collaborators parameter resolution depends on
//!
//! The routing layer owns the request and the storage layer owns image
//! metadata. Resolution only needs named lookups and natural dimensions, so
//! both are expressed as traits with small adapters for common shapes.

use std::borrow::Cow;
use std::collections::HashMap;

/// Named variables extracted from a request by the routing layer
pub trait RequestVars {
    /// Path variable by name, `None` when the route did not capture it
    fn path_var(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Query parameter by name
    ///
    /// A presence-only parameter (`?grayscale`) yields `Some("")`. When a
    /// parameter repeats, the first value is returned.
    fn query_var(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T: RequestVars + ?Sized> RequestVars for &T {
    fn path_var(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).path_var(name)
    }

    fn query_var(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).query_var(name)
    }
}

/// Natural pixel dimensions of a source image
pub trait ImageMetadata {
    fn width(&self) -> i64;
    fn height(&self) -> i64;
}

impl<T: ImageMetadata + ?Sized> ImageMetadata for &T {
    fn width(&self) -> i64 {
        (**self).width()
    }

    fn height(&self) -> i64 {
        (**self).height()
    }
}

/// Plain image metadata record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: i64,
    pub height: i64,
}

impl ImageDimensions {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl ImageMetadata for ImageDimensions {
    fn width(&self) -> i64 {
        self.width
    }

    fn height(&self) -> i64 {
        self.height
    }
}

/// Owned result of a route match: captured path variables plus query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMatch {
    path_vars: HashMap<String, String>,
    query_vars: HashMap<String, String>,
}

impl RouteMatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_vars.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter; an existing value for the same name is kept
    pub fn with_query_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_vars.entry(name.into()).or_insert_with(|| value.into());
        self
    }

    /// Add every parameter of a raw query string such as `blur=3&grayscale`
    pub fn with_query_string(mut self, raw: &str) -> Self {
        for (name, value) in parse_query_string(raw) {
            self.query_vars.entry(name).or_insert(value);
        }
        self
    }
}

impl RequestVars for RouteMatch {
    fn path_var(&self, name: &str) -> Option<Cow<'_, str>> {
        self.path_vars.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }

    fn query_var(&self, name: &str) -> Option<Cow<'_, str>> {
        self.query_vars.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

/// An `http::Request` paired with the path variables its route captured
#[derive(Debug)]
pub struct RoutedRequest<'a, B> {
    request: &'a http::Request<B>,
    path_vars: &'a HashMap<String, String>,
}

impl<'a, B> RoutedRequest<'a, B> {
    pub fn new(request: &'a http::Request<B>, path_vars: &'a HashMap<String, String>) -> Self {
        Self { request, path_vars }
    }
}

impl<B> RequestVars for RoutedRequest<'_, B> {
    fn path_var(&self, name: &str) -> Option<Cow<'_, str>> {
        self.path_vars.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }

    fn query_var(&self, name: &str) -> Option<Cow<'_, str>> {
        let query = self.request.uri().query()?;
        parse_query_string(query)
            .into_iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| Cow::Owned(value))
    }
}

/// Split a query string into decoded `(name, value)` pairs in order
///
/// Pairs without `=` get an empty value. `+` is treated as a space. A pair
/// whose name or value holds a malformed percent-escape is dropped, as if it
/// were never sent.
pub fn parse_query_string(raw: &str) -> Vec<(String, String)> {
    raw.strip_prefix('?')
        .unwrap_or(raw)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode_component(name)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(raw: &str) -> Option<String> {
    if !has_valid_escapes(raw) {
        return None;
    }
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

/// Every `%` must be followed by two hex digits
fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
