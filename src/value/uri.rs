//! URI values and resolvers.

use std::fmt;

use super::{CzmlValue, Plain, ValueKind};
use crate::output::CzmlOutputStream;
use crate::util::{Error, Result};

/// A URI written as a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
    /// Wrap a URI string; it must not be empty.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        if uri.is_empty() {
            return Err(Error::invalid_argument("URI is empty"));
        }
        Ok(Self(uri))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rewrite through `resolver`.
    pub fn resolve(&self, resolver: &dyn UriResolver) -> Self {
        Self(resolver.resolve_uri(&self.0))
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl CzmlValue for Uri {
    type Encoding = Plain;
    const KIND: ValueKind = ValueKind::Uri;
    const ARITY: usize = 1;
    const BARE: bool = true;

    fn key(_: Plain) -> &'static str {
        "uri"
    }

    fn write_components(&self, _: Plain, out: &mut CzmlOutputStream) -> Result<()> {
        out.write_value(self.as_str())
    }
}

/// Rewrites URIs before they are embedded in a document, e.g. to make them
/// relative or inline the resource.
pub trait UriResolver {
    fn resolve_uri(&self, uri: &str) -> String;
}

/// Resolver that leaves every URI unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassThroughUriResolver;

impl PassThroughUriResolver {
    pub const INSTANCE: Self = Self;
}

impl UriResolver for PassThroughUriResolver {
    fn resolve_uri(&self, uri: &str) -> String {
        uri.to_owned()
    }
}

impl<F> UriResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve_uri(&self, uri: &str) -> String {
        self(uri)
    }
}
