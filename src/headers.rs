//! Header containers the adapter can read from and write to.
//!
//! Frameworks hand headers around in different shapes. Two small traits cover all of them:
//!
//! - [`HeaderSource`] looks up a header by name, ignoring ASCII case.
//! - [`HeaderSink`] writes a header and, where the container has one, a status code.
//!
//! | Shape | Read | Write |
//! |---|---|---|
//! | [`HeaderMap`], request/response parts, [`http::Request`], [`http::Response`] | all values joined | replaces existing values |
//! | ordered pairs (`[(K, V)]`, `Vec<(String, String)>`) | all matching pairs joined | appends a pair |
//! | record (`BTreeMap<String, String>`, `HashMap<String, String>` with `std`) | all matching keys joined | assigns the exact key |
//!
//! Repeated headers are joined with `", "`, the way a fetch `Headers` object reports them.
//! [`HeaderMap`] values that are not visible ASCII are decoded as ISO-8859-1, byte for byte.
//!
//! # Examples
//!
//! ```rust
//! use htmx_kit::headers::{HeaderSink, HeaderSource};
//!
//! let mut pairs = vec![("Accept".to_string(), "text/html".to_string())];
//! pairs.put_header("HX-Refresh", "true".into())?;
//!
//! assert_eq!(pairs.header("hx-refresh").as_deref(), Some("true"));
//! assert_eq!(pairs.len(), 2);
//! # Ok::<(), htmx_kit::Error>(())
//! ```
use alloc::{
    borrow::Cow,
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
use http::{
    header::{HeaderName, HeaderValue},
    HeaderMap, StatusCode,
};

use crate::Result;

/// A read-only view of request or response headers.
pub trait HeaderSource {
    /// Returns the value of the header `name`, compared without regard to ASCII case.
    ///
    /// When the header appears more than once the values are joined with `", "`.
    fn header(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// A header container that directives write into.
///
/// Every sink is also a [`HeaderSource`], so whatever was written can be read back.
pub trait HeaderSink: HeaderSource {
    /// Writes a single header following the container's own semantics.
    fn put_header(&mut self, name: &str, value: String) -> Result<()>;

    /// Sets the response status, if the container carries one.
    ///
    /// Containers without a status ignore it.
    fn set_status(&mut self, status: StatusCode) {
        let _ = status;
    }
}

fn join<'a, I>(values: I) -> Option<Cow<'a, str>>
where
    I: IntoIterator,
    I::Item: Into<Cow<'a, str>>,
{
    let mut values = values.into_iter().map(|value| -> Cow<'a, str> { value.into() });
    let first = values.next()?;
    let Some(second) = values.next() else {
        return Some(first);
    };
    let mut joined = first.into_owned();
    for value in core::iter::once(second).chain(values) {
        joined.push_str(", ");
        joined.push_str(&value);
    }
    Some(Cow::Owned(joined))
}

// Bytes 0x80..=0xFF map to the code points of the same value.
fn latin1(value: &HeaderValue) -> Cow<'_, str> {
    match value.to_str() {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(value.as_bytes().iter().map(|&byte| char::from(byte)).collect()),
    }
}

impl HeaderSource for HeaderMap {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        join(self.get_all(name).iter().map(latin1))
    }
}

impl HeaderSink for HeaderMap {
    fn put_header(&mut self, name: &str, value: String) -> Result<()> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::try_from(value)?;
        self.insert(name, value);
        Ok(())
    }
}

impl HeaderSource for http::request::Parts {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers.header(name)
    }
}

impl<B> HeaderSource for http::Request<B> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers().header(name)
    }
}

impl HeaderSource for http::response::Parts {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers.header(name)
    }
}

impl HeaderSink for http::response::Parts {
    fn put_header(&mut self, name: &str, value: String) -> Result<()> {
        self.headers.put_header(name, value)
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }
}

impl<B> HeaderSource for http::Response<B> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.headers().header(name)
    }
}

impl<B> HeaderSink for http::Response<B> {
    fn put_header(&mut self, name: &str, value: String) -> Result<()> {
        self.headers_mut().put_header(name, value)
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }
}

impl<K: AsRef<str>, V: AsRef<str>> HeaderSource for [(K, V)] {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        join(
            self.iter()
                .filter(|(key, _)| key.as_ref().eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_ref()),
        )
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> HeaderSource for [(K, V); N] {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_slice().header(name)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> HeaderSource for Vec<(K, V)> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_slice().header(name)
    }
}

/// Appends a new pair; existing pairs with the same name are kept.
impl HeaderSink for Vec<(String, String)> {
    fn put_header(&mut self, name: &str, value: String) -> Result<()> {
        self.push((name.to_string(), value));
        Ok(())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> HeaderSource for BTreeMap<K, V> {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        join(
            self.iter()
                .filter(|(key, _)| key.as_ref().eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_ref()),
        )
    }
}

/// Assigns the exact key, overwriting an earlier value stored under it.
impl HeaderSink for BTreeMap<String, String> {
    fn put_header(&mut self, name: &str, value: String) -> Result<()> {
        self.insert(name.to_string(), value);
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<K, V, H> HeaderSource for std::collections::HashMap<K, V, H>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        join(
            self.iter()
                .filter(|(key, _)| key.as_ref().eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_ref()),
        )
    }
}

/// Assigns the exact key, overwriting an earlier value stored under it.
#[cfg(feature = "std")]
impl<H: core::hash::BuildHasher> HeaderSink for std::collections::HashMap<String, String, H> {
    fn put_header(&mut self, name: &str, value: String) -> Result<()> {
        self.insert(name.to_string(), value);
        Ok(())
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).header(name)
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &mut T {
    fn header(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).header(name)
    }
}

impl<T: HeaderSink + ?Sized> HeaderSink for &mut T {
    fn put_header(&mut self, name: &str, value: String) -> Result<()> {
        (**self).put_header(name, value)
    }

    fn set_status(&mut self, status: StatusCode) {
        (**self).set_status(status);
    }
}
