#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! A permissive URI parser, normalizer and reference resolver.
//!
//! Unlike a strict [RFC 3986] parser, this crate accepts every string. It is
//! meant for untrusted, often malformed input: backslashes in place of
//! slashes, missing or doubled slashes after the scheme, control characters
//! and unbracketed IPv6 hosts all parse into components the same way
//! browsers and popular URI libraries read them.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! # Overview
//!
//! - [`parse`] turns a string into [`UriData`], a plain record of optional
//!   components, and [`UriData`]'s `Display` turns it back.
//! - [`normalize()`] canonicalizes the components. See [`Normalizer`].
//! - [`absolute_to`] resolves a reference against a base, and
//!   [`relative_to`] computes the reference reaching one URI from another.
//! - The [`suffix`] module splits host names into subdomain, registrable
//!   domain and effective TLD.
//! - The `set_*` functions return components with one part replaced.
//! - [`Uri`] wraps all of the above into a fluent interface.
//!
//! # Examples
//!
//! ```
//! use lenient_uri::{normalize, parse};
//!
//! let data = parse("https:/\\/\\/\\attacker.com");
//! assert_eq!(data.hostname(), "attacker.com");
//! assert_eq!(data.to_string(), "https://attacker.com/");
//!
//! let data = parse("ja\r\nva\tscript:alert(1)");
//! assert!(data.is_urn());
//! assert_eq!(data.scheme(), "javascript");
//!
//! let data = normalize(&parse("http://www.example.org:80/a/../b"))?;
//! assert_eq!(data.to_string(), "http://www.example.org/b");
//! # Ok::<_, lenient_uri::ParseError>(())
//! ```
//!
//! # Feature flags
//!
//! All features are disabled by default.
//!
//! - `serde`: Enables [`serde`] support for [`Uri`] and [`UriData`], which
//!   serialize as their string form.
//!
//! [`serde`]: https://docs.rs/serde
//! [`Normalizer`]: normalize::Normalizer

mod access;
pub mod component;
mod error;
mod fmt;
pub mod ip;
pub mod normalize;
mod parse;
pub mod pct_enc;
mod query;
mod resolve;
pub mod suffix;
mod uri;

pub use access::{
    add_query, set_authority, set_filename, set_host, set_pathname, set_query, set_subdomain,
    set_user_info, ToUriData,
};
pub use component::UriData;
pub use error::{ArgumentError, ArgumentErrorKind, ParseError, ParseErrorKind};
pub use normalize::normalize;
pub use parse::parse;
pub use query::{parse_query_string, Iter as QueryIter, QueryMap};
pub use resolve::{absolute_to, join_paths, relative_to, remove_dot_segments};
pub use uri::Uri;
