//! Escaping policy for URI and IRI components.
//!
//! This crate decides, character by character, how a component of a URI is
//! written out: percent-encoded, decoded, kept as is, or substituted. The rules
//! follow [RFC 3986](https://tools.ietf.org/html/rfc3986), with the
//! [RFC 2396](https://tools.ietf.org/html/rfc2396) legacy behavior by default
//! and [RFC 3987](https://tools.ietf.org/html/rfc3987) IRI rules when enabled
//! through [`Config`].
//!
//! Parsing a URI into its components is left to the caller: a [`Formatter`]
//! works on one component at a time and only needs the scheme name, whether the
//! URI is absolute, and which component the input belongs to.
//!
//! # Basic usage
//!
//! ```
//! use pct_format::{Component, Config, Formatter, UriFormat, UriKind};
//!
//! let formatter = Formatter::new(Config::legacy());
//!
//! // Escape what cannot appear literally.
//! let path = formatter.format("a b", "http", UriKind::Absolute, Component::Path, UriFormat::UriEscaped);
//! assert_eq!(path, "a%20b");
//!
//! // Decode everything.
//! let path = formatter.format("%2Fetc", "file", UriKind::Absolute, Component::Path, UriFormat::Unescaped);
//! assert_eq!(path, "/etc");
//!
//! // A `?` in the path of a scheme without query is escaped.
//! let path = formatter.format("a?b", "ftp", UriKind::Absolute, Component::Path, UriFormat::UriEscaped);
//! assert_eq!(path, "a%3Fb");
//! ```
//!
//! Single characters can be examined with a [`Policy`].
//!
//! ```
//! use pct_format::{Action, Component, Config, Policy, SchemeKind, UriFormat, UriKind};
//!
//! let policy = Policy::new(
//! 	SchemeKind::classify("net.tcp"),
//! 	UriKind::Absolute,
//! 	Component::Path,
//! 	UriFormat::UriEscaped,
//! 	Config::legacy(),
//! );
//!
//! assert_eq!(policy.decide('\\', false), Action::Substitute('/'));
//! ```

mod config;
mod error;
pub mod format;
pub mod hex;
mod policy;
mod scheme;

pub use config::{Config, IRI_PARSING_VAR};
pub use error::{EncodingError, ParseError, Result};
pub use format::{format, format_for_display, Formatter};
pub use policy::{Action, Component, Policy, UriFormat, UriKind};
pub use scheme::{SchemeKind, SchemeSet};
