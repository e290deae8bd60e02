//! String-level formatting.

use crate::{
	error::Result,
	hex,
	policy::{Component, Policy, UriFormat, UriKind},
	scheme::SchemeKind,
	Config,
};
use tracing::trace_span;

/// URI component formatter.
///
/// Formats one component at a time, character by character, following the
/// [`Policy`] built for each request.
///
/// # Example
///
/// ```
/// use pct_format::{Component, Config, Formatter, UriFormat, UriKind};
///
/// let formatter = Formatter::new(Config::legacy());
/// let path = formatter.format("a b", "http", UriKind::Absolute, Component::Path, UriFormat::UriEscaped);
/// assert_eq!(path, "a%20b");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
	config: Config,
}

impl Formatter {
	pub fn new(config: Config) -> Self {
		Self { config }
	}

	/// Configuration every request of this formatter runs with.
	///
	/// ```
	/// use pct_format::{Config, Formatter};
	///
	/// assert!(Formatter::new(Config::iri()).config().iri_parsing);
	/// assert_eq!(Formatter::default().config(), Config::legacy());
	/// ```
	pub fn config(&self) -> Config {
		self.config
	}

	/// Formats `input` according to `format`.
	///
	/// Percent-encoded triplets are decoded and the resulting character is
	/// formatted as an escaped one. Literal characters are formatted as is.
	pub fn format(
		&self,
		input: &str,
		scheme: &str,
		kind: UriKind,
		component: Component,
		format: UriFormat,
	) -> String {
		if input.is_empty() {
			return String::new();
		}

		let policy = Policy::new(
			SchemeKind::classify(scheme),
			kind,
			component,
			format,
			self.config,
		);

		let _span = trace_span!(
			"format",
			scheme = %policy.scheme(),
			?kind,
			?component,
			?format,
			len = input.len()
		)
		.entered();
		apply(input, &policy)
	}

	/// Formats `input` after checking that it is properly percent-encoded.
	pub fn format_checked(
		&self,
		input: &str,
		scheme: &str,
		kind: UriKind,
		component: Component,
		format: UriFormat,
	) -> Result<String> {
		hex::validate(input)?;
		Ok(self.format(input, scheme, kind, component, format))
	}

	/// Formats `input` for display.
	///
	/// This is what rendering a whole URI back to a string uses. It differs
	/// from [`UriFormat::SafeUnescaped`] in legacy mode, where it also decodes
	/// the RFC 2396 reserved characters `$&+,;=@` and control characters of
	/// absolute URIs.
	pub fn format_for_display(
		&self,
		input: &str,
		scheme: &str,
		kind: UriKind,
		component: Component,
	) -> String {
		if input.is_empty() {
			return String::new();
		}

		let policy = Policy::for_display(SchemeKind::classify(scheme), kind, component, self.config);

		let _span = trace_span!(
			"format_for_display",
			scheme = %policy.scheme(),
			?kind,
			?component,
			len = input.len()
		)
		.entered();
		apply(input, &policy)
	}
}

fn apply(input: &str, policy: &Policy) -> String {
	let mut formatted = String::with_capacity(input.len());
	let mut index = 0;
	while let Some(c) = input[index..].chars().next() {
		if c == '%' {
			let decoded = hex::decode_at(input, index);
			policy.format_char_into(decoded.ch, true, &mut formatted);
			index = decoded.end;
		} else {
			policy.format_char_into(c, false, &mut formatted);
			index += c.len_utf8();
		}
	}

	formatted
}

/// Formats `input` with the process-wide configuration.
///
/// See [`Formatter::format`].
pub fn format(
	input: &str,
	scheme: &str,
	kind: UriKind,
	component: Component,
	format: UriFormat,
) -> String {
	Formatter::new(Config::process()).format(input, scheme, kind, component, format)
}

/// Formats `input` for display with the process-wide configuration.
///
/// See [`Formatter::format_for_display`].
pub fn format_for_display(input: &str, scheme: &str, kind: UriKind, component: Component) -> String {
	Formatter::new(Config::process()).format_for_display(input, scheme, kind, component)
}
