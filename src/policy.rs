//! Per-character escaping policy.
//!
//! A [`Policy`] is built once per formatting request and then decides, for
//! each character of the input, whether it is percent-encoded, decoded, kept
//! as is or substituted. The rules are evaluated in order and the first one
//! that matches wins.

use crate::{
	error::ParseError,
	hex,
	scheme::{SchemeKind, SchemeSet},
	Config,
};
use std::{fmt, str::FromStr};

/// Whether a URI is absolute or relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(rename_all = "kebab-case")
)]
pub enum UriKind {
	Absolute,
	Relative,
	RelativeOrAbsolute,
}

/// Logical part of the URI the formatted characters belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(rename_all = "kebab-case")
)]
pub enum Component {
	Scheme,
	UserInfo,
	Host,
	Port,
	Path,
	Query,
	Fragment,
}

/// Requested output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(rename_all = "kebab-case")
)]
pub enum UriFormat {
	/// Escape everything that is not allowed to appear literally in a URI.
	UriEscaped,

	/// Decode every percent-encoded character.
	Unescaped,

	/// Decode characters only when doing so does not change the meaning of the URI.
	SafeUnescaped,
}

macro_rules! named {
	($ty:ident, $what:literal { $($variant:ident => $name:literal),* $(,)? }) => {
		impl $ty {
			/// Name of the variant, in kebab-case.
			pub fn as_str(&self) -> &'static str {
				match self {
					$(Self::$variant => $name),*
				}
			}
		}

		impl fmt::Display for $ty {
			fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $ty {
			type Err = ParseError;

			fn from_str(s: &str) -> Result<Self, ParseError> {
				match s {
					$($name => Ok(Self::$variant),)*
					_ => Err(ParseError::new($what, s)),
				}
			}
		}
	};
}

named!(UriKind, "uri kind" {
	Absolute => "absolute",
	Relative => "relative",
	RelativeOrAbsolute => "relative-or-absolute",
});

named!(Component, "uri component" {
	Scheme => "scheme",
	UserInfo => "user-info",
	Host => "host",
	Port => "port",
	Path => "path",
	Query => "query",
	Fragment => "fragment",
});

named!(UriFormat, "uri format" {
	UriEscaped => "uri-escaped",
	Unescaped => "unescaped",
	SafeUnescaped => "safe-unescaped",
});

/// Formatting mode.
///
/// The public formats, plus the one used to render a whole URI back to a
/// display string, which follows its own legacy rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
	Escaped,
	Unescaped,
	SafeUnescaped,
	Display,
}

impl From<UriFormat> for Mode {
	fn from(format: UriFormat) -> Self {
		match format {
			UriFormat::UriEscaped => Self::Escaped,
			UriFormat::Unescaped => Self::Unescaped,
			UriFormat::SafeUnescaped => Self::SafeUnescaped,
		}
	}
}

/// What happens to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	/// Emit the percent-encoded triplets of the character.
	Escape,

	/// Emit the decoded form of a percent-encoded character.
	Unescape,

	/// Emit the literal character unchanged.
	PassThrough,

	/// Emit another character in its place.
	Substitute(char),
}

const WEB: SchemeSet = SchemeSet::of(&[SchemeKind::Http, SchemeKind::Https]);

const NET: SchemeSet = SchemeSet::of(&[SchemeKind::NetPipe, SchemeKind::NetTcp]);

/// Schemes where a backslash is escaped even inside the path.
const STRICT_BACKSLASH: SchemeSet = SchemeSet::of(&[
	SchemeKind::Gopher,
	SchemeKind::Ldap,
	SchemeKind::Mailto,
	SchemeKind::Nntp,
	SchemeKind::Telnet,
]);

/// Schemes where a path backslash becomes a slash unless it was percent-encoded.
const LENIENT_BACKSLASH: SchemeSet =
	WEB.union(SchemeSet::of(&[SchemeKind::Ftp, SchemeKind::Custom]));

fn is_mark(c: char) -> bool {
	matches!(c, '-' | '.' | '_' | '~')
}

fn is_control(c: char) -> bool {
	c < '\u{20}' || c == '\u{7F}'
}

/// Escaping policy for one formatting request.
///
/// # Example
///
/// ```
/// use pct_format::{Action, Component, Config, Policy, SchemeKind, UriFormat, UriKind};
///
/// let policy = Policy::new(
/// 	SchemeKind::Http,
/// 	UriKind::Absolute,
/// 	Component::Path,
/// 	UriFormat::UriEscaped,
/// 	Config::legacy(),
/// );
///
/// assert_eq!(policy.decide(' ', false), Action::Escape);
/// assert_eq!(policy.format_char(' ', false), "%20");
/// assert_eq!(policy.format_char('a', false), "a");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
	scheme: SchemeKind,
	kind: UriKind,
	component: Component,
	mode: Mode,
	config: Config,
}

impl Policy {
	pub fn new(
		scheme: SchemeKind,
		kind: UriKind,
		component: Component,
		format: UriFormat,
		config: Config,
	) -> Self {
		Self::with_mode(scheme, kind, component, format.into(), config)
	}

	/// Policy used to render a URI back to a display string.
	pub(crate) fn for_display(
		scheme: SchemeKind,
		kind: UriKind,
		component: Component,
		config: Config,
	) -> Self {
		Self::with_mode(scheme, kind, component, Mode::Display, config)
	}

	fn with_mode(
		scheme: SchemeKind,
		kind: UriKind,
		component: Component,
		mode: Mode,
		config: Config,
	) -> Self {
		Self {
			scheme,
			kind,
			component,
			mode,
			config,
		}
	}

	pub fn scheme(&self) -> SchemeKind {
		self.scheme
	}

	/// Component the policy formats.
	///
	/// ```
	/// use pct_format::{Component, Config, Policy, SchemeKind, UriFormat, UriKind};
	///
	/// let policy = Policy::new(
	/// 	SchemeKind::classify("mailto"),
	/// 	UriKind::Absolute,
	/// 	Component::UserInfo,
	/// 	UriFormat::SafeUnescaped,
	/// 	Config::default(),
	/// );
	///
	/// assert_eq!(policy.scheme(), SchemeKind::Mailto);
	/// assert_eq!(policy.component(), Component::UserInfo);
	/// ```
	pub fn component(&self) -> Component {
		self.component
	}

	fn iri(&self) -> bool {
		self.config.iri_parsing
	}

	fn supports_query(&self) -> bool {
		self.scheme.supports_query(self.config)
	}

	fn in_component(&self, components: &[Component]) -> bool {
		components.contains(&self.component)
	}

	/// Schemes whose percent-encoded slashes and dots are decoded.
	fn decoders(&self) -> SchemeSet {
		if self.iri() {
			NET
		} else {
			NET.union(WEB)
		}
	}

	/// Shared test for decoding `/`, `\` and `.`.
	fn decodes_separator(&self) -> bool {
		if self.scheme == SchemeKind::File {
			return self.component != Component::Fragment;
		}

		!self.in_component(&[Component::Query, Component::Fragment])
			&& self.scheme.is_in(self.decoders())
	}

	/// Checks whether a literal character must be percent-encoded.
	pub fn need_to_escape(&self, c: char) -> bool {
		match c {
			'?' => {
				if self.mode == Mode::Unescaped {
					return false;
				}

				// No query to delimit, so `?` is plain data.
				if !self.supports_query() {
					return self.component != Component::Fragment;
				}

				return false;
			}
			'#' => {
				if self.in_component(&[Component::Path, Component::Query]) {
					return false;
				}

				return !self.iri() && self.mode == Mode::Escaped;
			}
			_ => (),
		}

		if c == '%' && matches!(self.mode, Mode::SafeUnescaped | Mode::Display) {
			return self.kind != UriKind::Relative;
		}

		match self.mode {
			Mode::SafeUnescaped => is_control(c),
			Mode::Escaped => match c {
				_ if c < '\u{20}' || c >= '\u{7F}' => true,
				' ' | '"' | '%' | '<' | '>' | '^' | '`' | '{' | '}' | '|' => true,
				'[' | ']' => !self.iri(),
				'\\' => {
					self.component != Component::Path || self.scheme.is_in(STRICT_BACKSLASH)
				}
				_ => false,
			},
			Mode::Unescaped | Mode::Display => false,
		}
	}

	/// Checks whether a percent-encoded character must be decoded.
	pub fn need_to_unescape(&self, c: char) -> bool {
		if self.mode == Mode::Unescaped {
			return true;
		}

		match c {
			'/' | '\\' => {
				if !self.iri() && self.kind == UriKind::Absolute && self.mode == Mode::Display {
					return true;
				}

				if self.scheme == SchemeKind::File {
					return self.component != Component::Fragment
						&& (self.component != Component::Query || !self.iri());
				}

				return self.decodes_separator();
			}
			'?' => {
				// Do not create a query.
				if self.supports_query() && self.component == Component::Path {
					return false;
				}

				if !self.iri() && self.mode == Mode::Display {
					if self.supports_query() {
						return self.in_component(&[Component::Query, Component::Fragment]);
					}

					return self.component == Component::Fragment;
				}

				return false;
			}
			// Do not create a fragment.
			'#' => return false,
			_ => (),
		}

		if self.mode == Mode::Display && !self.iri() {
			if self.kind == UriKind::Relative {
				return false;
			}

			if matches!(c, '$' | '&' | '+' | ',' | ';' | '=' | '@') || is_control(c) {
				return true;
			}
		}

		match self.mode {
			Mode::SafeUnescaped | Mode::Display => match c {
				_ if is_mark(c) => true,
				' ' | '!' | '"' | '\'' | '(' | ')' | '*' | ':' | '<' | '>' | '[' | ']' | '^'
				| '`' | '{' | '}' | '|' => self.kind != UriKind::Relative,
				_ => c.is_ascii_alphanumeric() || c > '\u{7F}',
			},
			Mode::Escaped if !self.iri() => c == '.' && self.decodes_separator(),
			Mode::Escaped => is_mark(c) || c.is_ascii_alphanumeric(),
			Mode::Unescaped => true,
		}
	}

	/// Decides what happens to `c`.
	///
	/// `escaped` tells whether `c` was decoded from percent-encoded triplets
	/// or appeared literally in the input.
	pub fn decide(&self, c: char, escaped: bool) -> Action {
		let escape = if escaped {
			!self.need_to_unescape(c)
		} else {
			self.need_to_escape(c)
		};

		if escape {
			return Action::Escape;
		}

		if c == '\\' && self.component == Component::Path {
			if !self.iri() && self.mode != Mode::Escaped && self.scheme.is_in(WEB) {
				return Action::Substitute('/');
			}

			if self.scheme.is_in(LENIENT_BACKSLASH) {
				return if escaped && self.mode != Mode::Escaped {
					Action::Substitute('\\')
				} else {
					Action::Substitute('/')
				};
			}

			if self.scheme.is_in(NET) || self.scheme == SchemeKind::File {
				return Action::Substitute('/');
			}
		}

		if escaped {
			Action::Unescape
		} else {
			Action::PassThrough
		}
	}

	/// Formats `c` at the end of `buf`.
	pub fn format_char_into(&self, c: char, escaped: bool, buf: &mut String) {
		match self.decide(c, escaped) {
			Action::Escape => hex::encode_char_into(c, buf),
			Action::Unescape | Action::PassThrough => buf.push(c),
			Action::Substitute(s) => buf.push(s),
		}
	}

	/// Formats a single character.
	pub fn format_char(&self, c: char, escaped: bool) -> String {
		let mut buf = String::with_capacity(4);
		self.format_char_into(c, escaped, &mut buf);
		buf
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn policy(
		scheme: SchemeKind,
		kind: UriKind,
		component: Component,
		format: UriFormat,
		iri: bool,
	) -> Policy {
		Policy::new(scheme, kind, component, format, Config { iri_parsing: iri })
	}

	fn display(scheme: SchemeKind, kind: UriKind, component: Component, iri: bool) -> Policy {
		Policy::for_display(scheme, kind, component, Config { iri_parsing: iri })
	}

	fn http_path(format: UriFormat, iri: bool) -> Policy {
		policy(SchemeKind::Http, UriKind::Absolute, Component::Path, format, iri)
	}

	#[test]
	fn question_mark_literal() {
		use Component::*;

		// Schemes with a query keep `?` wherever it is.
		for component in [Path, Query, Fragment] {
			let p = policy(
				SchemeKind::Http,
				UriKind::Absolute,
				component,
				UriFormat::UriEscaped,
				false,
			);
			assert!(!p.need_to_escape('?'));
		}

		// Schemes without a query escape it outside of the fragment.
		let p = policy(SchemeKind::Ftp, UriKind::Absolute, Path, UriFormat::UriEscaped, false);
		assert!(p.need_to_escape('?'));
		let p = policy(SchemeKind::Ftp, UriKind::Absolute, Fragment, UriFormat::UriEscaped, false);
		assert!(!p.need_to_escape('?'));

		// Except when everything is unescaped.
		let p = policy(SchemeKind::Ftp, UriKind::Absolute, Path, UriFormat::Unescaped, false);
		assert!(!p.need_to_escape('?'));
	}

	#[test]
	fn hash_literal() {
		assert!(!http_path(UriFormat::UriEscaped, false).need_to_escape('#'));

		let query = policy(
			SchemeKind::Http,
			UriKind::Absolute,
			Component::Query,
			UriFormat::UriEscaped,
			false,
		);
		assert!(!query.need_to_escape('#'));

		let fragment = |format, iri| {
			policy(SchemeKind::Http, UriKind::Absolute, Component::Fragment, format, iri)
		};
		assert!(fragment(UriFormat::UriEscaped, false).need_to_escape('#'));
		assert!(!fragment(UriFormat::UriEscaped, true).need_to_escape('#'));
		assert!(!fragment(UriFormat::SafeUnescaped, false).need_to_escape('#'));
	}

	#[test]
	fn percent_literal() {
		let safe = |kind| {
			policy(SchemeKind::Http, kind, Component::Path, UriFormat::SafeUnescaped, false)
		};
		assert!(safe(UriKind::Absolute).need_to_escape('%'));
		assert!(safe(UriKind::RelativeOrAbsolute).need_to_escape('%'));
		assert!(!safe(UriKind::Relative).need_to_escape('%'));

		assert!(display(SchemeKind::Http, UriKind::Absolute, Component::Path, false)
			.need_to_escape('%'));
		assert!(!display(SchemeKind::Http, UriKind::Relative, Component::Path, false)
			.need_to_escape('%'));

		assert!(http_path(UriFormat::UriEscaped, false).need_to_escape('%'));
		assert!(!http_path(UriFormat::Unescaped, false).need_to_escape('%'));
	}

	#[test]
	fn controls_literal() {
		let safe = http_path(UriFormat::SafeUnescaped, false);
		assert!(safe.need_to_escape('\n'));
		assert!(safe.need_to_escape('\u{7F}'));
		assert!(!safe.need_to_escape(' '));
		assert!(!safe.need_to_escape('é'));

		let escaped = http_path(UriFormat::UriEscaped, false);
		assert!(escaped.need_to_escape('\t'));
		assert!(escaped.need_to_escape('\u{7F}'));
		assert!(escaped.need_to_escape('é'));

		assert!(!display(SchemeKind::Http, UriKind::Absolute, Component::Path, false)
			.need_to_escape('\n'));
	}

	#[test]
	fn uri_escaped_literal_set() {
		let p = http_path(UriFormat::UriEscaped, false);
		for c in " \"%<>^`{}|[]".chars() {
			assert!(p.need_to_escape(c), "{c:?} should be escaped");
		}
		for c in "azAZ09-._~!$&'()*+,;=:@/".chars() {
			assert!(!p.need_to_escape(c), "{c:?} should not be escaped");
		}
	}

	#[test]
	fn brackets_follow_iri_mode() {
		assert!(http_path(UriFormat::UriEscaped, false).need_to_escape('['));
		assert!(!http_path(UriFormat::UriEscaped, true).need_to_escape(']'));
	}

	#[test]
	fn backslash_literal() {
		assert!(!http_path(UriFormat::UriEscaped, false).need_to_escape('\\'));

		let query = policy(
			SchemeKind::Http,
			UriKind::Absolute,
			Component::Query,
			UriFormat::UriEscaped,
			false,
		);
		assert!(query.need_to_escape('\\'));

		for scheme in [
			SchemeKind::Gopher,
			SchemeKind::Ldap,
			SchemeKind::Mailto,
			SchemeKind::Nntp,
			SchemeKind::Telnet,
		] {
			let p = policy(scheme, UriKind::Absolute, Component::Path, UriFormat::UriEscaped, false);
			assert!(p.need_to_escape('\\'));
			assert_eq!(p.format_char('\\', false), "%5C");
		}
	}

	#[test]
	fn unescaped_always_decodes() {
		let p = http_path(UriFormat::Unescaped, false);
		for c in "/\\?#% aé".chars() {
			assert!(p.need_to_unescape(c));
		}
	}

	#[test]
	fn slash_escaped() {
		// Display of an absolute URI decodes separators in legacy mode.
		let p = display(SchemeKind::Custom, UriKind::Absolute, Component::Query, false);
		assert!(p.need_to_unescape('/'));
		let p = display(SchemeKind::Custom, UriKind::Relative, Component::Query, false);
		assert!(!p.need_to_unescape('/'));

		let file = |component, iri| {
			policy(SchemeKind::File, UriKind::Absolute, component, UriFormat::SafeUnescaped, iri)
		};
		assert!(file(Component::Path, false).need_to_unescape('/'));
		assert!(file(Component::Query, false).need_to_unescape('/'));
		assert!(!file(Component::Query, true).need_to_unescape('/'));
		assert!(!file(Component::Fragment, false).need_to_unescape('\\'));

		assert!(http_path(UriFormat::SafeUnescaped, false).need_to_unescape('/'));
		assert!(!http_path(UriFormat::SafeUnescaped, true).need_to_unescape('/'));

		let tcp = |component| {
			policy(SchemeKind::NetTcp, UriKind::Absolute, component, UriFormat::UriEscaped, true)
		};
		assert!(tcp(Component::Path).need_to_unescape('/'));
		assert!(!tcp(Component::Query).need_to_unescape('/'));

		let ftp = policy(
			SchemeKind::Ftp,
			UriKind::Absolute,
			Component::Path,
			UriFormat::SafeUnescaped,
			false,
		);
		assert!(!ftp.need_to_unescape('/'));
	}

	#[test]
	fn question_mark_escaped() {
		// Never decoded into the path of a scheme with a query.
		assert!(!display(SchemeKind::Http, UriKind::Absolute, Component::Path, false)
			.need_to_unescape('?'));

		assert!(display(SchemeKind::Http, UriKind::Absolute, Component::Query, false)
			.need_to_unescape('?'));
		assert!(display(SchemeKind::Http, UriKind::Absolute, Component::Fragment, false)
			.need_to_unescape('?'));
		assert!(!display(SchemeKind::Http, UriKind::Absolute, Component::Fragment, true)
			.need_to_unescape('?'));

		assert!(!display(SchemeKind::Ftp, UriKind::Absolute, Component::Path, false)
			.need_to_unescape('?'));
		assert!(display(SchemeKind::Ftp, UriKind::Absolute, Component::Fragment, false)
			.need_to_unescape('?'));

		let p = policy(
			SchemeKind::Http,
			UriKind::Absolute,
			Component::Query,
			UriFormat::SafeUnescaped,
			false,
		);
		assert!(!p.need_to_unescape('?'));
	}

	#[test]
	fn hash_escaped() {
		for component in [Component::Path, Component::Query, Component::Fragment] {
			let p = display(SchemeKind::Http, UriKind::Absolute, component, false);
			assert!(!p.need_to_unescape('#'));
		}
	}

	#[test]
	fn display_legacy_reserved() {
		let p = display(SchemeKind::Http, UriKind::Absolute, Component::Query, false);
		for c in "$&+,;=@\n\u{7F}".chars() {
			assert!(p.need_to_unescape(c), "{c:?} should be decoded");
		}

		// Relative references stay untouched.
		let p = display(SchemeKind::Http, UriKind::Relative, Component::Query, false);
		for c in "$a-é".chars() {
			assert!(!p.need_to_unescape(c), "{c:?} should stay encoded");
		}

		// Not part of the safe set.
		let p = policy(
			SchemeKind::Http,
			UriKind::Absolute,
			Component::Query,
			UriFormat::SafeUnescaped,
			false,
		);
		assert!(!p.need_to_unescape('$'));
		assert!(!p.need_to_unescape('\n'));
	}

	#[test]
	fn safe_unescaped_sets() {
		let p = http_path(UriFormat::SafeUnescaped, false);
		for c in "-._~aZ0é !\"'()*:<>[]^`{}|".chars() {
			assert!(p.need_to_unescape(c), "{c:?} should be decoded");
		}
		for c in "%$&+\n".chars() {
			assert!(!p.need_to_unescape(c), "{c:?} should stay encoded");
		}

		let relative = policy(
			SchemeKind::Http,
			UriKind::Relative,
			Component::Path,
			UriFormat::SafeUnescaped,
			false,
		);
		assert!(relative.need_to_unescape('a'));
		assert!(relative.need_to_unescape('~'));
		assert!(!relative.need_to_unescape(' '));
		assert!(!relative.need_to_unescape('['));
	}

	#[test]
	fn uri_escaped_dot() {
		assert!(http_path(UriFormat::UriEscaped, false).need_to_unescape('.'));
		assert!(!http_path(UriFormat::UriEscaped, false).need_to_unescape('a'));

		let file = |component| {
			policy(SchemeKind::File, UriKind::Absolute, component, UriFormat::UriEscaped, false)
		};
		assert!(file(Component::Query).need_to_unescape('.'));
		assert!(!file(Component::Fragment).need_to_unescape('.'));

		let custom = policy(
			SchemeKind::Custom,
			UriKind::Absolute,
			Component::Path,
			UriFormat::UriEscaped,
			false,
		);
		assert!(!custom.need_to_unescape('.'));
	}

	#[test]
	fn uri_escaped_iri() {
		let p = http_path(UriFormat::UriEscaped, true);
		for c in "-._~azAZ09".chars() {
			assert!(p.need_to_unescape(c));
		}
		for c in " é[!".chars() {
			assert!(!p.need_to_unescape(c));
		}
	}

	#[test]
	fn backslash_substitution() {
		let p = |scheme, format, iri| {
			policy(scheme, UriKind::Absolute, Component::Path, format, iri)
		};

		assert_eq!(
			p(SchemeKind::Http, UriFormat::SafeUnescaped, false).decide('\\', true),
			Action::Substitute('/')
		);
		assert_eq!(
			p(SchemeKind::Https, UriFormat::Unescaped, true).decide('\\', true),
			Action::Substitute('\\')
		);
		// Only decoded at all in legacy mode.
		assert_eq!(
			p(SchemeKind::Https, UriFormat::SafeUnescaped, true).decide('\\', true),
			Action::Escape
		);
		assert_eq!(
			p(SchemeKind::Https, UriFormat::SafeUnescaped, true).decide('\\', false),
			Action::Substitute('/')
		);
		assert_eq!(
			p(SchemeKind::Custom, UriFormat::UriEscaped, false).decide('\\', false),
			Action::Substitute('/')
		);
		assert_eq!(
			p(SchemeKind::NetPipe, UriFormat::UriEscaped, false).decide('\\', false),
			Action::Substitute('/')
		);
		assert_eq!(
			p(SchemeKind::File, UriFormat::Unescaped, true).decide('\\', true),
			Action::Substitute('/')
		);

		// No substitution outside the path, nor for unrelated schemes.
		assert_eq!(
			p(SchemeKind::News, UriFormat::UriEscaped, false).decide('\\', false),
			Action::PassThrough
		);
		let query = policy(
			SchemeKind::File,
			UriKind::Absolute,
			Component::Query,
			UriFormat::Unescaped,
			false,
		);
		assert_eq!(query.decide('\\', false), Action::PassThrough);
	}

	#[test]
	fn decisions() {
		let p = http_path(UriFormat::SafeUnescaped, false);
		assert_eq!(p.decide('a', false), Action::PassThrough);
		assert_eq!(p.decide('a', true), Action::Unescape);
		assert_eq!(p.decide('$', true), Action::Escape);
		assert_eq!(p.decide('\n', false), Action::Escape);
		assert_eq!(p.format_char('$', true), "%24");
		assert_eq!(p.format_char('é', true), "é");
	}

	const SCHEMES: [SchemeKind; 15] = [
		SchemeKind::None,
		SchemeKind::Http,
		SchemeKind::Https,
		SchemeKind::File,
		SchemeKind::Ftp,
		SchemeKind::Gopher,
		SchemeKind::Ldap,
		SchemeKind::Mailto,
		SchemeKind::NetPipe,
		SchemeKind::NetTcp,
		SchemeKind::News,
		SchemeKind::Nntp,
		SchemeKind::Telnet,
		SchemeKind::Uuid,
		SchemeKind::Custom,
	];

	const COMPONENTS: [Component; 7] = [
		Component::Scheme,
		Component::UserInfo,
		Component::Host,
		Component::Port,
		Component::Path,
		Component::Query,
		Component::Fragment,
	];

	const KINDS: [UriKind; 3] = [UriKind::Absolute, UriKind::Relative, UriKind::RelativeOrAbsolute];

	const MODES: [Mode; 4] = [Mode::Escaped, Mode::Unescaped, Mode::SafeUnescaped, Mode::Display];

	#[test]
	fn escape_and_unescape_agree() {
		// Nothing that gets escaped is decoded right back under the same policy,
		// except backslashes outside of the path: those decode wherever slashes
		// do but are only ever kept literal in the path.
		for scheme in SCHEMES {
			for component in COMPONENTS {
				for kind in KINDS {
					for mode in MODES {
						for iri in [false, true] {
							let p = Policy::with_mode(
								scheme,
								kind,
								component,
								mode,
								Config { iri_parsing: iri },
							);

							for c in (0u32..0x100).filter_map(char::from_u32) {
								if p.need_to_escape(c) && p.need_to_unescape(c) {
									assert!(
										c == '\\' && component != Component::Path,
										"{c:?} flips under {p:?}"
									);
								}
							}
						}
					}
				}
			}
		}
	}

	#[test]
	fn backslash_outside_path_flips() {
		let p = policy(
			SchemeKind::File,
			UriKind::Absolute,
			Component::Query,
			UriFormat::UriEscaped,
			false,
		);
		assert_eq!(p.format_char('\\', false), "%5C");
		assert_eq!(p.format_char('\\', true), "\\");

		let p = policy(
			SchemeKind::Gopher,
			UriKind::Absolute,
			Component::Path,
			UriFormat::UriEscaped,
			false,
		);
		assert_eq!(p.format_char('\\', true), "%5C");
	}

	#[test]
	fn parse_names() {
		assert_eq!("uri-escaped".parse::<UriFormat>(), Ok(UriFormat::UriEscaped));
		assert_eq!("safe-unescaped".parse::<UriFormat>(), Ok(UriFormat::SafeUnescaped));
		assert_eq!("user-info".parse::<Component>(), Ok(Component::UserInfo));
		assert_eq!(
			"relative-or-absolute".parse::<UriKind>(),
			Ok(UriKind::RelativeOrAbsolute)
		);

		let err = "to-string".parse::<UriFormat>().unwrap_err();
		assert_eq!(err.name(), "to-string");
		assert_eq!(err.to_string(), "unknown uri format: `to-string`");

		assert_eq!(Component::Fragment.to_string(), "fragment");
	}
}
