//! Well-known scheme classification.

use crate::Config;
use std::fmt;

/// Well-known scheme a URI belongs to.
///
/// Obtained with [`SchemeKind::classify`]. Anything that is not one of the
/// well-known names is [`Custom`](SchemeKind::Custom), and the empty name is
/// [`None`](SchemeKind::None).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
	None,
	Http,
	Https,
	File,
	Ftp,
	Gopher,
	Ldap,
	Mailto,
	NetPipe,
	NetTcp,
	News,
	Nntp,
	Telnet,
	Uuid,
	Custom,
}

const WELL_KNOWN: [(&str, SchemeKind); 13] = [
	("http", SchemeKind::Http),
	("https", SchemeKind::Https),
	("file", SchemeKind::File),
	("ftp", SchemeKind::Ftp),
	("gopher", SchemeKind::Gopher),
	("ldap", SchemeKind::Ldap),
	("mailto", SchemeKind::Mailto),
	("net.pipe", SchemeKind::NetPipe),
	("net.tcp", SchemeKind::NetTcp),
	("news", SchemeKind::News),
	("nntp", SchemeKind::Nntp),
	("telnet", SchemeKind::Telnet),
	("uuid", SchemeKind::Uuid),
];

/// Schemes that have no query component.
const NO_QUERY: SchemeSet = SchemeSet::EMPTY
	.with(SchemeKind::Ftp)
	.with(SchemeKind::Gopher)
	.with(SchemeKind::Nntp)
	.with(SchemeKind::Telnet);

impl SchemeKind {
	/// Classify a scheme name.
	///
	/// The comparison is exact: no case folding nor trimming is performed.
	///
	/// ```
	/// use pct_format::SchemeKind;
	///
	/// assert_eq!(SchemeKind::classify("net.tcp"), SchemeKind::NetTcp);
	/// assert_eq!(SchemeKind::classify("HTTP"), SchemeKind::Custom);
	/// assert_eq!(SchemeKind::classify(""), SchemeKind::None);
	/// ```
	pub fn classify(name: &str) -> Self {
		if name.is_empty() {
			return Self::None;
		}

		WELL_KNOWN
			.iter()
			.find(|(known, _)| *known == name)
			.map(|(_, kind)| *kind)
			.unwrap_or(Self::Custom)
	}

	/// Canonical scheme name, for well-known schemes only.
	pub fn name(self) -> Option<&'static str> {
		WELL_KNOWN
			.iter()
			.find(|(_, kind)| *kind == self)
			.map(|(name, _)| *name)
	}

	const fn bit(self) -> u16 {
		match self {
			Self::None => 0,
			Self::Http => 1 << 0,
			Self::Https => 1 << 1,
			Self::File => 1 << 2,
			Self::Ftp => 1 << 3,
			Self::Gopher => 1 << 4,
			Self::Ldap => 1 << 5,
			Self::Mailto => 1 << 6,
			Self::NetPipe => 1 << 7,
			Self::NetTcp => 1 << 8,
			Self::News => 1 << 9,
			Self::Nntp => 1 << 10,
			Self::Telnet => 1 << 11,
			Self::Uuid => 1 << 12,
			Self::Custom => 1 << 13,
		}
	}

	/// Checks whether the scheme is a member of `set`.
	#[inline]
	pub const fn is_in(self, set: SchemeSet) -> bool {
		set.contains(self)
	}

	/// Checks whether URIs of this scheme may carry a query component.
	///
	/// Every scheme does except ftp, gopher, nntp and telnet. The file scheme
	/// only does when IRI parsing is enabled.
	pub fn supports_query(self, config: Config) -> bool {
		if self == Self::File {
			return config.iri_parsing;
		}

		!self.is_in(NO_QUERY)
	}
}

impl fmt::Display for SchemeKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self.name() {
			Some(name) => f.write_str(name),
			None => fmt::Debug::fmt(self, f),
		}
	}
}

/// Set of scheme kinds.
///
/// Membership is tested with [`contains`](SchemeSet::contains). The
/// [`None`](SchemeKind::None) kind is never a member, not even of
/// [`SchemeSet::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SchemeSet(u16);

impl SchemeSet {
	/// The empty set.
	pub const EMPTY: Self = Self(0);

	/// Every scheme kind but [`None`](SchemeKind::None).
	pub const ALL: Self = Self(u16::MAX);

	/// Creates a set holding the given kinds.
	pub const fn of(kinds: &[SchemeKind]) -> Self {
		let mut set = Self::EMPTY;
		let mut i = 0;
		while i < kinds.len() {
			set = set.with(kinds[i]);
			i += 1;
		}
		set
	}

	/// Adds a kind to the set.
	#[must_use]
	pub const fn with(self, kind: SchemeKind) -> Self {
		Self(self.0 | kind.bit())
	}

	/// Combines two sets into one.
	#[must_use]
	pub const fn union(self, other: Self) -> Self {
		Self(self.0 | other.0)
	}

	#[inline]
	pub const fn contains(self, kind: SchemeKind) -> bool {
		self.0 & kind.bit() != 0
	}
}

impl From<SchemeKind> for SchemeSet {
	fn from(kind: SchemeKind) -> Self {
		Self::EMPTY.with(kind)
	}
}
