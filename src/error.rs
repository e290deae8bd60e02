use thiserror::Error;

/// Encoding error.
///
/// Raised by [`validate`](crate::hex::validate) when a given input string is not
/// percent-encoded as expected. The index points to the offending `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
	/// `%` not followed by two hexadecimal digits.
	#[error("invalid percent-encoded octet at index {index}")]
	InvalidOctet { index: usize },

	/// Run of percent-encoded octets that does not form a UTF-8 sequence.
	#[error("percent-encoded octets at index {index} are not valid UTF-8")]
	InvalidUtf8 { index: usize },
}

impl EncodingError {
	/// Byte index of the `%` where the error was found.
	pub fn index(&self) -> usize {
		match self {
			Self::InvalidOctet { index } | Self::InvalidUtf8 { index } => *index,
		}
	}
}

/// Error returned when parsing an enumeration from its name fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what}: `{name}`")]
pub struct ParseError {
	pub(crate) what: &'static str,
	pub(crate) name: String,
}

impl ParseError {
	pub(crate) fn new(what: &'static str, name: &str) -> Self {
		Self {
			what,
			name: name.to_owned(),
		}
	}

	/// The name that was rejected.
	pub fn name(&self) -> &str {
		&self.name
	}
}

/// Result of a function performing a percent-encoding check.
pub type Result<T, E = EncodingError> = std::result::Result<T, E>;
