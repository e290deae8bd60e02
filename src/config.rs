//! IRI parsing configuration.

use std::sync::OnceLock;
use tracing::{debug, warn};

/// Environment variable read by [`Config::from_env`].
pub const IRI_PARSING_VAR: &str = "PCT_FORMAT_IRI_PARSING";

/// Formatting configuration.
///
/// Every escaping decision reads this value; none ever changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
	/// Whether [RFC 3987](https://tools.ietf.org/html/rfc3987) IRI parsing is enabled.
	///
	/// When disabled, the RFC 2396 legacy rules apply.
	pub iri_parsing: bool,
}

impl Config {
	/// Legacy configuration, with IRI parsing disabled.
	pub const fn legacy() -> Self {
		Self { iri_parsing: false }
	}

	/// IRI configuration.
	pub const fn iri() -> Self {
		Self { iri_parsing: true }
	}

	/// Reads the configuration from the [`IRI_PARSING_VAR`] environment variable.
	///
	/// Unrecognized values are ignored and the default is kept.
	pub fn from_env() -> Self {
		let config = match std::env::var(IRI_PARSING_VAR) {
			Ok(value) => Self::from_var(&value),
			Err(_) => Self::default(),
		};

		debug!(iri_parsing = config.iri_parsing, "uri formatting configured");
		config
	}

	fn from_var(value: &str) -> Self {
		match value.trim() {
			"true" | "1" => Self::iri(),
			"false" | "0" => Self::legacy(),
			other => {
				warn!(
					value = other,
					"ignoring unrecognized value of {}", IRI_PARSING_VAR
				);
				Self::default()
			}
		}
	}

	/// Process-wide configuration.
	///
	/// Read from the environment on first use and cached for the lifetime of the process.
	pub fn process() -> Self {
		static PROCESS: OnceLock<Config> = OnceLock::new();
		*PROCESS.get_or_init(Self::from_env)
	}
}
