extern crate pct_format;

use pct_format::{Component, Config, Formatter, UriFormat, UriKind};

fn main() {
	// A [`Formatter`] works on one URI component at a time.
	// The configuration decides whether IRI rules apply.
	let formatter = Formatter::new(Config::legacy());

	let path = formatter.format(
		"docs/read me.txt",
		"http",
		UriKind::Absolute,
		Component::Path,
		UriFormat::UriEscaped,
	);
	println!("{}", path);
	// => docs/read%20me.txt

	// Backslashes in a file path become slashes.
	let path = formatter.format(
		"C:\\Users\\caf%C3%A9",
		"file",
		UriKind::Absolute,
		Component::Path,
		UriFormat::SafeUnescaped,
	);
	println!("{}", path);
	// => C:/Users/café

	// Display strings also decode the legacy reserved characters.
	let query = formatter.format_for_display("a%3D1%26b%3D2", "http", UriKind::Absolute, Component::Query);
	println!("{}", query);
	// => a=1&b=2

	// In IRI mode, percent-encoded unreserved characters are decoded.
	let iri = Formatter::new(Config::iri());
	let path = iri.format("%7Euser", "http", UriKind::Absolute, Component::Path, UriFormat::UriEscaped);
	println!("{}", path);
	// => ~user
}
