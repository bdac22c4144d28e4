use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a corpus file and returns its full contents as a `String`.
///
/// The training pass iterates over the returned text with `chars()`,
/// which provides the forward-only character source the model consumes.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
