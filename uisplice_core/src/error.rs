use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SpliceError {
	#[error("failed to read `{}`", .path.display())]
	#[diagnostic(code(uisplice::read))]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write `{}`", .path.display())]
	#[diagnostic(code(uisplice::write))]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("no line containing `AUTOGEN_START_{tag}` in `{}`", .file.display())]
	#[diagnostic(
		code(uisplice::missing_start_sentinel),
		help("add `///AUTOGEN_START_{tag}` and `///AUTOGEN_END_{tag}` lines around the managed region")
	)]
	MissingStartSentinel { tag: String, file: PathBuf },

	#[error(
		"found `AUTOGEN_START_{tag}` but no `AUTOGEN_END_{tag}` in `{}`",
		.file.display()
	)]
	#[diagnostic(
		code(uisplice::missing_end_sentinel),
		help(
			"splicing an unterminated region would delete everything after the start sentinel; \
			 add a line containing `AUTOGEN_END_{tag}`"
		)
	)]
	MissingEndSentinel { tag: String, file: PathBuf },
}

pub type SpliceResult<T> = Result<T, SpliceError>;
