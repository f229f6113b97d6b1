use std::path::Path;

use crate::SpliceError;
use crate::SpliceResult;
use crate::extractor::CapturedBlock;
use crate::segment::MarkerMatcher;

/// Literal prefix of the line that opens a managed region in a target file.
pub const START_SENTINEL_PREFIX: &str = "AUTOGEN_START_";
/// Literal prefix of the line that closes a managed region.
pub const END_SENTINEL_PREFIX: &str = "AUTOGEN_END_";

/// Replace the managed region for `tag` in `content` with the captured
/// block, keeping both sentinel lines. Everything strictly between the
/// sentinels is owned by this tool and is rewritten on every run, which
/// makes the operation idempotent: splicing the same block twice yields
/// byte-identical content.
///
/// `file` is only used for error reporting. A start sentinel with no
/// following end sentinel is an error — deleting through end of file would
/// destroy the remainder of the target — as is a tag whose start sentinel
/// never appears. Nothing is modified in either case.
///
/// Lines are split and rejoined on `\n`, so a trailing newline in `content`
/// survives as the trailing empty element.
pub fn splice_region(
	content: &str,
	tag: &str,
	block: &CapturedBlock,
	file: &Path,
) -> SpliceResult<String> {
	let start = MarkerMatcher::substring(format!("{START_SENTINEL_PREFIX}{tag}"));
	let end = MarkerMatcher::substring(format!("{END_SENTINEL_PREFIX}{tag}"));

	let mut out: Vec<&str> = Vec::new();
	let mut inside = false;
	let mut seen_start = false;

	for line in content.split('\n') {
		if inside {
			if end.matches(line) {
				for captured in block.lines() {
					out.push(captured);
				}
				out.push(line);
				inside = false;
			}
			// Interior lines are owned by the previous run and dropped.
		} else {
			// `seen_start` keeps a duplicated start sentinel after the region
			// from reopening it: exactly one insertion per run per tag.
			if !seen_start && start.matches(line) {
				inside = true;
				seen_start = true;
			}
			out.push(line);
		}
	}

	if inside {
		return Err(SpliceError::MissingEndSentinel {
			tag: tag.to_string(),
			file: file.to_path_buf(),
		});
	}
	if !seen_start {
		return Err(SpliceError::MissingStartSentinel {
			tag: tag.to_string(),
			file: file.to_path_buf(),
		});
	}

	Ok(out.join("\n"))
}
