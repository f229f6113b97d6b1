use std::fmt;

use crate::segment::RewriteRule;
use crate::segment::RuleMode;
use crate::segment::SegmentSpec;

/// The finalized, rule-rewritten, trimmed lines produced for one segment.
/// Created once during the extraction pass and consumed exactly once by the
/// splicer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedBlock {
	lines: Vec<String>,
}

impl CapturedBlock {
	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	fn push(&mut self, line: String) {
		self.lines.push(line);
	}

	/// Discard the last `count` captured lines, clamped so the pop never
	/// reaches past the start of the block.
	fn pop_last(&mut self, count: usize) {
		let keep = self.lines.len().saturating_sub(count);
		self.lines.truncate(keep);
	}
}

#[cfg(test)]
impl CapturedBlock {
	pub(crate) fn from_lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
		Self {
			lines: lines.into_iter().map(Into::into).collect(),
		}
	}
}

/// A non-fatal problem noticed during the extraction pass. The single
/// forward scan cannot recover from a broken marker sequence, so these are
/// collected and surfaced instead of silently producing truncated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractWarning {
	/// The start marker of this segment never appeared in the input; its
	/// block is empty.
	UnmatchedStart { tag: String, marker: String },
	/// The start marker matched but the end marker never appeared; the block
	/// holds everything captured through end of input, with no trailing trim
	/// applied.
	UnterminatedSegment { tag: String, marker: String },
	/// A segment after a broken one; the scan never reached it and its block
	/// is empty.
	NeverReached { tag: String },
}

impl fmt::Display for ExtractWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnmatchedStart { tag, marker } => {
				write!(
					f,
					"segment `{tag}`: start marker `{marker}` not found in input, captured block is empty"
				)
			}
			Self::UnterminatedSegment { tag, marker } => {
				write!(
					f,
					"segment `{tag}`: end marker `{marker}` not found, captured through end of input"
				)
			}
			Self::NeverReached { tag } => {
				write!(
					f,
					"segment `{tag}`: never reached because an earlier segment's markers were not found"
				)
			}
		}
	}
}

/// Output of the extraction pass: one block per segment spec, in spec order,
/// plus any warnings about markers that never matched.
#[derive(Debug, Default)]
pub struct ExtractOutcome {
	pub blocks: Vec<CapturedBlock>,
	pub warnings: Vec<ExtractWarning>,
}

/// Scan position within the single forward pass.
#[derive(Debug, Clone, Copy)]
enum ScanState {
	/// Looking for the start marker of the indexed segment.
	Seeking(usize),
	/// Between the boundaries of the indexed segment. `pending_skip` is the
	/// number of lines still to discard before capturing begins.
	Capturing { index: usize, pending_skip: usize },
	/// Every segment has found its end boundary; remaining input is ignored.
	Finished,
}

/// Extract every segment from the input in one linear pass. Pure: no I/O,
/// no global state — the scan position is an explicit [`ScanState`] value.
///
/// Segments are consumed strictly in order. If a segment's start marker
/// never matches, that segment and every later one end up with empty blocks
/// (the pass never resumes), and a warning is recorded for each.
pub fn extract_segments(input: &str, specs: &[SegmentSpec]) -> ExtractOutcome {
	let mut blocks: Vec<CapturedBlock> = vec![CapturedBlock::default(); specs.len()];
	let mut warnings = Vec::new();
	let mut state = if specs.is_empty() {
		ScanState::Finished
	} else {
		ScanState::Seeking(0)
	};

	for line in input.split('\n') {
		match state {
			ScanState::Finished => break,
			ScanState::Seeking(index) => {
				let spec = &specs[index];
				if spec.start.matches(line) {
					tracing::debug!(tag = %spec.tag, "segment start boundary found");
					// The boundary line itself goes through the skip step:
					// a lead_trim of zero captures it, a lead_trim of one
					// discards exactly it.
					let pending_skip = if spec.lead_trim > 0 {
						spec.lead_trim - 1
					} else {
						capture_line(&mut blocks[index], line, &spec.rules);
						0
					};
					state = ScanState::Capturing {
						index,
						pending_skip,
					};
				}
			}
			ScanState::Capturing {
				index,
				pending_skip,
			} => {
				let spec = &specs[index];
				if spec.end.matches(line) {
					blocks[index].pop_last(spec.trail_trim);
					tracing::debug!(
						tag = %spec.tag,
						lines = blocks[index].lines().len(),
						"segment captured"
					);
					state = if index + 1 < specs.len() {
						ScanState::Seeking(index + 1)
					} else {
						ScanState::Finished
					};
				} else if pending_skip > 0 {
					state = ScanState::Capturing {
						index,
						pending_skip: pending_skip - 1,
					};
				} else {
					capture_line(&mut blocks[index], line, &spec.rules);
				}
			}
		}
	}

	// Anything not Finished means a marker never matched; record what broke
	// and which segments the pass never reached.
	let broken = match state {
		ScanState::Finished => None,
		ScanState::Seeking(index) => {
			warnings.push(ExtractWarning::UnmatchedStart {
				tag: specs[index].tag.clone(),
				marker: specs[index].start.pattern().to_string(),
			});
			Some(index)
		}
		ScanState::Capturing { index, .. } => {
			warnings.push(ExtractWarning::UnterminatedSegment {
				tag: specs[index].tag.clone(),
				marker: specs[index].end.pattern().to_string(),
			});
			Some(index)
		}
	};
	if let Some(index) = broken {
		for spec in &specs[index + 1..] {
			warnings.push(ExtractWarning::NeverReached {
				tag: spec.tag.clone(),
			});
		}
	}

	ExtractOutcome { blocks, warnings }
}

/// Normalize, rewrite, and append one input line to a block. `Append` rules
/// add their text as separate follow-up lines once the primary line is
/// fully rewritten; appended lines are not themselves re-run through later
/// rules.
fn capture_line(block: &mut CapturedBlock, raw: &str, rules: &[RewriteRule]) {
	let mut line = normalize_indent(raw).to_string();
	let mut appended = Vec::new();

	for rule in rules {
		if !line.contains(&rule.pattern) {
			continue;
		}
		match rule.mode {
			RuleMode::Replace => line = line.replace(&rule.pattern, &rule.text),
			RuleMode::Prepend => line = format!("{}{line}", rule.text),
			RuleMode::Append => appended.push(rule.text.clone()),
		}
	}

	block.push(line);
	for extra in appended {
		block.push(extra);
	}
}

/// The generator wraps everything in one extra nesting level; lines indented
/// by eight or more spaces lose four of them. A line with seven leading
/// spaces is left untouched.
fn normalize_indent(line: &str) -> &str {
	if line.starts_with("        ") {
		&line[4..]
	} else {
		line
	}
}
