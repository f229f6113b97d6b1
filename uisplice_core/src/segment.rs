use std::path::PathBuf;

/// How a [`MarkerMatcher`] decides whether a line is a boundary.
///
/// The generated-file protocol is substring based and stays that way for
/// input compatibility, but boundary detection is kept behind this small
/// abstraction so stricter matching can be swapped in without touching the
/// extractor or splicer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
	/// The line contains the pattern anywhere.
	Substring,
	/// The line, with surrounding whitespace trimmed, equals the pattern.
	WholeLine,
}

/// A boundary test applied to one line at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatcher {
	pattern: String,
	mode: MatchMode,
}

impl MarkerMatcher {
	pub fn substring(pattern: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
			mode: MatchMode::Substring,
		}
	}

	pub fn whole_line(pattern: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
			mode: MatchMode::WholeLine,
		}
	}

	pub fn matches(&self, line: &str) -> bool {
		match self.mode {
			MatchMode::Substring => line.contains(&self.pattern),
			MatchMode::WholeLine => line.trim() == self.pattern,
		}
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}
}

/// What a [`RewriteRule`] does to a captured line containing its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMode {
	/// Substitute every occurrence of the pattern with the replacement text.
	Replace,
	/// Put the replacement text in front of the unchanged line.
	Prepend,
	/// Keep the line and emit the replacement text as a new line after it.
	Append,
}

/// A match-and-rewrite operation applied to every captured line of its
/// owning segment. Rules fire in declaration order and later rules see the
/// line as rewritten by earlier ones, so more than one rule may fire on the
/// same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
	pub pattern: String,
	pub text: String,
	pub mode: RuleMode,
}

impl RewriteRule {
	pub fn replace(pattern: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
			text: text.into(),
			mode: RuleMode::Replace,
		}
	}

	pub fn prepend(pattern: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
			text: text.into(),
			mode: RuleMode::Prepend,
		}
	}

	pub fn append(pattern: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
			text: text.into(),
			mode: RuleMode::Append,
		}
	}
}

/// One segment to lift out of the generated input file.
///
/// Segments are matched strictly in declaration order by a single forward
/// pass: the extractor never backtracks to an earlier segment, so the order
/// here must follow the order the markers appear in the generated file.
///
/// `lead_trim` counts lines discarded from the start boundary onwards before
/// capturing begins — the boundary line itself is the first line the count
/// consumes, so a `lead_trim` of zero captures the boundary line (the
/// `INCLUDES` segment of the built-in plan relies on this to keep its first
/// `#include`). `trail_trim` pops already-captured lines once the end
/// boundary is reached, after rules have been applied, clamped to the number
/// of lines actually captured. The two counts are deliberately independent
/// knobs: one is a pre-capture skip, the other a post-capture trim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentSpec {
	pub start: MarkerMatcher,
	pub end: MarkerMatcher,
	pub lead_trim: usize,
	pub trail_trim: usize,
	pub rules: Vec<RewriteRule>,
	/// File whose managed region receives this segment's captured block.
	pub target: PathBuf,
	/// Identifier naming the sentinel pair `AUTOGEN_START_<tag>` /
	/// `AUTOGEN_END_<tag>` in the target file. Must be unique per target.
	pub tag: String,
}

impl SegmentSpec {
	pub fn new(
		start: MarkerMatcher,
		end: MarkerMatcher,
		target: impl Into<PathBuf>,
		tag: impl Into<String>,
	) -> Self {
		Self {
			start,
			end,
			lead_trim: 0,
			trail_trim: 0,
			rules: Vec::new(),
			target: target.into(),
			tag: tag.into(),
		}
	}

	pub fn with_trims(mut self, lead_trim: usize, trail_trim: usize) -> Self {
		self.lead_trim = lead_trim;
		self.trail_trim = trail_trim;
		self
	}

	pub fn with_rules(mut self, rules: Vec<RewriteRule>) -> Self {
		self.rules = rules;
		self
	}
}
