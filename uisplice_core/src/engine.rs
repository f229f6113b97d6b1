use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::SpliceError;
use crate::SpliceResult;
use crate::extractor::ExtractWarning;
use crate::extractor::extract_segments;
use crate::segment::SegmentSpec;
use crate::splicer::splice_region;

/// The whole job: one generated input file and the ordered segment specs
/// lifted out of it. Built in-process before any file I/O and never mutated.
#[derive(Debug, Clone)]
pub struct SplicePlan {
	/// The machine-generated source file the segments are extracted from.
	pub input: PathBuf,
	/// Segment specs in the order their start markers appear in the input.
	pub specs: Vec<SegmentSpec>,
}

/// Result of computing updates for every target file in a plan.
///
/// Sentinel problems in individual target files are collected in `errors`
/// instead of aborting, so one run reports every broken target at once; a
/// file that errored contributes nothing to `updated_files`.
#[derive(Debug)]
pub struct UpdateOutcome {
	/// New full content per target file, ready to be written back.
	pub updated_files: HashMap<PathBuf, String>,
	/// Number of managed regions that were spliced.
	pub spliced_count: usize,
	/// Non-fatal extraction problems (markers that never matched).
	pub warnings: Vec<ExtractWarning>,
	/// Per-target failures: unreadable files or broken sentinel pairs.
	pub errors: Vec<SpliceError>,
}

impl UpdateOutcome {
	/// Returns true if every target was computed without error.
	pub fn is_ok(&self) -> bool {
		self.errors.is_empty()
	}
}

/// A target file whose on-disk content differs from the computed splice.
#[derive(Debug)]
pub struct StaleTarget {
	pub file: PathBuf,
	/// Tags of the managed regions in this file.
	pub tags: Vec<String>,
}

/// Result of checking targets against the computed splices without writing.
#[derive(Debug)]
pub struct CheckOutcome {
	pub stale: Vec<StaleTarget>,
	pub warnings: Vec<ExtractWarning>,
	pub errors: Vec<SpliceError>,
}

impl CheckOutcome {
	/// Returns true if every target is up to date and no errors occurred.
	pub fn is_ok(&self) -> bool {
		self.stale.is_empty() && self.errors.is_empty()
	}
}

/// Read the generated input, extract every segment, and compute the new
/// content of every target file. Nothing is written; pair with
/// [`write_updates`].
///
/// Returns `Err` only when the generated input itself cannot be read —
/// without it no output can be correct. Per-target problems (unreadable
/// file, missing sentinel) land in [`UpdateOutcome::errors`] and processing
/// continues with the remaining targets. Specs sharing a target file are
/// applied in declared order against the staged in-memory content, so later
/// splices compose with earlier ones and the file is written once.
pub fn compute_updates(plan: &SplicePlan) -> SpliceResult<UpdateOutcome> {
	let input = read(&plan.input)?;
	let extraction = extract_segments(&input, &plan.specs);

	let mut updated_files: HashMap<PathBuf, String> = HashMap::new();
	let mut failed: HashSet<PathBuf> = HashSet::new();
	let mut errors = Vec::new();
	let mut spliced_count = 0;

	for (spec, block) in plan.specs.iter().zip(&extraction.blocks) {
		if failed.contains(&spec.target) {
			continue;
		}

		let current = if let Some(content) = updated_files.get(&spec.target) {
			content.clone()
		} else {
			match read(&spec.target) {
				Ok(content) => content,
				Err(err) => {
					errors.push(err);
					failed.insert(spec.target.clone());
					continue;
				}
			}
		};

		match splice_region(&current, &spec.tag, block, &spec.target) {
			Ok(spliced) => {
				spliced_count += 1;
				updated_files.insert(spec.target.clone(), spliced);
			}
			Err(err) => {
				// A broken sentinel pair makes the whole file suspect; drop
				// any splice already staged for it rather than writing a
				// partial result.
				errors.push(err);
				updated_files.remove(&spec.target);
				failed.insert(spec.target.clone());
			}
		}
	}

	Ok(UpdateOutcome {
		updated_files,
		spliced_count,
		warnings: extraction.warnings,
		errors,
	})
}

/// Compute updates and report which target files are out of date on disk,
/// without writing anything.
pub fn check_targets(plan: &SplicePlan) -> SpliceResult<CheckOutcome> {
	let outcome = compute_updates(plan)?;
	let mut stale = Vec::new();

	for (file, expected) in &outcome.updated_files {
		let current = read(file)?;
		if current != *expected {
			let tags = plan
				.specs
				.iter()
				.filter(|spec| &spec.target == file)
				.map(|spec| spec.tag.clone())
				.collect();
			stale.push(StaleTarget {
				file: file.clone(),
				tags,
			});
		}
	}
	stale.sort_by(|a, b| a.file.cmp(&b.file));

	Ok(CheckOutcome {
		stale,
		warnings: outcome.warnings,
		errors: outcome.errors,
	})
}

/// Write the computed contents back to disk, one whole-file write per
/// target. A failed write aborts immediately; earlier writes stay committed
/// (there is no transaction across target files).
pub fn write_updates(outcome: &UpdateOutcome) -> SpliceResult<()> {
	for (path, content) in &outcome.updated_files {
		fs::write(path, content).map_err(|source| {
			SpliceError::Write {
				path: path.clone(),
				source,
			}
		})?;
		tracing::debug!(path = %path.display(), "target rewritten");
	}
	Ok(())
}

fn read(path: &Path) -> SpliceResult<String> {
	fs::read_to_string(path).map_err(|source| {
		SpliceError::Read {
			path: path.to_path_buf(),
			source,
		}
	})
}
