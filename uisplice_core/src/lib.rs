//! `uisplice_core` turns uic-regenerated form boilerplate into
//! plugin-compatible code. It extracts marker-bounded line ranges
//! ("segments") from a generated source file, rewrites them rule by rule,
//! and splices each captured block into the `AUTOGEN_START_<tag>` /
//! `AUTOGEN_END_<tag>` managed region of a hand-maintained target file, so
//! the manual files never need editing when the generator reruns.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Generated input file (ui_form.h)
//!   → Extractor (single forward pass, one captured block per segment spec)
//!   → Splicer (per target file, replaces each managed region in memory)
//!   → write_updates (one whole-file write per changed target)
//! ```
//!
//! ## Key Types
//!
//! - [`SegmentSpec`] — one segment: boundary matchers, trim counts, rewrite
//!   rules, target file, and sentinel tag.
//! - [`RewriteRule`] — a replace/prepend/append rewrite applied to every
//!   captured line of its segment.
//! - [`CapturedBlock`] — the finalized lines produced for one segment.
//! - [`SplicePlan`] — the input file plus the ordered spec list.
//! - [`UpdateOutcome`] / [`CheckOutcome`] — computed file contents, stale
//!   targets, warnings, and per-target errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use uisplice_core::{check_targets, compute_updates, plan, write_updates};
//!
//! let plan = plan::builtin_plan();
//!
//! // Report stale managed regions without touching anything.
//! let check = check_targets(&plan).unwrap();
//! if !check.is_ok() {
//! 	eprintln!("{} stale target(s)", check.stale.len());
//! }
//!
//! // Refresh every managed region.
//! let outcome = compute_updates(&plan).unwrap();
//! write_updates(&outcome).unwrap();
//! ```

pub use engine::*;
pub use error::*;
pub use extractor::*;
pub use segment::*;
pub use splicer::*;

mod engine;
mod error;
mod extractor;
pub mod plan;
mod segment;
mod splicer;
