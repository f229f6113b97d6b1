use tracing_subscriber::EnvFilter;
use uisplice_core::compute_updates;
use uisplice_core::plan::builtin_plan;
use uisplice_core::write_updates;

/// Run the built-in plan once: extract every segment from the generated
/// form file and refresh the managed regions of the plugin sources. Invoked
/// by the build with no arguments; warnings and errors go to stderr, and
/// the first per-target error fails the run after everything has been
/// reported.
fn main() -> miette::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let plan = builtin_plan();
	let outcome = compute_updates(&plan)?;

	for warning in &outcome.warnings {
		eprintln!("warning: {warning}");
	}
	for error in &outcome.errors {
		eprintln!("error: {error}");
	}

	write_updates(&outcome)?;
	tracing::debug!(
		spliced = outcome.spliced_count,
		files = outcome.updated_files.len(),
		"splice complete"
	);

	if let Some(error) = outcome.errors.into_iter().next() {
		return Err(error.into());
	}
	Ok(())
}
