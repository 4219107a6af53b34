mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use festdesk::logging::{self, LogTarget};
use log::info;
use settings::ResolvedConfig;
use workflow::TableWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in festdesk_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if let LogTarget::File(path) = logging::initialize(cli.verbose)? {
		info!("logging to {}", path.display());
	}

	if cli.print_config {
		resolved.print_summary();
	}

	run_table(cli.output, resolved)
}

/// Execute the table workflow and print output in the chosen format.
fn run_table(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let report = TableWorkflow::from_config(settings).run()?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}
