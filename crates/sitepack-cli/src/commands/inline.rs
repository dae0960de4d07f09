//! Implementation of the `sitepack inline` command.

use tracing::instrument;

use sitepack_adapters::LocalFilesystem;
use sitepack_core::application::{InlineReport, InlineService};

use crate::{
    cli::{GlobalArgs, InlineArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: InlineArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut layout = config.to_layout(global.root_dir());
    if let Some(dist) = args.dist {
        layout = layout.with_dist_dir(dist);
    }
    if let Some(name) = args.output {
        layout = layout.with_output_file(name);
    }

    let service = InlineService::new(Box::new(LocalFilesystem::new()));
    let report = service
        .inline(&layout)
        .with_cli_context(|| "inlining build output")?;

    print_report(&report, &output)?;
    Ok(())
}

fn print_report(report: &InlineReport, output: &OutputManager) -> std::io::Result<()> {
    for missing in &report.missing_assets {
        output.warning(&format!("Asset not found: {}", missing.display()))?;
    }

    output.success(&format!(
        "Created {} ({:.2} KB)",
        report.output_path.display(),
        report.bytes_written as f64 / 1024.0
    ))?;
    output.print(&format!(
        "  {} scripts and {} stylesheets inlined",
        report.scripts_inlined, report.stylesheets_inlined
    ))?;
    output.info("You can now open the page in a browser")
}
