//! Implementation of the `sitepack build` command (also the default).

use tracing::{debug, instrument};

use sitepack_adapters::LocalFilesystem;
use sitepack_core::{
    application::{BuildOptions, BuildReport, BundleService},
    domain::{EmitMode, SourceLayout},
};

use crate::{
    cli::{BuildArgs, GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: BuildArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let (layout, options) = resolve(&args, &global, &config);
    debug!(root = %layout.root().display(), mode = %options.mode, "Resolved build");

    let service = BundleService::new(Box::new(LocalFilesystem::new()));
    let report = service
        .build(&layout, &options)
        .with_cli_context(|| "building standalone page")?;

    print_report(&report, &output)?;
    Ok(())
}

/// Merge command-line overrides over the loaded configuration.
fn resolve(
    args: &BuildArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> (SourceLayout, BuildOptions) {
    let mut layout = config.to_layout(global.root_dir());
    if let Some(name) = &args.output {
        layout = layout.with_output_file(name.as_str());
    }

    let options = BuildOptions {
        mode: args.mode.map(EmitMode::from).unwrap_or(config.build.mode),
        title: args
            .title
            .clone()
            .unwrap_or_else(|| config.build.title.clone()),
    };

    (layout, options)
}

fn print_report(report: &BuildReport, output: &OutputManager) -> std::io::Result<()> {
    for failure in &report.failures {
        output.error(&failure.to_string())?;
    }

    output.success(&format!("Created {}", report.output_path.display()))?;
    output.print(&format!(
        "  {} sections, {} imports, {} bytes ({} mode)",
        report.sections, report.imports, report.bytes_written, report.mode
    ))?;

    if report.mode == EmitMode::Instructions {
        output.info("Note: This is a template. For a truly standalone file, you need to:")?;
        output.print("  1. Build the project with: npm run build")?;
        output.print("  2. Inline the bundled JavaScript from dist/: sitepack inline")?;
    }

    Ok(())
}
