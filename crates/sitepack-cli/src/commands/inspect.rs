//! Implementation of the `sitepack inspect` command.
//!
//! Runs aggregation only: nothing is written.

use serde_json::{Value, json};

use sitepack_adapters::LocalFilesystem;
use sitepack_core::application::{Aggregation, BundleService};

use crate::{
    cli::{GlobalArgs, InspectArgs, InspectFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    args: InspectArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let layout = config.to_layout(global.root_dir());
    let service = BundleService::new(Box::new(LocalFilesystem::new()));
    let aggregation = service
        .aggregate(&layout)
        .with_cli_context(|| "aggregating sources")?;

    match args.format {
        InspectFormat::Table => print_table(&aggregation, &output)?,
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&to_json(&aggregation)).map_err(|e| {
                CliError::IoError {
                    message: format!("Failed to serialise inspect output: {e}"),
                    source: e.into(),
                }
            })?;
            output
                .raw(&json)
                .with_cli_context(|| "writing inspect output")?;
        }
    }

    Ok(())
}

fn print_table(aggregation: &Aggregation, output: &OutputManager) -> std::io::Result<()> {
    let document = &aggregation.document;
    output.header(&format!("Aggregation order ({} sections):", document.len()))?;

    for (index, section) in document.sections().iter().enumerate() {
        output.print(&format!(
            "  {:>3}. {:<16} {}",
            index + 1,
            section.category.as_str(),
            section.label
        ))?;
        for import in &section.imports {
            let line = match &import.binding {
                Some(binding) => format!("         import {binding} from {}", import.specifier),
                None => format!("         import {}", import.specifier),
            };
            output.print(&line)?;
        }
    }

    for failure in &aggregation.failures {
        output.error(&failure.to_string())?;
    }

    output.print(&format!(
        "{} imports across {} sections",
        document.import_count(),
        document.len()
    ))
}

fn to_json(aggregation: &Aggregation) -> Value {
    let sections: Vec<Value> = aggregation
        .document
        .sections()
        .iter()
        .map(|section| {
            json!({
                "category": section.category.as_str(),
                "label": section.label,
                "bytes": section.content.len(),
                "imports": section
                    .imports
                    .iter()
                    .map(|i| json!({ "binding": i.binding, "specifier": i.specifier }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let failures: Vec<Value> = aggregation
        .failures
        .iter()
        .map(|f| json!({ "path": f.path.display().to_string(), "reason": f.reason }))
        .collect();

    json!({ "sections": sections, "failures": failures })
}
