//! `sitepack config`: show the effective configuration.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    root: &Path,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.raw(&render(&config)?)?;
        }

        ConfigCommands::Path => match AppConfig::active_config_path(root, config_file) {
            Some(path) => output.raw(&path.display().to_string())?,
            None => output.warning("No configuration directory available on this platform")?,
        },
    }

    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_has_every_section() {
        let text = render(&AppConfig::default()).unwrap();
        assert!(text.contains("[layout]"));
        assert!(text.contains("[build]"));
        assert!(text.contains("[output]"));
        assert!(text.contains("output_file = \"standalone.html\""));
        assert!(text.contains("mode = \"instructions\""));
    }

    #[test]
    fn rendered_config_loads_back() {
        let text = render(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
