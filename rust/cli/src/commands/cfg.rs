//! `cfg`: prints the resolved configuration as JSON.
//!
//! ```json
//! {
//!   "seed": { "value": null, "source": "default" },
//!   "max_rounds": { "value": 5000, "source": "default" },
//!   "games": { "value": 1, "source": "default" }
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Loads the configuration with source tracking and writes it as pretty JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if the configuration cannot be resolved and
/// `CliError::Io` if writing fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "max_rounds": {
            "value": config.max_rounds,
            "source": sources.max_rounds,
        },
        "games": {
            "value": config.games,
            "source": sources.games,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
