//! `items`: lists the war rewards.

use crate::error::CliError;
use classwar_engine::items::CATALOG;
use std::io::Write;

pub fn handle_items_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Items awarded to the winner of a war:")?;
    for (i, t) in CATALOG.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<16} {:+}  {}",
            i + 1,
            t.name,
            t.modifier,
            t.description
        )?;
    }
    Ok(())
}
