//! Command handlers for the Class War CLI.
//!
//! Each subcommand lives in its own module and follows the same pattern:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and, for `play`, the input stream are
//!   passed in so tests can drive them
//! - Errors propagate through [`CliError`](crate::error::CliError)

pub mod cfg;
pub mod items;
pub mod play;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use items::handle_items_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
