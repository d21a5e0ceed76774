//! Completions command - generate shell completions

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::CartResult;
use clap::CommandFactory;
use clap_complete::generate;

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> CartResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "minicart", &mut std::io::stdout());
    Ok(())
}
