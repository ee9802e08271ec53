use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

pub fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = output_path {
        let mut file = File::create(path)?;
        write_completions(shell, &mut file)?;
        println!("{}", path.display());
    } else {
        write_completions(shell, &mut io::stdout().lock())?;
    }

    Ok(())
}

pub fn write_completions(shell: CompletionShell, out: &mut dyn Write) -> Result<(), CliError> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut command, bin_name, out),
        CompletionShell::Zsh => generate(shells::Zsh, &mut command, bin_name, out),
        CompletionShell::Fish => generate(shells::Fish, &mut command, bin_name, out),
    }
    out.flush()?;
    Ok(())
}
