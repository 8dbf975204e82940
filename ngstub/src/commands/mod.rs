mod add;
mod completions;

use add::AddCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;

/// Extension trait for exiting on scaffold errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ngstub_scaffold::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                if let ngstub_scaffold::Error::PartialWrite { messages, .. } = e.as_ref() {
                    for message in messages {
                        eprintln!("warning: {message}");
                    }
                }
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ngstub")]
#[command(version)]
#[command(about = "Scaffold Angular dumb-component stubs")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Add(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a component and its spec into a new folder
    Add(AddCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
