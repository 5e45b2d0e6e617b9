//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "quizzer",
    version,
    about = "Multiple-choice quizzes in the terminal",
    long_about = "Play multiple-choice quizzes in the terminal.\n\n\
                  Quizzes come from the bundled set, a library directory, or any\n\
                  JSON quiz file. Completed attempts are kept in a local history log."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Read settings from this file instead of ~/.quizzer/config.toml.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug detail to the log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play interactively (the default).
    Play {
        /// Start straight into this quiz file.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// List the available quizzes.
    List,

    /// Check quiz files and report the first problem in each.
    Validate {
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },

    /// Show past results, newest first.
    History {
        /// Delete the history log instead.
        #[arg(long)]
        clear: bool,
    },
}

impl Cli {
    /// The subcommand to run, with `play` standing in when none was given.
    pub fn take_command(&mut self) -> Command {
        self.command.take().unwrap_or(Command::Play { file: None })
    }
}
