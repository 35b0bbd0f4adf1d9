//! CFML CLI - Command-line interface for reading and editing CFML message logs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

use commands::{add, check, delete, edit, fmt, list, search};

#[derive(Parser)]
#[command(name = "cfml")]
#[command(about = "Read, search and edit CFML message logs")]
struct Cli {
    /// Path to the CFML file
    #[arg(short, long, env = "CFML_FILE")]
    file: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the file and report block and message counts
    Check,
    /// Print the canonical form of the file
    Fmt {
        /// Rewrite the file in place instead of printing
        #[arg(long)]
        write: bool,
    },
    /// List dates in file order
    Dates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the messages of one date with their indices
    Show {
        /// Date label
        date: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a message, creating the date block if needed
    Add {
        /// Date label
        #[arg(long)]
        date: String,
        /// Time, HH:MM:SS
        #[arg(long)]
        time: String,
        /// Receiving party
        #[arg(long)]
        receiver: String,
        /// Sending party
        #[arg(long)]
        sender: String,
        /// Message body
        #[arg(long)]
        content: String,
    },
    /// Delete one message, or a whole date when no index is given
    Delete {
        /// Date label
        date: String,
        /// Message index within the date
        #[arg(long)]
        index: Option<usize>,
    },
    /// Overwrite fields of one message
    Edit {
        /// Date label
        date: String,
        /// Message index within the date
        index: usize,
        /// Field assignment, e.g. `content=hello` (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE", required = true)]
        assignments: Vec<String>,
    },
    /// Search all messages; every given filter must match
    Search {
        /// Exact sender
        #[arg(long)]
        sender: Option<String>,
        /// Exact receiver
        #[arg(long)]
        receiver: Option<String>,
        /// Substring of the content
        #[arg(long)]
        text: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let file = cli.file;

    let result = match cli.command {
        Commands::Check => check::run(&file),
        Commands::Fmt { write } => fmt::run(&file, write),
        Commands::Dates { json } => list::dates(&file, json),
        Commands::Show { date, json } => list::show(&file, &date, json),
        Commands::Add {
            date,
            time,
            receiver,
            sender,
            content,
        } => add::run(&file, &date, &time, &receiver, &sender, &content),
        Commands::Delete { date, index } => delete::run(&file, &date, index),
        Commands::Edit {
            date,
            index,
            assignments,
        } => edit::run(&file, &date, index, &assignments),
        Commands::Search {
            sender,
            receiver,
            text,
            json,
        } => search::run(&file, sender, receiver, text, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
