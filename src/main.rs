use api::api::start_server;

use clap::{Parser, Subcommand};

mod api;
mod client;
mod config;
mod errors;
mod models;
mod store;
mod todo_commands;
mod utils;

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(alias = "ls")]
    List,
    #[clap(alias = "c")]
    Create,
    #[clap(alias = "t")]
    Toggle { id: u64 },
    #[clap(alias = "rm")]
    Delete { id: u64 },
}

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = "Manage todos from command line")]
struct TodoArgs {
    #[clap(short = 's', long = "start-server")]
    start_server: bool,

    #[clap(subcommand)]
    command: Option<Commands>,
}

fn main() -> anyhow::Result<()> {
    let args = std::env::args();

    let args = TodoArgs::parse_from(args);

    if args.start_server {
        start_server()?;

        return Ok(());
    }

    match &args.command {
        Some(Commands::List) => {
            if let Err(e) = todo_commands::list_todos() {
                eprintln!("{}", e);
            }
        }
        Some(Commands::Create) => {
            if let Err(e) = todo_commands::create_new_todo() {
                eprintln!("{}", e);
            }
        }
        Some(Commands::Toggle { id }) => {
            if let Err(e) = todo_commands::toggle_todo(*id) {
                eprintln!("{}", e);
            }
        }
        Some(Commands::Delete { id }) => {
            if let Err(e) = todo_commands::delete_todo(*id) {
                eprintln!("{}", e);
            }
        }
        None => {}
    }

    Ok(())
}
