use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;
mod storage;

use cli::{Cli, Commands};
use commands::{CommandResult, account, favorites, recipes};
use storage::StateFile;

fn main() -> CommandResult {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("flavorbook=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let state = StateFile::load(&cli.data_file)?;
    let mut book = state.open()?;
    let read_only = cli.command.is_read_only();
    let format = cli.format;

    match cli.command {
        Commands::Signup(args) => account::signup(&mut book, &args, format)?,
        Commands::Login(args) => account::login(&mut book, &args, format)?,
        Commands::Logout => account::logout(&mut book, format)?,
        Commands::Whoami => account::whoami(&book, format)?,
        Commands::Profile => account::profile(&book, format)?,
        Commands::Add(args) => recipes::add(&mut book, args, format)?,
        Commands::List(args) => recipes::list(&book, &args, format)?,
        Commands::Show(args) => recipes::show(&book, &args, format)?,
        Commands::Categories => recipes::categories(&book, format)?,
        Commands::Edit(args) => recipes::edit(&mut book, &args, format)?,
        Commands::Delete(args) => recipes::delete(&mut book, &args, format)?,
        Commands::Favorite(args) => favorites::toggle(&mut book, &args, format)?,
        Commands::Favorites => favorites::list(&book, format)?,
    }

    if !read_only {
        state.save()?;
        tracing::debug!(path = %cli.data_file.display(), "Saved state file");
    }
    Ok(())
}
