use clap::{Arg, Command};
use color_eyre::Result;

use taskman::adapters::{Cli, InMemoryTaskRepository};
use taskman::application::TaskService;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Log to a file so command output stays clean.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("taskman.log")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let matches = Command::new("taskman")
        .version("0.1.0")
        .about("A minimal task tracker")
        .long_about(
            "A minimal task tracker.\n\n\
             Commands:\n  \
             add <text...>    Add a task\n  \
             list             List all tasks\n  \
             complete <id>    Mark a task as completed",
        )
        .arg(
            Arg::new("command")
                .help("Command and its arguments")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
        .get_matches();

    let args: Vec<String> = matches
        .get_many::<String>("command")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let repository = InMemoryTaskRepository::default();
    let service = TaskService::new(Box::new(repository));
    let mut cli = Cli::new(service);

    let stdout = std::io::stdout();
    cli.execute(&args, &mut stdout.lock())?;

    Ok(())
}
