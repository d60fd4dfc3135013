use std::process::ExitCode;
use clap::Parser;
use contact_webhook::errors::ErrorHandler;
use contact_webhook::structs::cli::Cli;
use contact_webhook::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut runner = CommandRunner::new(cli.config);
    match runner.run_command(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(default_level);

    if cfg!(debug_assertions) {
        env_logger::Builder::from_env(env).init();
    } else {
        env_logger::Builder::from_env(env).format_timestamp(None).init();
    }
}
