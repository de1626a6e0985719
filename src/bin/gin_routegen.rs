use clap::Parser;
use gin_routegen::cli::{run_command, Cli};
use gin_routegen::logging::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with_config(&LogConfig::from_env().verbose(cli.verbose))?;

    if let Err(err) = run_command(&cli.command) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}
