use clap::Parser;
use monoidal::app::{handle_fatal_error, init_logging, AppConfig};
use monoidal::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    let config = AppConfig::new(cli.verbose).with_config_path(cli.config);
    init_logging(&config);

    match execute_command(cli.command, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => handle_fatal_error(e, cli.verbose),
    }
}
