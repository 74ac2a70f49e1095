use clap::Parser;
use log::error;
use rscsig::cli::Cli;
use std::process::exit;

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli.run(&mut stdout) {
        error!("{e}");
        exit(1);
    }
}
