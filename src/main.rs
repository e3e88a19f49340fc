use clap::Parser;
use log::error;
use ordered_trees::bench::{self, Config, Format};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::io;
use std::process;

fn run(config: &Config) -> bench::Result<()> {
    let report = bench::run(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.format {
        Format::Text => report.write_text(&mut out),
        Format::Json => report.write_json(&mut out),
    }
}

fn main() {
    let config = Config::parse();

    if let Err(err) = TermLogger::init(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("unable to initialize logging: {}", err);
    }

    if let Err(err) = run(&config) {
        error!("{}", err);
        process::exit(1);
    }
}
