//! luminol binary entry point

use std::process::ExitCode;

use clap::Parser;

use luminol::cli::Cli;
use luminol::diagnostics::DiagnosticSink;
use luminol::engine::{self, RunOptions};
use luminol::error::Result;
use luminol::logger::{self, FileLogger, LogLevel, Logger, StderrLogger};
use luminol::settings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    logger::sweep_stale_logs();

    let min_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let stderr = StderrLogger::new(min_level);

    let mut sink = DiagnosticSink::new();
    let loaded = settings::load(cli.config.as_deref(), &mut sink)?;
    let wallpaper = cli.wallpaper()?;

    let session_dir = logger::session_dir();
    let file_logger = if loaded.global.log_output && !cli.dry_run {
        FileLogger::new(stderr, &session_dir).ok()
    } else {
        None
    };
    let logger: &dyn Logger = file_logger
        .as_ref()
        .map_or(&stderr as &dyn Logger, |teed| teed as &dyn Logger);

    let options = RunOptions {
        wallpaper,
        theme_override: cli.theme,
        quality: cli.quality,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        session_dir,
    };
    engine::run(&options, &loaded, logger, &mut sink)?;

    // recoverable diagnostics surface at the end and elevate the exit code
    let had_warnings = sink.has_warnings();
    for diagnostic in sink.drain() {
        logger.warn(&diagnostic.to_string());
    }
    Ok(if had_warnings { 6 } else { 0 })
}
