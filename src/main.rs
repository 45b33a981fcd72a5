use clap::Parser;

use graymat::cli::{handle_config_action, Args, Command};
use graymat::config::Config;
use graymat::pipeline::{self, PipelineOptions};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Some(Command::Config { action }) = args.command {
        if let Err(e) = handle_config_action(action, args.config.as_deref()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let Some(input) = args.input.as_deref() else {
        eprintln!("Error: no input file given.");
        eprintln!("Usage: graymat <INPUT> [OPTIONS]  (see --help)");
        std::process::exit(2);
    };

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let options = match PipelineOptions::resolve(
        input,
        args.output,
        args.ext,
        args.threshold,
        &config,
    ) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Read and conversion failures are fatal; export failures are reported
    // per file and only change the exit status.
    match pipeline::run(&options) {
        Ok(report) => {
            log::info!(
                "Converted {}x{} image, {} file(s) written",
                report.width,
                report.height,
                report.written.len()
            );
            if !report.is_complete() {
                eprintln!("Error: {} output(s) could not be written", report.failed.len());
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
