use std::{fs, process::ExitCode};

use ban::{Config, run};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// ban runs scripts written in a small Armenian-keyword language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as a path to a script file instead of the script itself.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream and the parsed statements before running.
    #[arg(short, long, env = "BAN_DEBUG")]
    debug: bool,

    contents: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();
    let config = Config::default().with_debug(args.debug);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if let Err(e) = run(&script, &config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
