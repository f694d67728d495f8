use std::process::ExitCode;

use abdera_ucd_prepare::cli::{self, Args};
use clap::Parser;

fn main() -> ExitCode
{
    let args = Args::parse();

    let _guard = cli::init_global_subscriber(args.log);

    let stdout = std::io::stdout();

    match cli::run(args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(fatal = true, "{:#}", e);
            ExitCode::FAILURE
        }
    }
}
