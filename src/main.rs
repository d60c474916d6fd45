mod io;
mod modes;
mod ptr;

use anyhow::Result;
use std::process::ExitCode;

use crate::io::cli::{self, CommandArgs, OperationMode};

fn main() -> ExitCode {
    let args = cli::get_parsed_args();

    if args.no_color {
        io::logger::disable_color();
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error!(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CommandArgs) -> Result<()> {
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    if args.verbose {
        log_info!(format!("Running in {} mode", args.operation_mode));
    }

    match args.operation_mode {
        OperationMode::Forward => {
            let written = modes::forward::forward(stdin, &mut stdout)?;
            if args.verbose {
                log_success!(format!("Wrote {written} PTR records"));
            }
        }
        OperationMode::Reverse => {
            let summary = modes::reverse::reverse(stdin, &mut stdout, args.verbose)?;
            if args.verbose {
                log_success!(format!(
                    "Wrote {} addresses, skipped {} lines",
                    summary.written, summary.skipped
                ));
            }
        }
    }

    Ok(())
}
