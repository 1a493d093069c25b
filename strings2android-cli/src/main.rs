use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use strings2android::convert_localization_files;
use strings2android_cli::{Args, ConsoleReporter, reporter::render_summary};

fn main() -> ExitCode {
    let args = Args::parse();

    let Some((strings_root, android_root)) = args.roots() else {
        // Wrong argument count: show usage and do nothing.
        Args::command().print_help().ok();
        return ExitCode::SUCCESS;
    };

    let mut reporter = ConsoleReporter::new(args.quiet);
    match convert_localization_files(
        strings_root,
        android_root,
        &args.convert_options(),
        &mut reporter,
    ) {
        Ok(summary) => {
            if !args.quiet {
                println!("{}", render_summary(&summary));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
