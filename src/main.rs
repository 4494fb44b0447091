use std::process::ExitCode;

fn main() -> ExitCode {
    spektral::cli::run()
}
