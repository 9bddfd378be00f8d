#![forbid(unsafe_code)]

use std::process::ExitCode as ProcessExitCode;

fn main() -> ProcessExitCode {
    emissia_cli::main_entry()
}
