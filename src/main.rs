use std::process::ExitCode;

use luhncheck::cli::{self, ERROR_EXIT_CODE};
use luhncheck::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
