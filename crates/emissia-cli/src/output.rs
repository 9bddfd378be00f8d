// SPDX-License-Identifier: Apache-2.0

use emissia_core::{canonical, ExitCode, MachineError};
use emissia_factors::ConfigurationError;
use emissia_model::UnsupportedCategoryError;
use serde_json::Value;

#[derive(Clone, Copy)]
pub(crate) struct OutputMode {
    pub(crate) json: bool,
}

#[derive(Debug)]
pub(crate) struct CliError {
    pub(crate) exit_code: ExitCode,
    pub(crate) machine: MachineError,
}

impl CliError {
    pub(crate) fn usage(message: &str) -> Self {
        Self {
            exit_code: ExitCode::Usage,
            machine: MachineError::new("usage_error", message),
        }
    }

    pub(crate) fn validation(message: String) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            machine: MachineError::new("validation_error", &message),
        }
    }

    pub(crate) fn internal(message: String) -> Self {
        Self {
            exit_code: ExitCode::Internal,
            machine: MachineError::new("internal_error", &message),
        }
    }
}

impl From<ConfigurationError> for CliError {
    fn from(err: ConfigurationError) -> Self {
        let mut machine = MachineError::new("configuration_error", &err.to_string());
        if let Some(category) = err.category {
            machine = machine.with_detail("category", category.as_str());
        }
        if let Some(path) = &err.path {
            machine = machine.with_detail("path", &path.display().to_string());
        }
        Self {
            exit_code: ExitCode::DependencyFailure,
            machine,
        }
    }
}

impl From<UnsupportedCategoryError> for CliError {
    fn from(err: UnsupportedCategoryError) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            machine: MachineError::new("unsupported_category", &err.to_string())
                .with_detail("bill_type", err.bill_type()),
        }
    }
}

fn internal(err: impl std::fmt::Display) -> CliError {
    CliError::internal(err.to_string())
}

/// Canonical compact JSON in `--json` mode, pretty JSON otherwise.
pub(crate) fn emit_ok(output_mode: OutputMode, payload: Value) -> Result<(), CliError> {
    let text = if output_mode.json {
        let bytes = canonical::canonical_json_bytes(&payload).map_err(internal)?;
        String::from_utf8(bytes).map_err(internal)?
    } else {
        serde_json::to_string_pretty(&payload).map_err(internal)?
    };
    println!("{text}");
    Ok(())
}

pub(crate) fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal_error\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("{}", error.machine);
    }
}
