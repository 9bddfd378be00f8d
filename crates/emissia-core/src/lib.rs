// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

pub const CRATE_NAME: &str = "emissia-core";

pub const ENV_EMISSIA_LOG_LEVEL: &str = "EMISSIA_LOG_LEVEL";
pub const ENV_EMISSIA_LOG_JSON: &str = "EMISSIA_LOG_JSON";
pub const ENV_EMISSIA_FACTORS_DIR: &str = "EMISSIA_FACTORS_DIR";

/// Factor directory used when neither a flag nor the environment names one.
pub const DEFAULT_FACTORS_DIR: &str = "data/emission-factors";

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Usage = 2,
    Validation = 3,
    DependencyFailure = 4,
    Internal = 10,
}

impl ExitCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Usage => "usage",
            Self::Validation => "validation",
            Self::DependencyFailure => "dependency_failure",
            Self::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineError {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl MachineError {
    #[must_use]
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.details.insert(key.to_string(), value.to_string());
        self
    }
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for MachineError {}

/// Picks the factor directory: explicit path, then `EMISSIA_FACTORS_DIR`,
/// then [`DEFAULT_FACTORS_DIR`].
#[must_use]
pub fn resolve_factors_dir(explicit: Option<&Path>) -> PathBuf {
    resolve_factors_dir_with(explicit, std::env::var(ENV_EMISSIA_FACTORS_DIR).ok())
}

#[must_use]
pub fn resolve_factors_dir_with(explicit: Option<&Path>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(raw) = env_value {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    PathBuf::from(DEFAULT_FACTORS_DIR)
}

#[must_use]
pub fn parse_env_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| parse_env_bool(&v))
        .unwrap_or(default)
}

/// Canonical JSON and content fingerprints for emission records and CLI
/// payloads.
pub mod canonical {
    use serde::Serialize;
    use serde_json::{Map, Value};
    use sha2::{Digest, Sha256};
    use std::collections::BTreeMap;

    /// Compact JSON with object keys sorted at every depth.
    pub fn canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&sort_object_keys(serde_json::to_value(value)?))
    }

    /// SHA-256 hex over `kind`, a NUL separator, then the canonical JSON of
    /// `value`. Two payloads of different kinds never share a fingerprint even
    /// when their JSON is identical.
    pub fn fingerprint_hex<T: Serialize>(
        kind: &str,
        value: &T,
    ) -> Result<String, serde_json::Error> {
        let bytes = canonical_json_bytes(value)?;
        let digest = Sha256::new()
            .chain_update(kind.as_bytes())
            .chain_update([0u8])
            .chain_update(&bytes)
            .finalize();
        Ok(format!("{digest:x}"))
    }

    fn sort_object_keys(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> = map
                    .into_iter()
                    .map(|(k, v)| (k, sort_object_keys(v)))
                    .collect();
                Value::Object(sorted.into_iter().collect::<Map<String, Value>>())
            }
            Value::Array(items) => Value::Array(items.into_iter().map(sort_object_keys).collect()),
            other => other,
        }
    }
}
