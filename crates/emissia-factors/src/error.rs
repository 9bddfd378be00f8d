// SPDX-License-Identifier: Apache-2.0

use emissia_model::SourceCategory;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Raised while loading factor documents. Fatal to startup; never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    pub category: Option<SourceCategory>,
    pub path: Option<PathBuf>,
    pub message: String,
}

impl ConfigurationError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            category: None,
            path: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn for_category(category: SourceCategory, message: impl Into<String>) -> Self {
        Self {
            category: Some(category),
            path: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn at_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "factor configuration error")?;
        if let Some(category) = self.category {
            write!(f, " [{category}]")?;
        }
        if let Some(path) = &self.path {
            write!(f, " ({})", path.display())?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ConfigurationError {}
