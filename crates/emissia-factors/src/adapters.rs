// SPDX-License-Identifier: Apache-2.0

use emissia_model::SourceCategory;
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::database::FactorDatabase;
use crate::defaults::MAX_DOCUMENT_BYTES;
use crate::error::ConfigurationError;

#[must_use]
pub fn category_document_path(dir: &Path, category: SourceCategory) -> PathBuf {
    dir.join(category.document_file_name())
}

/// Loads every category document found in `dir`.
///
/// A missing category file is logged and skipped. An unreadable directory or
/// a malformed document fails the whole load.
pub fn load_factor_database(dir: &Path) -> Result<FactorDatabase, ConfigurationError> {
    let meta = fs::metadata(dir).map_err(|e| {
        ConfigurationError::new(format!("read factor directory failed: {e}")).at_path(dir)
    })?;
    if !meta.is_dir() {
        return Err(ConfigurationError::new("factor path is not a directory").at_path(dir));
    }
    debug!(dir = %dir.display(), "loading emission factor documents");

    let mut db = FactorDatabase::empty();
    for category in SourceCategory::ALL {
        let path = category_document_path(dir, category);
        let Some(raw) = read_document(category, &path)? else {
            warn!(
                category = category.as_str(),
                path = %path.display(),
                "factor document missing; category uses engine defaults"
            );
            continue;
        };
        db.insert_document(category, &raw)
            .map_err(|e| e.at_path(&path))?;
        info!(
            category = category.as_str(),
            path = %path.display(),
            entries = db.entry_count(category),
            "loaded emission factor document"
        );
    }
    Ok(db)
}

fn read_document(
    category: SourceCategory,
    path: &Path,
) -> Result<Option<String>, ConfigurationError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigurationError::for_category(
                category,
                format!("open factor document failed: {e}"),
            )
            .at_path(path));
        }
    };
    let mut raw = String::new();
    let read = file
        .take(MAX_DOCUMENT_BYTES + 1)
        .read_to_string(&mut raw)
        .map_err(|e| {
            ConfigurationError::for_category(category, format!("read factor document failed: {e}"))
                .at_path(path)
        })?;
    if read as u64 > MAX_DOCUMENT_BYTES {
        return Err(ConfigurationError::for_category(
            category,
            format!("factor document exceeds {MAX_DOCUMENT_BYTES} bytes"),
        )
        .at_path(path));
    }
    Ok(Some(raw))
}
