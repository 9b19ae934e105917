use std::path::{Path, PathBuf};

use cb_core::{get_output_dir, ContentPackage, Error, Result};
use chrono::NaiveDate;

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Validate the package metadata and resolve `<base>/<date>/<meta.slug>`.
pub(crate) fn package_dir(base: &Path, package: &ContentPackage) -> Result<PathBuf> {
    package.meta.validate()?;
    let date = NaiveDate::parse_from_str(&package.meta.date, "%Y-%m-%d")
        .map_err(|e| Error::Storage(format!("Invalid meta date {:?}: {}", package.meta.date, e)))?;
    Ok(get_output_dir(base, None, date).join(&package.meta.slug))
}
