// This file is part of praihub-site.
//
// praihub-site is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// praihub-site is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Whole-file reads and in-place overwrites of site pages.
//!
//! Writes truncate and rewrite the file. There is no backup and no atomic
//! rename, so a failure part way through a write can leave a truncated page.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteFileError {
    #[error("reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("writing {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Whether `name` is a bare `*.html` file name that stays inside the site
/// directory when joined onto it.
#[must_use]
pub fn is_page_name(name: &str) -> bool {
    name.len() > ".html".len()
        && name.ends_with(".html")
        && !name.starts_with('.')
        && !name.contains(['/', '\\', ':'])
}

/// # Errors
///
/// If the file doesn't exist, can't be opened, or isn't UTF-8.
pub fn read(path: &Path) -> Result<String, SiteFileError> {
    fs::read_to_string(path).map_err(|source| SiteFileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// # Errors
///
/// If the file can't be created or written.
pub fn write(path: &Path, content: &str) -> Result<(), SiteFileError> {
    fs::write(path, content).map_err(|source| SiteFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
