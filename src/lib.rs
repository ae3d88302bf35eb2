//! Maintenance tools for the PRAI Hub agency website.
//!
//! The site is a set of static HTML pages. These tools generate service pages
//! from a table of marketing copy and patch existing pages in place by literal
//! string substitution.
//!
//! ## Binaries
//!
//! * `service-pages` - load, list, dump and render the service page copy
//! * `add-social-icons` - swap the footer contact list for social media icons
//! * `update-service-icons` - replace the placeholder SVG icons on service pages
//!
//! ## Concurrency
//!
//! Files are read and overwritten without locking. Running two tools against
//! the same file at the same time can lose one of the edits.

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

#![deny(clippy::panic)]

pub mod content;
pub mod footer;
pub mod icons;
pub mod render;
pub mod site_file;
pub mod utils;

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 Developers of the praihub-site project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025-2026 Developers of the praihub-site project
Licensed under the AGPLv3"
);
