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

use std::{env, fs, io::Write, path::Path};

use chrono::Utc;
use clap::Command;
use env_logger::Builder;
use log::LevelFilter;
use serde::{Serialize, de::DeserializeOwned};

use crate::COPYRIGHT;

pub fn init_logger(debug: bool) {
    let mut builder = Builder::new();

    builder.format(|formatter, record| {
        writeln!(
            formatter,
            "{} [{}] ({}): {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S %z"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if debug {
        builder.filter(None, LevelFilter::Debug);
    } else {
        // if no RUST_LOG provided, default to logging at the Info level
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}

/// Writes `<name>.1` into the working directory.
///
/// # Errors
///
/// If rendering or writing the man page fails.
pub fn generate_man_page(cmd: Command, name: &'static str, date: &str) -> anyhow::Result<()> {
    let mut buffer: Vec<u8> = Vec::default();
    let cmd = cmd.name(name).long_version(None);
    let man = clap_mangen::Man::new(cmd).date(date);

    man.render(&mut buffer)?;
    write!(buffer, "{COPYRIGHT}")?;

    fs::write(format!("{name}.1"), buffer)?;
    Ok(())
}

/// # Errors
///
/// If the file can't be read or isn't valid RON for `T`.
pub fn read_ron<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let string = fs::read_to_string(path)?;
    let value = ron::from_str(&string)
        .map_err(|error| anyhow::Error::msg(format!("{}: {error}", path.display())))?;

    Ok(value)
}

/// # Errors
///
/// If serializing or writing fails.
pub fn write_ron<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let mut string = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())?;
    string.push('\n');
    fs::write(path, string)?;

    Ok(())
}
