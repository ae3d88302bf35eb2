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

#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use log::{error, info};
use praihub_site::{
    LONG_VERSION,
    icons::{self, IconTable},
    utils::{self, read_ron, write_ron},
};

/// Update Service Icons
///
/// Replaces the placeholder feature icons on the service pages with icons
/// specific to each service. Without --apply only the rule table is loaded
/// and reported.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Update Service Icons")]
struct Args {
    /// Load the icon rules from a RON file instead of the built in table
    #[arg(long, value_name = "file.ron")]
    icons: Option<PathBuf>,

    /// Write the icon rules to a RON file
    #[arg(long, value_name = "file.ron")]
    dump: Option<PathBuf>,

    /// Replace the icons in the target pages
    #[arg(long)]
    apply: bool,

    /// The directory holding the target pages
    #[arg(default_value = ".", long)]
    site_dir: PathBuf,

    /// Whether to log on the debug level
    #[arg(long)]
    debug: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug);

    if args.man {
        return utils::generate_man_page(Args::command(), "update-service-icons", "2025-11-02");
    }

    let table = if let Some(path) = &args.icons {
        info!("loading icon rules from {}", path.display());
        read_ron(path)?
    } else {
        IconTable::default()
    };

    let errors = table.validate();
    if !errors.is_empty() {
        for error in &errors {
            error!("{error}");
        }

        return Err(anyhow::Error::msg(format!(
            "the icon table has {} problems",
            errors.len()
        )));
    }

    let targets: Vec<&str> = table.targets().map(|(target, _)| target.as_str()).collect();
    println!("Icon update definitions created ({} rules)", table.rule_count());
    println!("Services to update: {targets:?}");

    if let Some(path) = &args.dump {
        write_ron(path, &table)?;
        info!("wrote {}", path.display());
    }

    if args.apply {
        let report = icons::update_icons(&args.site_dir, &table);
        println!("{report}");
    }

    Ok(())
}
