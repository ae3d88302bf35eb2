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
use praihub_site::{LONG_VERSION, footer, utils};

/// Add Social Icons
///
/// Replaces the contact list in the footer with social media icons and links
/// the social icons stylesheet. A file is only written when its footer still
/// has the old contact list.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Add Social Icons")]
struct Args {
    /// The HTML files to patch
    #[arg(default_value = "index.html")]
    files: Vec<PathBuf>,

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
        return utils::generate_man_page(Args::command(), "add-social-icons", "2025-11-02");
    }

    println!("Adding social media icons to the footer...\n");

    let mut updated = Vec::new();
    for file in &args.files {
        if footer::patch_footer(file) {
            updated.push(file);
        }
    }

    if updated.len() == args.files.len() {
        println!("\nSocial media icons added successfully!");
        println!("\nNext steps:");
        for file in &updated {
            println!("  Open {} in your browser to see the animated icons", file.display());
        }
        println!("  Replace #linkedin, #twitter, etc. with your actual social media URLs");
    } else {
        println!(
            "\nCould not update {} of {} files. Please check if the footer structure matches.",
            args.files.len() - updated.len(),
            args.files.len()
        );
    }

    Ok(())
}
