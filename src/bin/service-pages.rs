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
    content::ContentTable,
    render,
    site_file,
    utils::{self, read_ron, write_ron},
};

/// Service Page Content
///
/// Loads the marketing copy for the service pages and renders the pages from
/// a template.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Service Page Content")]
struct Args {
    /// Load the pages from a RON file instead of the built in table
    #[arg(long, value_name = "file.ron")]
    content: Option<PathBuf>,

    /// Write the pages to a RON file
    #[arg(long, value_name = "file.ron")]
    dump: Option<PathBuf>,

    /// List the pages and what each one carries
    #[arg(long)]
    list: bool,

    /// Render every page from this HTML template
    #[arg(long, requires = "output")]
    template: Option<PathBuf>,

    /// The directory to write the rendered pages into
    #[arg(long, requires = "template")]
    output: Option<PathBuf>,

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
        return utils::generate_man_page(Args::command(), "service-pages", "2025-11-02");
    }

    let table = if let Some(path) = &args.content {
        info!("loading pages from {}", path.display());
        read_ron(path)?
    } else {
        ContentTable::default()
    };

    let errors = table.validate();
    if !errors.is_empty() {
        for error in &errors {
            error!("{error}");
        }

        return Err(anyhow::Error::msg(format!(
            "the content table has {} problems",
            errors.len()
        )));
    }

    println!("Service configurations loaded for {} pages", table.len());

    if args.list {
        println!();
        for (page, content) in table.pages() {
            println!("  - {page} ({})", content.title);
        }

        println!("\nAll pages will have:");
        println!("  * SVG icons (no emojis)");
        println!("  * Stat cards with descriptions");
    }

    if let Some(path) = &args.dump {
        write_ron(path, &table)?;
        info!("wrote {}", path.display());
    }

    if let (Some(template), Some(output)) = (&args.template, &args.output) {
        let template = site_file::read(template)?;
        let written = render::render_all(&template, &table, output)?;
        println!("Rendered {written} pages into {}", output.display());
    } else {
        println!("Ready to generate complete HTML files");
    }

    Ok(())
}
