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

//! Fills service page templates with copy from a [`ContentTable`].
//!
//! A template is an ordinary HTML file carrying `{{name}}` placeholders:
//! `{{title}}`, `{{hero_title}}`, `{{hero_desc}}`, `{{about_title}}`,
//! `{{about_p1}}`, `{{about_p2}}` and `{{stats}}`. Values are inserted
//! verbatim, they are already HTML.

use std::{fs, path::Path};

use log::{info, warn};

use crate::{
    content::{ContentTable, PageContent, Stat},
    site_file::{self, SiteFileError},
};

const STAT_INDENT: &str = "                ";

#[must_use]
pub fn render_stat(stat: &Stat) -> String {
    format!(
        r#"{STAT_INDENT}<div class="stat-card">
{STAT_INDENT}    <div class="stat-number">{value}</div>
{STAT_INDENT}    <h3 class="stat-label">{label}</h3>
{STAT_INDENT}    <p class="stat-description">{description}</p>
{STAT_INDENT}</div>"#,
        value = stat.value,
        label = stat.label,
        description = stat.description,
    )
}

#[must_use]
pub fn render_stats(stats: &[Stat]) -> String {
    stats.iter().map(render_stat).collect::<Vec<_>>().join("\n")
}

/// Fills the placeholders in one pass over `template`, so text inserted from
/// `content` is never searched for placeholders itself. Unknown placeholders
/// are left as they are.
#[must_use]
pub fn render_page(template: &str, content: &PageContent) -> String {
    let [about_p1, about_p2] = &content.about_paragraphs;
    let stats = render_stats(&content.stats);

    let mut html = String::with_capacity(template.len() + stats.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };

        let value = match &after[..end] {
            "title" => Some(content.title.as_str()),
            "hero_title" => Some(content.hero_title.as_str()),
            "hero_desc" => Some(content.hero_desc.as_str()),
            "about_title" => Some(content.about_title.as_str()),
            "about_p1" => Some(about_p1.as_str()),
            "about_p2" => Some(about_p2.as_str()),
            "stats" => Some(stats.as_str()),
            _ => None,
        };

        html.push_str(&rest[..start]);
        if let Some(value) = value {
            html.push_str(value);
            rest = &after[end + 2..];
        } else {
            html.push_str("{{");
            rest = after;
        }
    }

    html.push_str(rest);
    html
}

/// Lists every `{{name}}` still present in `text`, in order of appearance.
#[must_use]
pub fn unfilled_placeholders(text: &str) -> Vec<String> {
    let mut placeholders = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };

        let name = &after[..end];
        if !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            placeholders.push(format!("{{{{{name}}}}}"));
        }

        rest = &after[end + 2..];
    }

    placeholders
}

/// Renders every page in `table` into `out_dir`, creating it if needed, and
/// returns how many pages were written.
///
/// # Errors
///
/// If `out_dir` can't be created or a page can't be written.
pub fn render_all(
    template: &str,
    table: &ContentTable,
    out_dir: &Path,
) -> Result<usize, SiteFileError> {
    fs::create_dir_all(out_dir).map_err(|source| SiteFileError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = 0;
    for (page, content) in table.pages() {
        let html = render_page(template, content);

        for placeholder in unfilled_placeholders(&html) {
            warn!("{page}: {placeholder} was not filled");
        }

        let path = out_dir.join(page);
        site_file::write(&path, &html)?;
        info!("rendered: {}", path.display());
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"<title>{{title}} | PRAI Hub</title>
<h1>{{hero_title}}</h1>
<p class="hero-desc">{{hero_desc}}</p>
<h2>{{about_title}}</h2>
<p>{{about_p1}}</p>
<p>{{about_p2}}</p>
<div class="stats-grid">
{{stats}}
</div>
"#;

    #[test]
    fn fills_every_placeholder() {
        let table = ContentTable::default();
        let content = table.get("service-security.html").unwrap();
        let html = render_page(TEMPLATE, content);

        assert!(unfilled_placeholders(&html).is_empty());
        assert!(html.starts_with("<title>AI Security | PRAI Hub</title>"));
        assert!(html.contains(r#"<h1>AI-Powered <span class="gradient-text">Security</span></h1>"#));
        assert!(html.contains("<p>From fraud detection to network security,"));
        assert_eq!(html.matches(r#"<div class="stat-card">"#).count(), 3);
        assert!(html.contains(r#"<div class="stat-number">99.9%</div>"#));
        assert!(html.contains(r#"<h3 class="stat-label">Continuous Learning</h3>"#));
    }

    #[test]
    fn stat_cards_keep_their_order() {
        let stats = [
            Stat::new("1", "One", "First."),
            Stat::new("2", "Two", "Second."),
            Stat::new("3", "Three", "Third."),
        ];
        let html = render_stats(&stats);

        let one = html.find("One").unwrap();
        let two = html.find("Two").unwrap();
        let three = html.find("Three").unwrap();
        assert!(one < two && two < three);
        assert!(!html.ends_with('\n'));
    }

    #[test]
    fn finds_unfilled_placeholders() {
        let text = "{{title}} and {{ not a name }} and {{cta_link}} and {{unterminated";

        assert_eq!(
            unfilled_placeholders(text),
            vec!["{{title}}".to_string(), "{{cta_link}}".to_string()]
        );
    }

    #[test]
    fn inserted_copy_is_not_filled_again() {
        let table = ContentTable::default();
        let mut content = table.get("service-3d.html").unwrap().clone();
        content.title = "Use {{hero_desc}} literally".to_string();

        let html = render_page("<title>{{title}}</title> {{hero_desc}}", &content);

        assert_eq!(
            html,
            "<title>Use {{hero_desc}} literally</title> Immersive 3D visualizations and \
interactive experiences"
        );
    }

    #[test]
    fn stray_braces_before_a_placeholder() {
        let table = ContentTable::default();
        let content = table.get("service-gpt.html").unwrap();

        assert_eq!(render_page("{{ {{title}}", content), "{{ Custom GPTs");
        assert_eq!(render_page("{{title", content), "{{title");
    }

    #[test]
    fn stat_card_markup() {
        assert_eq!(
            render_stat(&Stat::new("24/7", "Always Available", "Never sleeps.")),
            r#"                <div class="stat-card">
                    <div class="stat-number">24/7</div>
                    <h3 class="stat-label">Always Available</h3>
                    <p class="stat-description">Never sleeps.</p>
                </div>"#
        );
    }

    #[test]
    fn leaves_unknown_placeholders_alone() {
        let table = ContentTable::default();
        let content = table.get("service-3d.html").unwrap();
        let html = render_page("{{title}} {{faq}}", content);

        assert_eq!(html, "3D Experiences {{faq}}");
        assert_eq!(unfilled_placeholders(&html), vec!["{{faq}}".to_string()]);
    }
}
