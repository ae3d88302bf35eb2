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

//! Service-specific SVG icons for the feature cards on the service pages.
//!
//! Each target page has an ordered list of [`IconRule`]s. A rule marks the
//! region to replace with one or two literal markers and carries the new
//! SVG markup. Nothing is parsed, the markers have to match byte for byte.

use std::{collections::BTreeMap, fmt, path::Path};

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::site_file::{self, SiteFileError};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IconRule {
    /// What the new icon shows, only used in log messages.
    pub name: String,
    pub old_start: String,
    /// When set, the region runs from the start of `old_start` through the
    /// end of the first `old_end` after it.
    #[serde(default)]
    pub old_end: Option<String>,
    pub new: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuleOutcome {
    Applied,
    StartNotFound,
    EndNotFound,
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => write!(f, "applied"),
            Self::StartNotFound => write!(f, "start marker not found"),
            Self::EndNotFound => write!(f, "end marker not found"),
        }
    }
}

impl IconRule {
    fn new(name: &str, old_start: &str, old_end: Option<&str>, new: &str) -> Self {
        Self {
            name: name.to_string(),
            old_start: old_start.to_string(),
            old_end: old_end.map(ToString::to_string),
            new: new.to_string(),
        }
    }

    /// Replaces the first region this rule marks in `content`. An empty
    /// `old_start` never matches.
    pub fn apply(&self, content: &mut String) -> RuleOutcome {
        if self.old_start.is_empty() {
            return RuleOutcome::StartNotFound;
        }

        let Some(start) = content.find(self.old_start.as_str()) else {
            return RuleOutcome::StartNotFound;
        };
        let mut end = start + self.old_start.len();

        if let Some(old_end) = &self.old_end {
            let Some(offset) = content[end..].find(old_end.as_str()) else {
                return RuleOutcome::EndNotFound;
            };
            end += offset + old_end.len();
        }

        content.replace_range(start..end, &self.new);
        RuleOutcome::Applied
    }
}

/// Applies `rules` in order, each one to the text the previous ones left.
#[must_use]
pub fn apply_rules(content: &str, rules: &[IconRule]) -> (String, Vec<RuleOutcome>) {
    let mut content = content.to_string();
    let outcomes = rules.iter().map(|rule| rule.apply(&mut content)).collect();

    (content, outcomes)
}

/// Applies `rules` to the file at `path`. The file is only written when at
/// least one rule applied.
///
/// # Errors
///
/// If the file can't be read or written.
pub fn update_file(path: &Path, rules: &[IconRule]) -> Result<Vec<RuleOutcome>, SiteFileError> {
    let content = site_file::read(path)?;
    let (updated, outcomes) = apply_rules(&content, rules);

    for (rule, outcome) in rules.iter().zip(&outcomes) {
        if *outcome == RuleOutcome::Applied {
            debug!("{}: {}: {outcome}", path.display(), rule.name);
        } else {
            warn!("{}: {}: {outcome}", path.display(), rule.name);
        }
    }

    if outcomes.contains(&RuleOutcome::Applied) {
        site_file::write(path, &updated)?;
    }

    Ok(outcomes)
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IconReport {
    pub files_updated: usize,
    pub files_unchanged: usize,
    pub files_failed: usize,
    pub rules_applied: usize,
    pub rules_skipped: usize,
}

impl fmt::Display for IconReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} updated, {} unchanged, {} failed; {} icons replaced, {} skipped",
            self.files_updated,
            self.files_unchanged,
            self.files_failed,
            self.rules_applied,
            self.rules_skipped
        )
    }
}

/// Runs every rule in `table` against the pages in `site_dir`. Read and write
/// errors are logged and counted, the remaining files are still processed.
/// Targets that aren't a bare `*.html` name are never opened and count as
/// failed.
#[must_use]
pub fn update_icons(site_dir: &Path, table: &IconTable) -> IconReport {
    let mut report = IconReport::default();

    for (target, rules) in table.targets() {
        if !site_file::is_page_name(target) {
            error!("{}", IconError::InvalidTarget { target: target.clone() });
            report.files_failed += 1;
            continue;
        }

        let path = site_dir.join(target);

        match update_file(&path, rules) {
            Ok(outcomes) => {
                let applied = outcomes
                    .iter()
                    .filter(|outcome| **outcome == RuleOutcome::Applied)
                    .count();

                report.rules_applied += applied;
                report.rules_skipped += outcomes.len() - applied;

                if applied > 0 {
                    info!("updated: {} ({applied} icons)", path.display());
                    report.files_updated += 1;
                } else {
                    warn!(
                        "no icons replaced in {} (might already be updated)",
                        path.display()
                    );
                    report.files_unchanged += 1;
                }
            }
            Err(error) => {
                error!("error updating {}: {error}", path.display());
                report.files_failed += 1;
            }
        }
    }

    report
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum IconError {
    #[error("icons: {target:?} is not an html file name")]
    InvalidTarget { target: String },
    #[error("icons: {target}: {rule} has an empty start marker")]
    EmptyStart { target: String, rule: String },
}

/// Target page file name to the icon rules for that page.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IconTable(pub BTreeMap<String, Vec<IconRule>>);

impl IconTable {
    pub fn targets(&self) -> impl Iterator<Item = (&String, &Vec<IconRule>)> {
        self.0.iter()
    }

    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Returns every problem found, an empty list means the table is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<IconError> {
        let mut errors = Vec::new();

        for (target, rules) in self.targets() {
            if !site_file::is_page_name(target) {
                errors.push(IconError::InvalidTarget {
                    target: target.clone(),
                });
            }

            for rule in rules {
                if rule.old_start.is_empty() {
                    errors.push(IconError::EmptyStart {
                        target: target.clone(),
                        rule: rule.name.clone(),
                    });
                }
            }
        }

        errors
    }
}

impl Default for IconTable {
    fn default() -> Self {
        let websites = vec![
            IconRule::new(
                "AI personalization",
                r#"<path d="M24 10L14 28H34L24 10Z" fill="white" />"#,
                None,
                r#"<!-- Brain/AI personalization icon -->
                            <circle cx="24" cy="20" r="10" fill="none" stroke="white" stroke-width="2" />
                            <path d="M18 18C18 18 20 16 24 16C28 16 30 18 30 18" stroke="white" stroke-width="2" fill="none" />
                            <circle cx="20" cy="20" r="1.5" fill="white" />
                            <circle cx="28" cy="20" r="1.5" fill="white" />
                            <path d="M20 24L24 26L28 24" stroke="white" stroke-width="2" stroke-linecap="round" />"#,
            ),
            IconRule::new(
                "premium design",
                r#"<path
                                d="M24 8L18 14L12 12L10 18L4 20L6 26L4 32L10 34L12 40L18 38L24 44L30 38L36 40L38 34L44 32L42 26L44 20L38 18L36 12L30 14L24 8Z""#,
                Some(r#"fill="white" />"#),
                r#"<!-- Design/palette icon -->
                            <circle cx="18" cy="24" r="12" fill="none" stroke="white" stroke-width="2" />
                            <circle cx="18" cy="20" r="2" fill="white" />
                            <circle cx="22" cy="26" r="2" fill="white" />
                            <circle cx="14" cy="26" r="2" fill="white" />
                            <circle cx="32" cy="18" r="3" fill="white" />"#,
            ),
            IconRule::new(
                "SEO",
                r#"<circle cx="16" cy="18" r="6" fill="white" />"#,
                Some(r#"stroke="white" stroke-width="3" fill="none" />"#),
                r#"<!-- SEO/search icon -->
                            <circle cx="20" cy="20" r="8" fill="none" stroke="white" stroke-width="2.5" />
                            <path d="M26 26L32 32" stroke="white" stroke-width="2.5" stroke-linecap="round" />
                            <path d="M20 16V24M16 20H24" stroke="white" stroke-width="2" stroke-linecap="round" />"#,
            ),
            IconRule::new(
                "lightning fast",
                r#"<rect x="10" y="28" width="6" height="12" fill="white" />"#,
                Some(r#"<rect x="32" y="12" width="6" height="28" fill="white" />"#),
                r#"<!-- Lightning bolt icon -->
                            <path d="M26 10L16 24H24L22 38L32 24H24L26 10Z" fill="white" />"#,
            ),
            IconRule::new(
                "secure",
                r#"<rect x="14" y="20" width="20" height="16" rx="2" fill="white" />"#,
                Some(r#"<circle cx="24" cy="28" r="2" fill="url(#grad-secure)" />"#),
                r#"<!-- Shield with checkmark -->
                            <path d="M24 8L14 12V20C14 27 18 32 24 36C30 32 34 27 34 20V12L24 8Z" fill="white" />
                            <path d="M19 22L22 25L29 18" stroke="url(#grad-secure)" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round" />"#,
            ),
        ];

        Self(BTreeMap::from([(
            "service-websites.html".to_string(),
            websites,
        )]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(old_start: &str, old_end: Option<&str>, new: &str) -> IconRule {
        IconRule::new("test", old_start, old_end, new)
    }

    #[test]
    fn start_only_replaces_the_marker() {
        let mut content = "<svg><a /><b /></svg>".to_string();
        let outcome = rule("<a />", None, "<c />").apply(&mut content);

        assert_eq!(outcome, RuleOutcome::Applied);
        assert_eq!(content, "<svg><c /><b /></svg>");
    }

    #[test]
    fn end_marker_bounds_the_region() {
        let mut content = "<svg>\n  <a />\n  <b />\n  <c />\n</svg>".to_string();
        let outcome = rule("<a />", Some("<c />"), "<d />").apply(&mut content);

        assert_eq!(outcome, RuleOutcome::Applied);
        assert_eq!(content, "<svg>\n  <d />\n</svg>");
    }

    #[test]
    fn end_marker_must_follow_the_start() {
        let mut content = "<c /><a /><b />".to_string();
        let outcome = rule("<a />", Some("<c />"), "<d />").apply(&mut content);

        assert_eq!(outcome, RuleOutcome::EndNotFound);
        assert_eq!(content, "<c /><a /><b />");
    }

    #[test]
    fn only_the_first_region_is_replaced() {
        let mut content = "<a /><a />".to_string();
        rule("<a />", None, "<b />").apply(&mut content);

        assert_eq!(content, "<b /><a />");
    }

    #[test]
    fn empty_start_never_matches() {
        let mut content = "<a />".to_string();

        assert_eq!(
            rule("", None, "<b />").apply(&mut content),
            RuleOutcome::StartNotFound
        );
        assert_eq!(content, "<a />");
    }

    #[test]
    fn rules_apply_in_order() {
        let rules = [
            rule("<a />", None, "<b />"),
            rule("<b />", None, "<c />"),
            rule("<z />", None, "<y />"),
        ];
        let (content, outcomes) = apply_rules("<a />", &rules);

        assert_eq!(content, "<c />");
        assert_eq!(
            outcomes,
            vec![
                RuleOutcome::Applied,
                RuleOutcome::Applied,
                RuleOutcome::StartNotFound
            ]
        );
    }

    #[test]
    fn built_in_table() {
        let table = IconTable::default();
        let targets: Vec<_> = table.targets().map(|(target, _)| target.as_str()).collect();

        assert_eq!(targets, vec!["service-websites.html"]);
        assert_eq!(table.rule_count(), 5);

        for (_, rules) in table.targets() {
            for rule in rules {
                assert!(!rule.old_start.is_empty());
                assert!(rule.new.starts_with("<!-- "));
            }
        }
    }

    #[test]
    fn built_in_rules_replace_the_placeholder_icons() {
        let card = |icon: &str| {
            format!(
                "                        <svg width=\"48\" height=\"48\" viewBox=\"0 0 48 48\" fill=\"none\">\n                            {icon}\n                        </svg>\n"
            )
        };
        let page = [
            card(r#"<path d="M24 10L14 28H34L24 10Z" fill="white" />"#),
            card(
                r#"<path
                                d="M24 8L18 14L12 12L10 18L4 20L6 26L4 32L10 34L12 40L18 38L24 44L30 38L36 40L38 34L44 32L42 26L44 20L38 18L36 12L30 14L24 8Z"
                                fill="white" />"#,
            ),
            card(
                r#"<circle cx="16" cy="18" r="6" fill="white" />
                            <path d="M20 22L30 32" stroke="white" stroke-width="3" fill="none" />"#,
            ),
            card(
                r#"<rect x="10" y="28" width="6" height="12" fill="white" />
                            <rect x="21" y="20" width="6" height="20" fill="white" />
                            <rect x="32" y="12" width="6" height="28" fill="white" />"#,
            ),
            card(
                r##"<rect x="14" y="20" width="20" height="16" rx="2" fill="white" />
                            <path d="M18 20V16C18 12.7 20.7 10 24 10C27.3 10 30 12.7 30 16V20" stroke="white" stroke-width="3" fill="none" />
                            <circle cx="24" cy="28" r="2" fill="url(#grad-secure)" />"##,
            ),
        ]
        .concat();

        let table = IconTable::default();
        let (updated, outcomes) = apply_rules(&page, &table.0["service-websites.html"]);

        assert_eq!(outcomes, vec![RuleOutcome::Applied; 5]);
        assert!(updated.contains("<!-- Brain/AI personalization icon -->"));
        assert!(updated.contains("<!-- Design/palette icon -->"));
        assert!(updated.contains("<!-- SEO/search icon -->"));
        assert!(updated.contains("<!-- Lightning bolt icon -->"));
        assert!(updated.contains("<!-- Shield with checkmark -->"));
        assert!(!updated.contains("M24 8L18 14"));
        assert!(!updated.contains(r#"<rect x="21" y="20""#));
        assert!(!updated.contains(r#"<path d="M20 22L30 32""#));
        assert!(!updated.contains("M18 20V16C18"));
        assert_eq!(updated.matches("<svg ").count(), 5);
        assert_eq!(updated.matches("</svg>").count(), 5);

        // Every line is a whole element, nothing is left of a replaced one.
        for line in updated.lines() {
            let line = line.trim();
            assert!(line.starts_with('<') && line.ends_with('>'), "{line}");
        }

        let (again, outcomes) = apply_rules(&updated, &table.0["service-websites.html"]);
        assert_eq!(again, updated);
        assert!(!outcomes.contains(&RuleOutcome::Applied));
    }

    #[test]
    fn targets_must_be_html_file_names() {
        let rule = rule("<a />", None, "<b />");
        let table = IconTable(BTreeMap::from([
            ("../index.html".to_string(), vec![rule.clone()]),
            ("service-gpt.html".to_string(), vec![rule.clone()]),
            (
                "service-3d.html".to_string(),
                vec![IconRule::new("blank", "", None, "<b />")],
            ),
        ]));

        assert_eq!(
            table.validate(),
            vec![
                IconError::InvalidTarget {
                    target: "../index.html".to_string()
                },
                IconError::EmptyStart {
                    target: "service-3d.html".to_string(),
                    rule: "blank".to_string()
                },
            ]
        );
        assert!(IconTable::default().validate().is_empty());
    }

    #[test]
    fn loads_from_ron() -> anyhow::Result<()> {
        let ron = r#"({
    "service-gpt.html": [
        (name: "chat", old_start: "<a />", new: "<!-- Chat -->"),
        (name: "speed", old_start: "<b />", old_end: Some("<c />"), new: "<!-- Speed -->"),
    ],
})"#;

        let table: IconTable = ron::from_str(ron)?;
        let rules = &table.0["service-gpt.html"];

        assert_eq!(table.rule_count(), 2);
        assert_eq!(rules[0].old_end, None);
        assert_eq!(rules[1].old_end.as_deref(), Some("<c />"));

        Ok(())
    }
}
