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

//! Replaces the footer contact list with a row of social media icons.

use std::{borrow::Cow, path::Path};

use log::{error, info, warn};

use crate::site_file::{self, SiteFileError};

pub const ANIMATIONS_STYLESHEET: &str = r#"<link rel="stylesheet" href="css/animations.css">"#;
pub const SOCIAL_ICONS_STYLESHEET: &str = r#"<link rel="stylesheet" href="css/social-icons.css">"#;
pub const SOCIAL_ICONS_MARKER: &str = "social-icons.css";

pub const CONTACT_BLOCK: &str = r##"                <div class="footer-col">
                    <h4>Contact</h4>
                    <ul>
                        <li><a href="mailto:hello@praihub.com">hello@praihub.com</a></li>
                        <li><a href="#">LinkedIn</a></li>
                        <li><a href="#">Instagram</a></li>
                        <li><a href="#">Twitter</a></li>
                    </ul>
                </div>"##;

pub const SOCIAL_ICONS_BLOCK: &str = r##"                <div class="footer-col">
                    <h4>Connect With Us</h4>
                    <p style="margin-bottom: 15px;"><a href="mailto:hello@praihub.com" style="color: var(--text-muted); text-decoration: none;">hello@praihub.com</a></p>
                    <div class="social-links">
                        <a href="#linkedin" class="social-link" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" title="Follow us on LinkedIn">
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
                                <rect x="2" y="9" width="4" height="12"></rect>
                                <circle cx="4" cy="4" r="2"></circle>
                            </svg>
                        </a>
                        <a href="#twitter" class="social-link" target="_blank" rel="noopener noreferrer" aria-label="Twitter" title="Follow us on Twitter">
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"></path>
                            </svg>
                        </a>
                        <a href="#instagram" class="social-link" target="_blank" rel="noopener noreferrer" aria-label="Instagram" title="Follow us on Instagram">
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect>
                                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
                                <line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line>
                            </svg>
                        </a>
                        <a href="#facebook" class="social-link" target="_blank" rel="noopener noreferrer" aria-label="Facebook" title="Follow us on Facebook">
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path>
                            </svg>
                        </a>
                        <a href="#youtube" class="social-link" target="_blank" rel="noopener noreferrer" aria-label="YouTube" title="Subscribe on YouTube">
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33z"></path>
                                <polygon points="9.75 15.02 15.5 11.75 9.75 8.48 9.75 15.02"></polygon>
                            </svg>
                        </a>
                    </div>
                </div>"##;

/// A literal footer replacement plus the stylesheet the new footer needs.
///
/// Matching is exact: any change in whitespace around the old block makes
/// the patch report [`FooterOutcome::NotFound`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FooterPatch {
    /// The new stylesheet link goes right after this one.
    pub stylesheet_anchor: &'static str,
    pub stylesheet_link: &'static str,
    /// If the page already contains this, the link isn't inserted again.
    pub stylesheet_marker: &'static str,
    pub old_block: &'static str,
    pub new_block: &'static str,
}

impl Default for FooterPatch {
    fn default() -> Self {
        Self {
            stylesheet_anchor: ANIMATIONS_STYLESHEET,
            stylesheet_link: SOCIAL_ICONS_STYLESHEET,
            stylesheet_marker: SOCIAL_ICONS_MARKER,
            old_block: CONTACT_BLOCK,
            new_block: SOCIAL_ICONS_BLOCK,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FooterOutcome {
    /// The old block was replaced. Holds the new page text.
    Patched(String),
    /// The old block isn't in the page: either it was already patched or the
    /// footer changed shape.
    NotFound,
}

impl FooterPatch {
    #[must_use]
    pub fn link_stylesheet<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if content.contains(self.stylesheet_marker) || !content.contains(self.stylesheet_anchor) {
            return Cow::Borrowed(content);
        }

        let linked = format!("{}\n    {}", self.stylesheet_anchor, self.stylesheet_link);
        Cow::Owned(content.replace(self.stylesheet_anchor, &linked))
    }

    #[must_use]
    pub fn apply(&self, content: &str) -> FooterOutcome {
        let content = self.link_stylesheet(content);

        if content.contains(self.old_block) {
            FooterOutcome::Patched(content.replace(self.old_block, self.new_block))
        } else {
            FooterOutcome::NotFound
        }
    }

    /// Applies the patch to the file at `path`, writing it back only when the
    /// old block was found.
    ///
    /// # Errors
    ///
    /// If the file can't be read or written.
    pub fn patch_file(&self, path: &Path) -> Result<FooterOutcome, SiteFileError> {
        let content = site_file::read(path)?;
        let outcome = self.apply(&content);

        if let FooterOutcome::Patched(patched) = &outcome {
            site_file::write(path, patched)?;
        }

        Ok(outcome)
    }
}

/// Swaps the footer contact list in `path` for the social icons, returning
/// whether the file was changed. Errors are logged, never returned.
#[must_use]
pub fn patch_footer(path: &Path) -> bool {
    match FooterPatch::default().patch_file(path) {
        Ok(FooterOutcome::Patched(_)) => {
            info!("updated: {}", path.display());
            true
        }
        Ok(FooterOutcome::NotFound) => {
            warn!(
                "contact section not found in {} (might already be updated)",
                path.display()
            );
            false
        }
        Err(error) => {
            error!("error updating {}: {error}", path.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(head: &str, footer: &str) -> String {
        format!(
            "<html>\n<head>\n    {head}\n</head>\n<body>\n    <footer>\n            <div class=\"footer-grid\">\n{footer}\n            </div>\n    </footer>\n</body>\n</html>\n"
        )
    }

    #[test]
    fn replaces_the_contact_block() {
        let content = page(ANIMATIONS_STYLESHEET, CONTACT_BLOCK);
        let FooterOutcome::Patched(patched) = FooterPatch::default().apply(&content) else {
            unreachable!("the contact block is in the page");
        };

        assert!(patched.contains("Connect With Us"));
        assert!(!patched.contains("LinkedIn</a></li>"));
        assert!(patched.contains(SOCIAL_ICONS_BLOCK));
        assert_eq!(patched.matches(r#"class="social-link""#).count(), 5);
    }

    #[test]
    fn links_the_stylesheet_after_the_animations() {
        let content = page(ANIMATIONS_STYLESHEET, CONTACT_BLOCK);
        let FooterOutcome::Patched(patched) = FooterPatch::default().apply(&content) else {
            unreachable!("the contact block is in the page");
        };

        assert!(patched.contains(&format!(
            "{ANIMATIONS_STYLESHEET}\n    {SOCIAL_ICONS_STYLESHEET}\n"
        )));
        assert_eq!(patched.matches(SOCIAL_ICONS_MARKER).count(), 1);
    }

    #[test]
    fn stylesheet_already_linked() {
        let head = format!("{ANIMATIONS_STYLESHEET}\n    {SOCIAL_ICONS_STYLESHEET}");
        let content = page(&head, "");

        assert!(matches!(
            FooterPatch::default().link_stylesheet(&content),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn no_anchor_no_stylesheet() {
        let content = page(r#"<link rel="stylesheet" href="css/style.css">"#, CONTACT_BLOCK);
        let FooterOutcome::Patched(patched) = FooterPatch::default().apply(&content) else {
            unreachable!("the contact block is in the page");
        };

        assert!(!patched.contains(SOCIAL_ICONS_MARKER));
    }

    #[test]
    fn second_run_finds_nothing() {
        let patch = FooterPatch::default();
        let content = page(ANIMATIONS_STYLESHEET, CONTACT_BLOCK);
        let FooterOutcome::Patched(patched) = patch.apply(&content) else {
            unreachable!("the contact block is in the page");
        };

        assert_eq!(patch.apply(&patched), FooterOutcome::NotFound);
        assert_eq!(patch.link_stylesheet(&patched), patched);
    }

    #[test]
    fn reformatted_footer_is_not_found() {
        let reformatted = CONTACT_BLOCK.replace("                    <ul>", "<ul>");
        let content = page(ANIMATIONS_STYLESHEET, &reformatted);

        assert_eq!(FooterPatch::default().apply(&content), FooterOutcome::NotFound);
    }
}
