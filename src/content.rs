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

//! Marketing copy for the generated service pages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::site_file;

/// A summary metric card: `value` is the large text, `label` the heading
/// under it, `description` the sentence under that.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub description: String,
}

impl Stat {
    #[must_use]
    pub fn new(value: &str, label: &str, description: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageContent {
    pub title: String,
    /// May contain a `<span class="gradient-text">` around the highlighted word.
    pub hero_title: String,
    pub hero_desc: String,
    pub about_title: String,
    pub about_paragraphs: [String; 2],
    pub stats: [Stat; 3],
}

impl PageContent {
    /// Every text field paired with its name, in page order.
    #[must_use]
    pub fn fields(&self) -> Vec<(String, &str)> {
        let mut fields = vec![
            ("title".to_string(), self.title.as_str()),
            ("hero_title".to_string(), self.hero_title.as_str()),
            ("hero_desc".to_string(), self.hero_desc.as_str()),
            ("about_title".to_string(), self.about_title.as_str()),
        ];

        for (i, paragraph) in self.about_paragraphs.iter().enumerate() {
            fields.push((format!("about_p{}", i + 1), paragraph.as_str()));
        }

        for (i, stat) in self.stats.iter().enumerate() {
            fields.push((format!("stats[{i}].value"), stat.value.as_str()));
            fields.push((format!("stats[{i}].label"), stat.label.as_str()));
            fields.push((format!("stats[{i}].description"), stat.description.as_str()));
        }

        fields
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ContentError {
    #[error("content: there are no pages")]
    NoPages,
    #[error("content: {page}: {field} is empty")]
    EmptyField { page: String, field: String },
    #[error("content: {page:?} is not an html file name")]
    InvalidIdentifier { page: String },
}

/// Page file name to the copy for that page.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ContentTable(pub BTreeMap<String, PageContent>);

impl ContentTable {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pages(&self) -> impl Iterator<Item = (&String, &PageContent)> {
        self.0.iter()
    }

    #[must_use]
    pub fn get(&self, page: &str) -> Option<&PageContent> {
        self.0.get(page)
    }

    /// Returns every problem found, an empty list means the table is usable.
    ///
    /// Page identifiers are used as output file names, so they must be a bare
    /// `*.html` name without any path separator.
    #[must_use]
    pub fn validate(&self) -> Vec<ContentError> {
        let mut errors = Vec::new();

        if self.is_empty() {
            errors.push(ContentError::NoPages);
        }

        for (page, content) in self.pages() {
            if !site_file::is_page_name(page) {
                errors.push(ContentError::InvalidIdentifier { page: page.clone() });
            }

            for (field, value) in content.fields() {
                if value.trim().is_empty() {
                    errors.push(ContentError::EmptyField {
                        page: page.clone(),
                        field,
                    });
                }
            }
        }

        errors
    }
}

impl Default for ContentTable {
    fn default() -> Self {
        let mut pages = BTreeMap::new();

        pages.insert(
            "service-3d.html".to_string(),
            PageContent {
                title: "3D Experiences".to_string(),
                hero_title: r#"3D <span class="gradient-text">Experiences</span>"#.to_string(),
                hero_desc: "Immersive 3D visualizations and interactive experiences".to_string(),
                about_title: "Immersive Visual Experiences".to_string(),
                about_paragraphs: [
                    "We create stunning 3D experiences using Three.js, WebGL, and cutting-edge \
rendering technologies. From product visualizations to interactive virtual tours, we bring your \
ideas to life in three dimensions."
                        .to_string(),
                    "Our 3D solutions run smoothly on all devices, from smartphones to high-end \
desktops. We optimize performance without sacrificing visual quality, ensuring your users get an \
amazing experience every time."
                        .to_string(),
                ],
                stats: [
                    Stat::new(
                        "60 FPS",
                        "Smooth Performance",
                        "Optimized 3D rendering maintains 60 frames per second on all devices for \
fluid interactions.",
                    ),
                    Stat::new(
                        "WebGL",
                        "Browser-Based",
                        "No downloads or plugins required. 3D experiences run directly in the \
browser.",
                    ),
                    Stat::new(
                        "100%",
                        "Device Compatible",
                        "Works perfectly on desktop, tablet, and mobile with adaptive quality \
settings.",
                    ),
                ],
            },
        );

        pages.insert(
            "service-gpt.html".to_string(),
            PageContent {
                title: "Custom GPTs".to_string(),
                hero_title: r#"Custom <span class="gradient-text">GPTs</span>"#.to_string(),
                hero_desc: "Specialized AI assistants trained for your specific needs".to_string(),
                about_title: "Your Personal AI Expert".to_string(),
                about_paragraphs: [
                    "We build custom GPT models trained on your business data, industry \
knowledge, and specific use cases. These AI assistants understand your domain and provide \
expert-level responses tailored to your needs."
                        .to_string(),
                    "From customer support to internal knowledge bases, our custom GPTs integrate \
seamlessly with your existing systems and workflows, providing instant, accurate answers 24/7."
                        .to_string(),
                ],
                stats: [
                    Stat::new(
                        "95%",
                        "Accuracy Rate",
                        "Custom training on your data ensures highly accurate and relevant \
responses.",
                    ),
                    Stat::new(
                        "10x",
                        "Faster Responses",
                        "Instant answers to complex questions that would take humans hours to \
research.",
                    ),
                    Stat::new(
                        "24/7",
                        "Always Available",
                        "Your AI expert never sleeps, providing support around the clock.",
                    ),
                ],
            },
        );

        pages.insert(
            "service-dashboards.html".to_string(),
            PageContent {
                title: "AI Dashboards".to_string(),
                hero_title: r#"AI-Powered <span class="gradient-text">Dashboards</span>"#
                    .to_string(),
                hero_desc: "Intelligent data visualization and business intelligence".to_string(),
                about_title: "Data-Driven Decision Making".to_string(),
                about_paragraphs: [
                    "We build AI-powered dashboards that transform raw data into actionable \
insights. Our dashboards use machine learning to identify trends, predict outcomes, and highlight \
what matters most to your business."
                        .to_string(),
                    "Real-time data visualization, automated reporting, and intelligent alerts \
ensure you always have the information you need to make informed decisions quickly."
                        .to_string(),
                ],
                stats: [
                    Stat::new(
                        "Real-time",
                        "Live Data Updates",
                        "See your metrics update in real-time with automatic data \
synchronization.",
                    ),
                    Stat::new(
                        "AI Insights",
                        "Smart Analytics",
                        "Machine learning algorithms identify trends and anomalies automatically.",
                    ),
                    Stat::new(
                        "Custom",
                        "Fully Tailored",
                        "Every dashboard is customized to your specific KPIs and business needs.",
                    ),
                ],
            },
        );

        pages.insert(
            "service-content.html".to_string(),
            PageContent {
                title: "AI Content Generation".to_string(),
                hero_title: r#"AI Content <span class="gradient-text">Generation</span>"#
                    .to_string(),
                hero_desc: "High-quality content created by advanced AI".to_string(),
                about_title: "Content at Scale".to_string(),
                about_paragraphs: [
                    "We leverage advanced AI models to generate high-quality content for blogs, \
social media, product descriptions, and marketing materials. Our AI understands your brand voice \
and creates content that resonates with your audience."
                        .to_string(),
                    "From SEO-optimized blog posts to engaging social media content, we help you \
maintain a consistent content pipeline without the overhead of a large content team."
                        .to_string(),
                ],
                stats: [
                    Stat::new(
                        "10x",
                        "Faster Production",
                        "Generate content 10 times faster than traditional methods while \
maintaining quality.",
                    ),
                    Stat::new(
                        "SEO",
                        "Optimized Content",
                        "All content is optimized for search engines with proper keywords and \
structure.",
                    ),
                    Stat::new(
                        "Brand",
                        "Voice Consistency",
                        "AI trained on your brand guidelines ensures consistent tone and \
messaging.",
                    ),
                ],
            },
        );

        pages.insert(
            "service-marketing.html".to_string(),
            PageContent {
                title: "AI Marketing".to_string(),
                hero_title: r#"AI-Powered <span class="gradient-text">Marketing</span>"#
                    .to_string(),
                hero_desc: "Intelligent marketing automation and optimization".to_string(),
                about_title: "Marketing That Learns".to_string(),
                about_paragraphs: [
                    "We implement AI-powered marketing solutions that optimize campaigns in \
real-time, personalize customer experiences, and maximize ROI. Our systems learn from every \
interaction to continuously improve performance."
                        .to_string(),
                    "From predictive analytics to automated A/B testing, we help you make \
data-driven marketing decisions that drive growth and reduce customer acquisition costs."
                        .to_string(),
                ],
                stats: [
                    Stat::new(
                        "3x",
                        "Higher ROI",
                        "AI optimization increases marketing ROI by an average of 300%.",
                    ),
                    Stat::new(
                        "Auto",
                        "Campaign Optimization",
                        "Campaigns automatically adjust based on performance data in real-time.",
                    ),
                    Stat::new(
                        "Personalized",
                        "Customer Experiences",
                        "Each customer sees content tailored to their preferences and behavior.",
                    ),
                ],
            },
        );

        pages.insert(
            "service-security.html".to_string(),
            PageContent {
                title: "AI Security".to_string(),
                hero_title: r#"AI-Powered <span class="gradient-text">Security</span>"#
                    .to_string(),
                hero_desc: "Intelligent threat detection and protection".to_string(),
                about_title: "Proactive Security".to_string(),
                about_paragraphs: [
                    "We implement AI-powered security solutions that detect and prevent threats \
before they cause damage. Our systems use machine learning to identify unusual patterns, \
potential vulnerabilities, and security risks in real-time."
                        .to_string(),
                    "From fraud detection to network security, our AI continuously monitors your \
systems, learns from new threats, and adapts to protect your business and customer data."
                        .to_string(),
                ],
                stats: [
                    Stat::new(
                        "99.9%",
                        "Threat Detection",
                        "AI identifies and blocks threats with 99.9% accuracy rate.",
                    ),
                    Stat::new(
                        "Real-time",
                        "Instant Response",
                        "Threats are detected and neutralized in milliseconds, not hours.",
                    ),
                    Stat::new(
                        "Adaptive",
                        "Continuous Learning",
                        "System learns from new threats and updates defenses automatically.",
                    ),
                ],
            },
        );

        Self(pages)
    }
}
