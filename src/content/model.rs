//! Static content contracts
//!
//! Everything here is deserialized once from JSON and never mutated
//! afterwards. Optional fields default so that a partially filled block still
//! loads and renders whatever it has.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use tracing::warn;

/// A case-study project
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Service type, e.g. "Product design"
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub platforms: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub lottie: Option<LottieSource>,
    #[serde(default)]
    pub sections: ProjectSections,
}

impl Project {
    /// Sections in render order, with the legacy redesign form normalised
    pub fn sections(&self) -> Vec<Section> {
        self.sections.normalized()
    }

    /// The enabled legacy redesign, if this project still uses that form
    pub fn legacy_redesign(&self) -> Option<&LegacyRedesign> {
        match &self.sections {
            ProjectSections::Legacy { redesign: Some(redesign) } if redesign.enabled => {
                Some(redesign)
            }
            _ => None,
        }
    }
}

/// Either the ordered section list or the older single "redesign" object
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProjectSections {
    List(Vec<Section>),
    Legacy {
        #[serde(default)]
        redesign: Option<LegacyRedesign>,
    },
}

impl Default for ProjectSections {
    fn default() -> Self {
        ProjectSections::List(Vec::new())
    }
}

impl ProjectSections {
    pub fn normalized(&self) -> Vec<Section> {
        match self {
            ProjectSections::List(sections) => sections.clone(),
            ProjectSections::Legacy { redesign: Some(redesign) } if redesign.enabled => {
                vec![Section {
                    id: Some("redesign".to_string()),
                    title: "Redesign".to_string(),
                    content: None,
                    blocks: vec![Block::Comparison {
                        before_image: redesign.before_image.clone(),
                        after_image: redesign.after_image.clone(),
                        content: redesign.description.clone(),
                    }],
                }]
            }
            ProjectSections::Legacy { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRedesign {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub before_image: String,
    #[serde(default)]
    pub after_image: String,
}

/// An ordered, titled group of blocks
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Section {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_blocks")]
    pub blocks: Vec<Block>,
}

/// Blocks that fail to deserialize become `Block::Unknown` instead of
/// failing the whole project
fn lenient_blocks<'de, D>(deserializer: D) -> Result<Vec<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            Block::deserialize(value).unwrap_or_else(|e| {
                warn!("Skipping malformed block {}: {}", index, e);
                Block::Unknown
            })
        })
        .collect())
}

impl Section {
    /// Anchor id: the explicit id, or the title lower-cased with whitespace
    /// runs replaced by `-`
    pub fn anchor_id(&self) -> String {
        match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => self
                .title
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-"),
        }
    }
}

/// One independently renderable unit of a section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text {
        #[serde(default)]
        content: String,
    },
    Image {
        #[serde(default)]
        url: String,
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        width: Option<String>,
    },
    Grid {
        #[serde(default)]
        images: Vec<GridImage>,
        #[serde(default = "default_grid_columns")]
        columns: u8,
    },
    Lottie {
        #[serde(default)]
        url: Option<LottieSource>,
        #[serde(default)]
        height: Option<String>,
        #[serde(default)]
        caption: Option<String>,
    },
    Comparison {
        #[serde(default, rename = "beforeImage")]
        before_image: String,
        #[serde(default, rename = "afterImage")]
        after_image: String,
        #[serde(default)]
        content: Option<String>,
    },
    /// Any block type this build does not know about
    #[serde(other)]
    Unknown,
}

fn default_grid_columns() -> u8 {
    2
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GridImage {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// A lottie animation reference: either a URL to fetch or the animation
/// object itself
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LottieSource {
    Url(String),
    Inline(serde_json::Value),
}

/// Platform groups of a company's work, in their fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Web,
    Ios,
    Android,
    Website,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Web,
        Platform::Ios,
        Platform::Android,
        Platform::Website,
    ];

    /// Tag used as the key in content files and as the tab label
    pub fn tag(self) -> &'static str {
        match self {
            Platform::Web => "Web",
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Website => "Website",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.tag() == tag)
    }

    /// Anchor id of the platform group inside a work page
    pub fn anchor_id(self) -> String {
        format!("platform-{}", self.tag().to_lowercase())
    }

    /// Web-like platforms show media in a wide, borderless frame
    pub fn is_web(self) -> bool {
        matches!(self, Platform::Web | Platform::Website)
    }
}

/// A company and the projects done there, grouped by platform tag
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyWork {
    pub company_id: String,
    pub company_name: String,
    #[serde(default)]
    pub company_description: Option<String>,
    #[serde(default)]
    pub company_type: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub time_period: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub company_favicon: Option<String>,
    #[serde(default)]
    pub projects: HashMap<String, Vec<WorkProject>>,
}

impl CompanyWork {
    /// Projects of one platform; empty when the tag is absent
    pub fn projects_for(&self, platform: Platform) -> &[WorkProject] {
        self.projects
            .get(platform.tag())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Platforms with at least one project, in enumeration order
    pub fn tabs(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| !self.projects_for(*p).is_empty())
            .collect()
    }

    /// Header "Platforms" value: Website is folded into Web, duplicates dropped
    pub fn platforms_label(&self) -> String {
        let mut labels: Vec<&'static str> = Vec::new();
        for tab in self.tabs() {
            let label = if tab == Platform::Website {
                Platform::Web.tag()
            } else {
                tab.tag()
            };
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels.join(", ")
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkProject {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub problem_statement: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub achievements: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Lottie,
}

impl MediaKind {
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Lottie => "animation",
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// Owner details shown on the about and resume routes and in the footer
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub handle: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub portrait: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "Portfolio".to_string(),
            handle: "folio".to_string(),
            about: String::new(),
            email: None,
            resume_url: None,
            portrait: None,
        }
    }
}
