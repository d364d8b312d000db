use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scroll::ScrollConfig;

pub const SITE_FILE: &str = "site.json";

static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(|| SiteContent::load(SITE_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse site content: {0}")]
    Parse(String),
}

/// Visual treatment of the page. Behavior is identical across themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Pointer-following glows and gradient skill chips.
    #[default]
    Aurora,
    /// Flat chips; the nav bar turns opaque once the page is scrolled.
    Minimal,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Aurora => f.write_str("aurora"),
            Theme::Minimal => f.write_str("minimal"),
        }
    }
}

impl FromStr for Theme {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aurora" => Ok(Theme::Aurora),
            "minimal" => Ok(Theme::Minimal),
            other => Err(ContentError::Parse(format!("unknown theme '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub monogram: String,
    pub role: String,
    pub tagline: String,
    pub learning: String,
    pub education: String,
    pub location: String,
    pub email: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub gradient: String,
}

impl SocialLink {
    /// Mail links open in place, everything else in a new tab.
    pub fn is_mail(&self) -> bool {
        self.url.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub summary: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: String,
    #[serde(default)]
    pub gradient: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub pitch: String,
    pub email_label: String,
    pub linkedin_label: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub theme: Theme,
    pub profile: Profile,
    pub links: Vec<SocialLink>,
    pub about: About,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub contact: Contact,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl SiteContent {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = ContentAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        let text = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::parse(text)
    }

    pub fn parse(text: &str) -> Result<Self, ContentError> {
        serde_json::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))
    }
}

/// The embedded site content, parsed once.
pub fn site_content() -> Result<&'static SiteContent, ContentError> {
    SITE_CONTENT.as_ref().map_err(Clone::clone)
}

/// Year the site was built, for the footer copyright line.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_SITE: &str = r#"{
        "profile": {
            "name": "Test Person", "monogram": "<T />", "role": "Engineer",
            "tagline": "t", "learning": "l", "education": "e",
            "location": "Somewhere", "email": "t@example.com",
            "github": "https://github.com/test"
        },
        "links": [],
        "about": { "summary": "s", "highlights": [] },
        "projects": [
            { "title": "B", "description": "b", "technologies": ["Zig", "C"], "link": "https://b" },
            { "title": "A", "description": "a", "technologies": [], "link": "https://a" }
        ],
        "skills": [{ "name": "Go" }],
        "contact": {
            "heading": "h", "pitch": "p", "email_label": "e",
            "linkedin_label": "l", "linkedin_url": "https://linkedin.com/in/test"
        }
    }"#;

    #[test]
    fn test_embedded_content_loads() {
        let site = site_content().expect("embedded site.json should parse");
        assert_eq!(site.projects.len(), 4);
        assert_eq!(site.projects[0].title, "Social Media Platform");
        assert_eq!(
            site.projects[0].technologies,
            vec!["NestJS", "Socket.IO", "WebSockets", "Redis"]
        );
        assert_eq!(site.skills.len(), 22);
        assert!(site.skills.iter().all(|s| s.color.is_some()));
        assert_eq!(site.about.highlights.len(), 4);
        assert_eq!(site.scroll, ScrollConfig::default());
    }

    #[test]
    fn test_embedded_links() {
        let site = site_content().expect("embedded site.json should parse");
        let labels: Vec<_> = site.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["GitHub", "LinkedIn", "Facebook", "Email"]);
        let mail: Vec<_> = site.links.iter().filter(|l| l.is_mail()).collect();
        assert_eq!(mail.len(), 1);
        assert_eq!(mail[0].label, "Email");
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let site = SiteContent::parse(MINIMAL_SITE).unwrap();
        assert_eq!(site.theme, Theme::Aurora);
        assert_eq!(site.scroll, ScrollConfig::default());
        assert_eq!(site.skills[0].color, None);
        assert_eq!(site.projects[0].gradient, None);
        // order is preserved as written
        assert_eq!(site.projects[0].title, "B");
        assert_eq!(site.projects[0].technologies, vec!["Zig", "C"]);
    }

    #[test]
    fn test_partial_scroll_config() {
        let text = MINIMAL_SITE.replacen(
            "\"links\": []",
            "\"links\": [], \"theme\": \"minimal\", \"scroll\": { \"header_offset\": 64.0 }",
            1,
        );
        let site = SiteContent::parse(&text).unwrap();
        assert_eq!(site.theme, Theme::Minimal);
        assert_eq!(site.scroll.header_offset, 64.0);
        assert_eq!(site.scroll.look_ahead, 200.0);
        assert!(site.scroll.throttle);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            SiteContent::parse("{ \"profile\": 1 }"),
            Err(ContentError::Parse(_))
        ));
        assert_eq!(
            SiteContent::load("missing.json"),
            Err(ContentError::NotFound("missing.json".to_string()))
        );
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("minimal".parse::<Theme>(), Ok(Theme::Minimal));
        assert_eq!(" Aurora ".parse::<Theme>(), Ok(Theme::Aurora));
        assert!("neon".parse::<Theme>().is_err());
        assert_eq!(Theme::Minimal.to_string(), "minimal");
    }

    #[test]
    fn test_build_year() {
        assert!(build_year() >= 2024);
    }
}
