use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Named static pages with localized copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Home,
    About,
    Contact,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Home, PageKind::About, PageKind::Contact];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::About => "about",
            PageKind::Contact => "contact",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "home" => Ok(PageKind::Home),
            "about" => Ok(PageKind::About),
            "contact" => Ok(PageKind::Contact),
            _ => Err(ContentError::not_found("page", s)),
        }
    }
}

/// Localized copy for a static page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub page: PageKind,
    pub locale: String,
    pub title: String,
    pub subtitle: String,
    /// Body paragraphs in display order.
    pub body: Vec<String>,
}
