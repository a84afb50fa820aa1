//! Project details shown in the modal
//!
//! The catalog ships as JSON next to the crate and is keyed by the card title
//! exactly as it appears in the page.

use serde::{Deserialize, Serialize};

const BUNDLED_CATALOG: &str = include_str!("../../assets/projects.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub title: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    pub projects: Vec<ProjectDetails>,
}

impl ProjectCatalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Catalog bundled with the crate; empty (with a warning) if it fails to parse
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("Bundled project catalog is invalid: {}", e);
                Self::default()
            }
        }
    }

    /// Details for a card title (surrounding whitespace ignored)
    pub fn get(&self, title: &str) -> Option<&ProjectDetails> {
        let title = title.trim();
        self.projects.iter().find(|p| p.title == title)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = ProjectCatalog::bundled();
        assert_eq!(catalog.len(), 12);

        let project = catalog.get(" 智能家居控制系统\n").expect("known title");
        assert_eq!(project.tech.len(), 5);
        assert_eq!(project.highlights.len(), 4);
        assert!(project.image.starts_with("https://"));
    }

    #[test]
    fn test_unknown_title() {
        assert!(ProjectCatalog::bundled().get("Nonexistent").is_none());
    }

    #[test]
    fn test_from_json_defaults_lists() {
        let catalog =
            ProjectCatalog::from_json(r#"[{"title": "T", "image": "i.png", "description": "D"}]"#)
                .expect("valid json");
        let project = catalog.get("T").expect("present");
        assert!(project.tech.is_empty());
        assert!(project.highlights.is_empty());

        assert!(ProjectCatalog::from_json(r#"{"title": "T"}"#).is_err());
    }
}
