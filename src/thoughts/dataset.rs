use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::controller::Variant;

/// A thought as handed to the layout before it has an identity.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ThoughtSeed {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "name")]
    pub thought: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ThoughtSeed {
    pub fn new(id: &str, thought: &str, tags: &[&str]) -> Self {
        Self {
            id: Some(id.to_owned()),
            thought: Some(thought.to_owned()),
            tags: Some(tags.iter().map(|tag| (*tag).to_owned()).collect()),
        }
    }
}

pub fn parse_seeds(raw: &str) -> Result<Vec<ThoughtSeed>> {
    serde_json::from_str(raw).context("thought dataset must be a JSON array of thoughts")
}

pub fn load_seeds(path: &Path) -> Result<Vec<ThoughtSeed>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read thought dataset {}", path.display()))?;
    parse_seeds(&raw)
        .with_context(|| format!("failed to parse thought dataset {}", path.display()))
}

pub fn sample_seeds(variant: Variant) -> Vec<ThoughtSeed> {
    match variant {
        Variant::Planet => vec![
            ThoughtSeed::new(
                "22333",
                "I had a dream about an green elephant. It asked me to travel on his back to \
                 India. When I accepted his offer he laughed at me and said that I am much to \
                 heavy. The elephant would rather go alone. #dream #elephant",
                &["#dream", "#elephant"],
            ),
            ThoughtSeed::new(
                "222333",
                "He told students to get their diplomas and shared his dream of escape. \
                 #freddiegray #dream",
                &["#freddiegray", "#dream"],
            ),
            ThoughtSeed::new(
                "2223333",
                "But they did not see any #trump Home mirrors or lotion dispensers",
                &["#trump"],
            ),
            ThoughtSeed::new(
                "22233333",
                "When Jobs returned, it was a dark time for Apple. It was forced to team up with \
                 its archrival Microsoft, and even took a $150 million stock investment from the \
                 company, which was then run by Bill Gates. #elephant #dream",
                &["#elephant", "#dream"],
            ),
        ],
        Variant::Universe => vec![
            ThoughtSeed::new("22333", "Elephant Dreams", &[]),
            ThoughtSeed::new("222333", "Rastafari Planet", &[]),
            ThoughtSeed::new("2223333", "New Planet", &[]),
        ],
    }
}
