use serde::{Deserialize, Serialize};

use super::resource::{NamedResource, Resource};

/// `GET /pokemon-species/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    pub evolution_chain: Option<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

impl Species {
    /// First flavor text written in `language` (e.g. `es`, `en`).
    pub fn flavor_text(&self, language: &str) -> Option<&str> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.flavor_text.as_str())
    }
}
