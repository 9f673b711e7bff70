use serde::{Deserialize, Serialize};

/// A candidate background image returned by the template listing API.
///
/// Only `url` is required; the remaining fields are carried when the API
/// provides them and ignored by the editor otherwise.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct MemeTemplate {
    pub url: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub box_count: Option<u32>,
}

impl MemeTemplate {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            id: None,
            name: None,
            width: None,
            height: None,
            box_count: None,
        }
    }
}
