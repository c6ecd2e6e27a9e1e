//! Catalog row types

use serde::{Deserialize, Serialize};

/// One movie row from the remote `movies` table.
///
/// Field names follow the table's camelCase columns. Only `id` and
/// `movieName` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    #[serde(default)]
    pub last_used: String,
    pub movie_name: String,
    /// Comma separated genre list, shown as the first hint
    #[serde(default)]
    pub genres: String,
    /// Shown as the second hint
    #[serde(default)]
    pub lead_actor: String,
    #[serde(default)]
    pub default_emojis: String,
    /// Clue sequence in reveal order
    #[serde(default)]
    pub emoji_array: Vec<String>,
}

impl Movie {
    pub fn new(id: impl Into<String>, movie_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            last_used: String::new(),
            movie_name: movie_name.into(),
            genres: String::new(),
            lead_actor: String::new(),
            default_emojis: String::new(),
            emoji_array: Vec::new(),
        }
    }

    pub fn with_emojis<I, S>(mut self, emojis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emoji_array = emojis.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_genres(mut self, genres: impl Into<String>) -> Self {
        self.genres = genres.into();
        self
    }

    pub fn with_lead_actor(mut self, lead_actor: impl Into<String>) -> Self {
        self.lead_actor = lead_actor.into();
        self
    }
}
