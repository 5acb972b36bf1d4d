//! Saved favorites: named parameter presets with an optional prompt.
//!
//! Provides input normalization (name trimming, tag cleanup), validation and
//! the case-insensitive search used by the favorites listing.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::parameters::{validate_parameter_set, ParameterSet};
use crate::scene::{validate_name, MAX_DESCRIPTION_LENGTH};
use crate::types::{DbId, Timestamp};

/// Maximum number of tags on a favorite.
pub const MAX_TAGS_COUNT: usize = 20;

/// Maximum length of a single tag.
pub const MAX_TAG_LENGTH: usize = 50;

/// A saved parameter preset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub parameters: ParameterSet,
    pub prompt: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}

/// Input for saving a favorite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFavorite {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: ParameterSet,
    pub prompt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateFavorite {
    /// Normalize and validate the input.
    ///
    /// Trims the name, drops a blank description, and trims, de-duplicates
    /// and drops empty tags (first occurrence wins).
    pub fn normalize(self) -> Result<CreateFavorite, CoreError> {
        let name = self.name.trim().to_string();
        validate_name("Favorite", &name)?;

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if let Some(ref d) = description {
            if d.len() > MAX_DESCRIPTION_LENGTH {
                return Err(CoreError::Validation(format!(
                    "Favorite description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters (got {})",
                    d.len()
                )));
            }
        }

        validate_parameter_set(&self.parameters)?;

        let tags = normalize_tags(self.tags);
        validate_tags(&tags)?;

        Ok(CreateFavorite {
            name,
            description,
            parameters: self.parameters,
            prompt: self.prompt.filter(|p| !p.is_empty()),
            tags,
        })
    }
}

/// Trim tags, drop empties, and de-duplicate keeping the first occurrence.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

/// Validate tag count and per-tag length.
pub fn validate_tags(tags: &[String]) -> Result<(), CoreError> {
    if tags.len() > MAX_TAGS_COUNT {
        return Err(CoreError::Validation(format!(
            "Tag count exceeds maximum of {MAX_TAGS_COUNT} (got {})",
            tags.len()
        )));
    }
    if let Some(tag) = tags.iter().find(|t| t.len() > MAX_TAG_LENGTH) {
        return Err(CoreError::Validation(format!(
            "Tag '{tag}' exceeds maximum length of {MAX_TAG_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Whether a favorite matches a search term.
///
/// Case-insensitive substring match over name, description and tags. An
/// empty or blank term matches everything.
pub fn matches_search(favorite: &Favorite, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    favorite.name.to_lowercase().contains(&term)
        || favorite
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&term))
        || favorite
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&term))
}
