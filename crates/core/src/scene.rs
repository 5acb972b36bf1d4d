//! Projects, scenes and generation modes.
//!
//! A [`Project`] owns an ordered list of [`Scene`]s and always keeps at least
//! one. Identifiers are handed in by the caller (the store allocates them).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::parameters::{validate_parameter_set, ParameterSet};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for project and scene names.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for a scene description.
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

/// Suffix appended to the name of a duplicated scene.
pub const DUPLICATE_SUFFIX: &str = " (Copy)";

// ---------------------------------------------------------------------------
// Generation mode
// ---------------------------------------------------------------------------

/// How a scene's prompt is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Local deterministic assembly.
    #[default]
    Manual,
    /// Delegated to the external completion service.
    Ai,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Ai => "ai",
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a project or scene name: non-blank and within length limit.
pub fn validate_name(entity: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{entity} name exceeds maximum length of {MAX_NAME_LENGTH} characters (got {})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a scene description: length check only (can be empty).
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters (got {})",
            description.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// One unit of prompt configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub parameters: ParameterSet,
    pub generated_prompt: Option<String>,
    pub mode: GenerationMode,
}

impl Scene {
    /// A blank scene: empty description and parameters, manual mode.
    pub fn new(id: DbId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            parameters: ParameterSet::new(),
            generated_prompt: None,
            mode: GenerationMode::Manual,
        }
    }

    /// Apply a partial update. Only fields present in `update` change.
    pub fn apply_update(&mut self, update: SceneUpdate) -> Result<(), CoreError> {
        if let Some(ref name) = update.name {
            validate_name("Scene", name)?;
        }
        if let Some(ref description) = update.description {
            validate_description(description)?;
        }
        if let Some(ref parameters) = update.parameters {
            validate_parameter_set(parameters)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(parameters) = update.parameters {
            self.parameters = parameters;
        }
        if let Some(mode) = update.mode {
            self.mode = mode;
        }
        if let Some(prompt) = update.generated_prompt {
            self.generated_prompt = Some(prompt);
        }
        Ok(())
    }
}

/// Partial update for a scene. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parameters: Option<ParameterSet>,
    pub mode: Option<GenerationMode>,
    pub generated_prompt: Option<String>,
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// An ordered collection of scenes. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub scenes: Vec<Scene>,
}

impl Project {
    /// Create a project holding a single blank `"Scene 1"`.
    pub fn new(id: DbId, name: impl Into<String>, first_scene_id: DbId) -> Self {
        Self {
            id,
            name: name.into(),
            scenes: vec![Scene::new(first_scene_id, "Scene 1")],
        }
    }

    pub fn scene(&self, scene_id: DbId) -> Result<&Scene, CoreError> {
        self.scenes
            .iter()
            .find(|s| s.id == scene_id)
            .ok_or(CoreError::NotFound {
                entity: "Scene",
                id: scene_id,
            })
    }

    pub fn scene_mut(&mut self, scene_id: DbId) -> Result<&mut Scene, CoreError> {
        self.scenes
            .iter_mut()
            .find(|s| s.id == scene_id)
            .ok_or(CoreError::NotFound {
                entity: "Scene",
                id: scene_id,
            })
    }

    /// Append a blank scene named after its position (`"Scene N"`).
    pub fn add_scene(&mut self, scene_id: DbId) -> &Scene {
        let name = format!("Scene {}", self.scenes.len() + 1);
        self.scenes.push(Scene::new(scene_id, name));
        &self.scenes[self.scenes.len() - 1]
    }

    /// Append a copy of `source_id` under a new id, named `"<name> (Copy)"`.
    pub fn duplicate_scene(&mut self, source_id: DbId, new_id: DbId) -> Result<&Scene, CoreError> {
        let mut copy = self.scene(source_id)?.clone();
        copy.id = new_id;
        copy.name.push_str(DUPLICATE_SUFFIX);
        self.scenes.push(copy);
        Ok(&self.scenes[self.scenes.len() - 1])
    }

    /// Remove a scene. The last remaining scene cannot be deleted.
    pub fn delete_scene(&mut self, scene_id: DbId) -> Result<(), CoreError> {
        let index = self
            .scenes
            .iter()
            .position(|s| s.id == scene_id)
            .ok_or(CoreError::NotFound {
                entity: "Scene",
                id: scene_id,
            })?;
        if self.scenes.len() == 1 {
            return Err(CoreError::Conflict(
                "A project must keep at least one scene".to_string(),
            ));
        }
        self.scenes.remove(index);
        Ok(())
    }

    /// Copy the parameter selection (and optionally the description) from
    /// one scene onto another. The target's parameters are replaced.
    pub fn copy_settings(
        &mut self,
        source_id: DbId,
        target_id: DbId,
        include_description: bool,
    ) -> Result<&Scene, CoreError> {
        let source = self.scene(source_id)?;
        let parameters = source.parameters.clone();
        let description = include_description.then(|| source.description.clone());

        let target = self.scene_mut(target_id)?;
        target.parameters = parameters;
        if let Some(description) = description {
            target.description = description;
        }
        Ok(&*target)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
