//! In-memory project, scene and favorite storage.
//!
//! Thread-safe via interior `RwLock`s; wrapped in `Arc` and shared through
//! [`AppState`](crate::state::AppState). Reads hand out clones so no lock is
//! held once a method returns.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use reelprompt_core::error::CoreError;
use reelprompt_core::favorites::{matches_search, CreateFavorite, Favorite};
use reelprompt_core::scene::{validate_name, Project, Scene, SceneUpdate};
use reelprompt_core::types::DbId;
use tokio::sync::RwLock;

/// Process-local store. Ids are allocated from one sequence shared by
/// projects, scenes and favorites.
pub struct MemoryStore {
    next_id: AtomicI64,
    projects: RwLock<BTreeMap<DbId, Project>>,
    /// Oldest first.
    favorites: RwLock<Vec<Favorite>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            projects: RwLock::new(BTreeMap::new()),
            favorites: RwLock::new(Vec::new()),
        }
    }

    fn allocate_id(&self) -> DbId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    // ---- projects ----

    /// All projects in creation order.
    pub async fn list_projects(&self) -> Vec<Project> {
        self.projects.read().await.values().cloned().collect()
    }

    /// Create a project holding a single blank `"Scene 1"`.
    pub async fn create_project(&self, name: &str) -> Result<Project, CoreError> {
        let name = name.trim();
        validate_name("Project", name)?;

        let project = Project::new(self.allocate_id(), name, self.allocate_id());
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(project)
    }

    pub async fn get_project(&self, id: DbId) -> Result<Project, CoreError> {
        self.projects
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(project_not_found(id))
    }

    pub async fn rename_project(&self, id: DbId, name: &str) -> Result<Project, CoreError> {
        let name = name.trim();
        validate_name("Project", name)?;

        let mut projects = self.projects.write().await;
        let project = project_mut(&mut projects, id)?;
        project.name = name.to_string();
        Ok(project.clone())
    }

    pub async fn delete_project(&self, id: DbId) -> Result<(), CoreError> {
        self.projects
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(project_not_found(id))
    }

    // ---- scenes ----

    /// Snapshot of one scene.
    pub async fn scene(&self, project_id: DbId, scene_id: DbId) -> Result<Scene, CoreError> {
        let projects = self.projects.read().await;
        let project = projects.get(&project_id).ok_or(project_not_found(project_id))?;
        project.scene(scene_id).cloned()
    }

    pub async fn add_scene(&self, project_id: DbId) -> Result<Scene, CoreError> {
        let scene_id = self.allocate_id();
        let mut projects = self.projects.write().await;
        let project = project_mut(&mut projects, project_id)?;
        Ok(project.add_scene(scene_id).clone())
    }

    pub async fn update_scene(
        &self,
        project_id: DbId,
        scene_id: DbId,
        update: SceneUpdate,
    ) -> Result<Scene, CoreError> {
        let mut projects = self.projects.write().await;
        let scene = project_mut(&mut projects, project_id)?.scene_mut(scene_id)?;
        scene.apply_update(update)?;
        Ok(scene.clone())
    }

    pub async fn delete_scene(&self, project_id: DbId, scene_id: DbId) -> Result<(), CoreError> {
        let mut projects = self.projects.write().await;
        project_mut(&mut projects, project_id)?.delete_scene(scene_id)
    }

    pub async fn duplicate_scene(
        &self,
        project_id: DbId,
        scene_id: DbId,
    ) -> Result<Scene, CoreError> {
        let new_id = self.allocate_id();
        let mut projects = self.projects.write().await;
        let project = project_mut(&mut projects, project_id)?;
        project.duplicate_scene(scene_id, new_id).cloned()
    }

    /// Copy parameters (and optionally the description) between two scenes
    /// of the same project. Returns the updated target.
    pub async fn copy_settings(
        &self,
        project_id: DbId,
        source_scene_id: DbId,
        target_scene_id: DbId,
        include_description: bool,
    ) -> Result<Scene, CoreError> {
        let mut projects = self.projects.write().await;
        let project = project_mut(&mut projects, project_id)?;
        project
            .copy_settings(source_scene_id, target_scene_id, include_description)
            .cloned()
    }

    /// Record a successfully generated prompt on a scene.
    ///
    /// The scene may have been deleted while the prompt was being generated,
    /// in which case this reports `NotFound`.
    pub async fn store_generated_prompt(
        &self,
        project_id: DbId,
        scene_id: DbId,
        prompt: String,
    ) -> Result<Scene, CoreError> {
        let mut projects = self.projects.write().await;
        let scene = project_mut(&mut projects, project_id)?.scene_mut(scene_id)?;
        scene.generated_prompt = Some(prompt);
        Ok(scene.clone())
    }

    // ---- favorites ----

    /// Favorites matching `search`, oldest first. `None` or a blank term
    /// lists everything.
    pub async fn list_favorites(&self, search: Option<&str>) -> Vec<Favorite> {
        let term = search.unwrap_or_default();
        self.favorites
            .read()
            .await
            .iter()
            .filter(|f| matches_search(f, term))
            .cloned()
            .collect()
    }

    pub async fn create_favorite(&self, input: CreateFavorite) -> Result<Favorite, CoreError> {
        let input = input.normalize()?;
        let favorite = Favorite {
            id: self.allocate_id(),
            name: input.name,
            description: input.description,
            parameters: input.parameters,
            prompt: input.prompt,
            tags: input.tags,
            created_at: chrono::Utc::now(),
        };
        self.favorites.write().await.push(favorite.clone());
        Ok(favorite)
    }

    pub async fn delete_favorite(&self, id: DbId) -> Result<(), CoreError> {
        let mut favorites = self.favorites.write().await;
        let index = favorites
            .iter()
            .position(|f| f.id == id)
            .ok_or(favorite_not_found(id))?;
        favorites.remove(index);
        Ok(())
    }

    /// Load a favorite into a scene.
    ///
    /// The scene's parameters are replaced by the favorite's. When the
    /// favorite carries a prompt it becomes the scene's generated prompt.
    pub async fn apply_favorite(
        &self,
        favorite_id: DbId,
        project_id: DbId,
        scene_id: DbId,
    ) -> Result<Scene, CoreError> {
        let favorite = self
            .favorites
            .read()
            .await
            .iter()
            .find(|f| f.id == favorite_id)
            .cloned()
            .ok_or(favorite_not_found(favorite_id))?;

        let mut projects = self.projects.write().await;
        let scene = project_mut(&mut projects, project_id)?.scene_mut(scene_id)?;
        scene.parameters = favorite.parameters;
        if let Some(prompt) = favorite.prompt {
            scene.generated_prompt = Some(prompt);
        }
        Ok(scene.clone())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn project_mut(
    projects: &mut BTreeMap<DbId, Project>,
    id: DbId,
) -> Result<&mut Project, CoreError> {
    projects.get_mut(&id).ok_or(project_not_found(id))
}

fn project_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Project",
        id,
    }
}

fn favorite_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Favorite",
        id,
    }
}
