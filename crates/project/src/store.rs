//! Project store contract and the file-backed implementation

use crate::error::{Error, Result};
use crate::record::Project;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Storage contract for named projects
///
/// The editor core only produces and consumes [`Project`] records; where
/// they live is the store's business.
pub trait ProjectStore {
    /// All saved projects, newest first
    fn list(&self) -> Result<Vec<Project>>;

    /// Load one project by id
    fn get(&self, id: &str) -> Result<Option<Project>>;

    /// Save a project, overwriting any existing record with the same id
    fn put(&self, project: &Project) -> Result<()>;

    /// Delete a project by id
    fn delete(&self, id: &str) -> Result<()>;
}

/// One JSON file per project under a root directory
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    root: PathBuf,
}

impl FileProjectStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }
}

impl ProjectStore for FileProjectStore {
    fn list(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // A corrupt or foreign file must not take down the whole list.
            match fs::read_to_string(&path).map_err(Error::from).and_then(|s| {
                serde_json::from_str::<Project>(&s).map_err(Error::from)
            }) {
                Ok(project) => projects.push(project),
                Err(e) => warn!("Skipping unreadable project file {:?}: {}", path, e),
            }
        }
        projects.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(projects)
    }

    fn get(&self, id: &str) -> Result<Option<Project>> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn put(&self, project: &Project) -> Result<()> {
        let path = self.path_for(&project.id);
        let content = serde_json::to_string_pretty(project)?;
        fs::write(&path, content)?;
        info!("Saved project '{}' ({})", project.name, project.id);
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(Error::NotFound(id.to_string()));
        }
        fs::remove_file(&path)?;
        info!("Deleted project {}", id);
        Ok(())
    }
}
