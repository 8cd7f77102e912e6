use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use super::parser::TodoParser;

/// Individual todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub task: String,
    /// Literal `YYYY-MM-DD` from the `[DUE: ...]` annotation, unvalidated
    pub due: Option<String>,
    pub client: String,
}

/// Scans a project documents directory for todos
pub struct TodoScanner {
    projects_dir: PathBuf,
    index_file: String,
    parser: TodoParser,
}

impl TodoScanner {
    /// Create a new TodoScanner
    pub fn new(projects_dir: PathBuf, index_file: impl Into<String>) -> Result<Self> {
        Ok(Self {
            projects_dir,
            index_file: index_file.into(),
            parser: TodoParser::new()?,
        })
    }

    /// Todos from every project document, documents in file-name order.
    /// A missing directory or unreadable document contributes nothing.
    pub fn scan_todos(&self) -> Vec<Todo> {
        let documents = match self.list_documents() {
            Ok(documents) => documents,
            Err(e) => {
                log::warn!(
                    "Could not list project documents in {}: {e}",
                    self.projects_dir.display()
                );
                return Vec::new();
            }
        };

        let mut todos = Vec::new();
        for path in documents {
            // Invalid UTF-8 is replaced rather than losing the whole document
            match fs::read(&path) {
                Ok(bytes) => {
                    let found = self.parser.parse_document(&String::from_utf8_lossy(&bytes));
                    log::debug!("{}: {} open todos", path.display(), found.len());
                    todos.extend(found);
                }
                Err(e) => log::warn!("Skipping unreadable document {}: {e}", path.display()),
            }
        }

        todos
    }

    /// Markdown documents in the projects directory, excluding the index
    fn list_documents(&self) -> Result<Vec<PathBuf>> {
        if !self.projects_dir.exists() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        for entry in fs::read_dir(&self.projects_dir)? {
            let entry = entry?;
            let path = entry.path();

            if self.is_project_document(&path) {
                documents.push(path);
            }
        }

        documents.sort();
        Ok(documents)
    }

    fn is_project_document(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
            return false;
        };

        file_name.ends_with(".md") && file_name != self.index_file && path.is_file()
    }
}
