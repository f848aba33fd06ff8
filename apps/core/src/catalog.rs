use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::model::CommandItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError {
    message: String,
}

impl CatalogError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CatalogError {}

pub trait CandidateProvider {
    fn provider_name(&self) -> &'static str;
    fn provide(&self) -> Result<Vec<CommandItem>, CatalogError>;
}

pub struct StaticProvider {
    items: Vec<CommandItem>,
}

impl StaticProvider {
    pub fn from_items(items: Vec<CommandItem>) -> Self {
        Self { items }
    }

    pub fn deterministic_fixture() -> Self {
        Self {
            items: vec![
                CommandItem::new("button", "Button"),
                CommandItem::new("text-input", "Text Input"),
                CommandItem::new("dropdown", "Dropdown"),
                CommandItem::new("checkbox", "Checkbox"),
            ],
        }
    }
}

impl CandidateProvider for StaticProvider {
    fn provider_name(&self) -> &'static str {
        "static"
    }

    fn provide(&self) -> Result<Vec<CommandItem>, CatalogError> {
        Ok(self.items.clone())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    key: String,
    label: String,
}

// Entry files are `.json` or `.json5` arrays of `{ key, label }`. Files load in
// path order so the library group keeps a stable, caller-visible ordering.
pub struct DirCatalogProvider {
    root: PathBuf,
}

impl DirCatalogProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CandidateProvider for DirCatalogProvider {
    fn provider_name(&self) -> &'static str {
        "catalog-dir"
    }

    fn provide(&self) -> Result<Vec<CommandItem>, CatalogError> {
        if !self.root.is_dir() {
            return Err(CatalogError::new(format!(
                "catalog dir does not exist: {}",
                self.root.display()
            )));
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| has_catalog_extension(path))
            .collect();
        files.sort();

        let mut seen: HashSet<String> = HashSet::new();
        let mut items = Vec::new();
        for file in files {
            for item in load_entries(&file)? {
                if seen.insert(item.key.clone()) {
                    items.push(item);
                }
            }
        }
        Ok(items)
    }
}

fn has_catalog_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json") | Some("json5")
    )
}

fn load_entries(path: &Path) -> Result<Vec<CommandItem>, CatalogError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|error| CatalogError::new(format!("failed to read {}: {error}", path.display())))?;

    let entries: Vec<CatalogEntry> =
        if path.extension().and_then(|ext| ext.to_str()) == Some("json5") {
            json5::from_str(&raw).map_err(|error| {
                CatalogError::new(format!("malformed catalog file {}: {error}", path.display()))
            })?
        } else {
            serde_json::from_str(&raw).map_err(|error| {
                CatalogError::new(format!("malformed catalog file {}: {error}", path.display()))
            })?
        };

    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.key.trim().is_empty() {
            return Err(CatalogError::new(format!(
                "entry with empty key in {}",
                path.display()
            )));
        }
        out.push(CommandItem::from_owned(entry.key, entry.label));
    }
    Ok(out)
}
