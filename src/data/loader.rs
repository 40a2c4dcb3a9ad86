// ============================================================
// Layer 4 — JSON Directory Loader
// ============================================================
// Reads every `*.json` file in one directory and parses it into
// `T`. Anything without a `.json` extension is skipped silently.
//
// Files are visited in file-name order so that question ids and
// output ordering are the same from one run to the next.
//
// A file that cannot be read or parsed aborts the whole load:
// the dataset has to be fixed and the run repeated.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::{
    fs,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use crate::domain::document::SourceDocument;
use crate::domain::traits::DocumentSource;

pub struct JsonDirLoader<T> {
    dir: PathBuf,
    _content: PhantomData<fn() -> T>,
}

impl<T> JsonDirLoader<T> {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            _content: PhantomData,
        }
    }

    /// Paths of the `.json` files in the directory, sorted by name.
    pub fn json_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let path = entry?.path();

            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
                paths.push(path);
            } else {
                tracing::trace!("Skipping non-JSON entry '{}'", path.display());
            }
        }

        paths.sort();
        Ok(paths)
    }
}

impl<T: DeserializeOwned> DocumentSource for JsonDirLoader<T> {
    type Content = T;

    fn load_all(&self) -> Result<Vec<SourceDocument<T>>> {
        let paths = self.json_paths()?;
        let mut docs = Vec::with_capacity(paths.len());

        for path in &paths {
            let doc = load_single_json(path)?;
            tracing::debug!("Loaded: {}", doc.source);
            docs.push(doc);
        }

        tracing::info!("Loaded {} documents from '{}'", docs.len(), self.dir.display());
        Ok(docs)
    }
}

fn load_single_json<T: DeserializeOwned>(path: &Path) -> Result<SourceDocument<T>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let content = serde_json::from_slice(&bytes)
        .with_context(|| format!("Invalid JSON in '{}'", path.display()))?;

    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(SourceDocument::new(source, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Tiny {
        n: u32,
    }

    #[test]
    fn test_loads_json_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), r#"{"n": 2}"#).unwrap();
        fs::write(dir.path().join("a.png.json"), r#"{"n": 1}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "not json").unwrap();

        let docs = JsonDirLoader::<Tiny>::new(dir.path()).load_all().unwrap();

        let seen: Vec<(&str, u32)> = docs.iter().map(|d| (d.source.as_str(), d.content.n)).collect();
        assert_eq!(seen, vec![("a.png.json", 1), ("b.json", 2)]);
    }

    #[test]
    fn test_invalid_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{").unwrap();

        let err = JsonDirLoader::<Tiny>::new(dir.path()).load_all().unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = JsonDirLoader::<Tiny>::new(dir.path().join("nope"));
        assert!(loader.load_all().is_err());
    }
}
