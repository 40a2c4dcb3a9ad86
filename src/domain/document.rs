// ============================================================
// Layer 3 — Source Document
// ============================================================
// A parsed input file paired with the file name it came from.
// The name is kept so errors can point at the offending file
// and so the relation pass can derive the image id from it.

use std::path::Path;

#[derive(Debug, Clone)]
pub struct SourceDocument<T> {
    /// File name, e.g. `12.png.json`
    pub source: String,

    pub content: T,
}

impl<T> SourceDocument<T> {
    pub fn new(source: impl Into<String>, content: T) -> Self {
        Self {
            source:  source.into(),
            content,
        }
    }

    /// The file name with two extensions stripped: annotation files
    /// are named after their image (`12.png.json` → `12`).
    pub fn image_id(&self) -> String {
        let image_name = Path::new(&self.source)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Path::new(&image_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
