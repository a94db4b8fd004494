use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

/// A markdown source file addressed relative to the content root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePage {
    relative_path: RelativePathBuf,
}

impl SourcePage {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    /// Locate `path` under `content_root`.
    ///
    /// Returns `None` when the path is outside the root or not valid UTF-8.
    pub fn from_path(content_root: &Path, path: &Path) -> Option<Self> {
        let stripped = path.strip_prefix(content_root).ok()?;
        RelativePathBuf::from_path(stripped).ok().map(Self::new)
    }

    /// Path of the markdown source, relative to the content root
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Path of the rendered page, relative to the public root
    pub fn output_path(&self) -> RelativePathBuf {
        self.relative_path.with_extension(Self::OUTPUT_EXTENSION)
    }
}

impl From<&str> for SourcePage {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
