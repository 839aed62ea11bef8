//! Env-file documents: parsing, editing state, and rendering

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

mod line;
mod render;

pub use line::{Line, LineKind, Variable, parse};
pub use render::render;

/// The parsed lines of one example file, keyed by its source path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDocument {
    pub path: PathBuf,
    pub lines: Vec<Line>,
}

impl FileDocument {
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: parse(content),
        }
    }

    /// Variable records with their line index, in line order
    pub fn variables(&self) -> impl Iterator<Item = (usize, &Variable)> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| line.as_variable().map(|var| (idx, var)))
    }

    pub fn has_variables(&self) -> bool {
        self.variables().next().is_some()
    }

    pub fn render(&self) -> String {
        render(&self.lines)
    }

    /// Where the rendered document is written
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        output_path(&self.path, suffix)
    }
}

/// Derive an output path by removing the first `suffix` occurrence from the file name.
///
/// Only the file name is rewritten; directories containing `suffix` are left alone.
/// A name without `suffix` comes back unchanged.
pub fn output_path(source: &Path, suffix: &str) -> PathBuf {
    let Some(name) = source.file_name().and_then(|n| n.to_str()) else {
        warn!(path = %source.display(), "output_path: no usable file name");
        return source.to_path_buf();
    };

    if suffix.is_empty() || !name.contains(suffix) {
        warn!(path = %source.display(), %suffix, "output_path: suffix not found, output overwrites source");
        return source.to_path_buf();
    }

    let renamed = name.replacen(suffix, "", 1);
    debug!(from = %name, to = %renamed, "output_path: derived");
    source.with_file_name(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_yields_line_indices() {
        let doc = FileDocument::parse("/p/.env.example", "# header\nA=1\n\nB=\n");
        let found: Vec<(usize, &str)> = doc.variables().map(|(i, v)| (i, v.key.as_str())).collect();
        assert_eq!(found, vec![(1, "A"), (3, "B")]);
        assert!(doc.has_variables());
    }

    #[test]
    fn test_comment_only_document_has_no_variables() {
        let doc = FileDocument::parse("/p/.env.example", "# only comments\n\n# here\n");
        assert!(!doc.has_variables());
        assert_eq!(doc.render(), "# only comments\n\n# here\n");
    }

    #[test]
    fn test_output_path_strips_suffix() {
        assert_eq!(
            output_path(Path::new("/repo/app/.env.example"), ".example"),
            PathBuf::from("/repo/app/.env")
        );
    }

    #[test]
    fn test_output_path_ignores_directories() {
        assert_eq!(
            output_path(Path::new("/work/site.example/.env.example"), ".example"),
            PathBuf::from("/work/site.example/.env")
        );
    }

    #[test]
    fn test_output_path_removes_only_first_occurrence() {
        assert_eq!(
            output_path(Path::new("/p/.env.example.example"), ".example"),
            PathBuf::from("/p/.env.example")
        );
    }

    #[test]
    fn test_output_path_without_suffix_is_unchanged() {
        assert_eq!(output_path(Path::new("/p/.env.template"), ".example"), PathBuf::from("/p/.env.template"));
    }

    #[test]
    fn test_document_output_path_uses_source() {
        let doc = FileDocument::parse("/p/api/.env.example", "A=1\n");
        assert_eq!(doc.output_path(".example"), PathBuf::from("/p/api/.env"));
    }
}
