//! Locating example files under a project root
//!
//! Discovery walks the root with `walkdir`, pruning anything covered by ignore
//! rules, and keeps files whose root-relative path matches the discovery glob.
//! Ignore rules come from the root's `.gitignore` (gitignore syntax, translated
//! into `glob` patterns) plus any extra entries from configuration.

use std::fs;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::DiscoveryError;

/// Default discovery glob, relative to the root
pub const DEFAULT_PATTERN: &str = "**/.env.example";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One gitignore entry compiled to a glob pattern
#[derive(Debug, Clone)]
struct IgnoreRule {
    entry: String,
    pattern: Pattern,
    /// Matched against root-relative paths instead of single names
    anchored: bool,
    dir_only: bool,
}

impl IgnoreRule {
    fn parse(line: &str) -> Result<Option<(Self, bool)>, DiscoveryError> {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (negated, body) = match line.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, line),
        };
        let body = body
            .strip_prefix("\\#")
            .map(|rest| format!("#{}", rest))
            .or_else(|| body.strip_prefix("\\!").map(|rest| format!("!{}", rest)))
            .unwrap_or_else(|| body.to_string());

        let dir_only = body.ends_with('/');
        let body = body.trim_end_matches('/');
        let anchored = body.contains('/');
        let body = body.trim_start_matches('/');
        if body.is_empty() {
            return Ok(None);
        }

        let pattern = Pattern::new(body).map_err(|source| DiscoveryError::Pattern {
            pattern: body.to_string(),
            source,
        })?;

        let rule = Self {
            entry: line.to_string(),
            pattern,
            anchored,
            dir_only,
        };
        Ok(Some((rule, negated)))
    }

    /// A path matches when it, or any directory above it, matches the entry
    fn matches(&self, rel: &str, is_dir: bool) -> bool {
        let parts: Vec<&str> = rel.split('/').collect();
        for end in 1..=parts.len() {
            let entry_is_dir = end < parts.len() || is_dir;
            if self.dir_only && !entry_is_dir {
                continue;
            }
            let candidate = if self.anchored {
                parts[..end].join("/")
            } else {
                parts[end - 1].to_string()
            };
            if self.pattern.matches_with(&candidate, MATCH_OPTIONS) {
                return true;
            }
        }
        false
    }
}

/// Ignore rules in gitignore syntax, in file order
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    /// Each rule with whether it was negated (`!entry`)
    rules: Vec<(IgnoreRule, bool)>,
}

impl IgnoreRules {
    /// Rules that ignore nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse `.gitignore`-formatted text
    pub fn parse(content: &str) -> Result<Self, DiscoveryError> {
        Self::from_entries(content.lines())
    }

    pub fn from_entries<'a, I>(entries: I) -> Result<Self, DiscoveryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rules = Self::default();
        for entry in entries {
            if let Some(parsed) = IgnoreRule::parse(entry)? {
                rules.rules.push(parsed);
            }
        }
        Ok(rules)
    }

    /// Append `other` after these rules, so its entries take precedence
    pub fn extend(&mut self, other: IgnoreRules) {
        self.rules.extend(other.rules);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check a root-relative, `/`-separated path. The last matching entry decides.
    pub fn is_ignored(&self, rel: &str, is_dir: bool) -> bool {
        let Some((rule, negated)) = self.rules.iter().rev().find(|(r, _)| r.matches(rel, is_dir)) else {
            return false;
        };
        debug!(path = %rel, entry = %rule.entry, ignored = !negated, "is_ignored: matched");
        !negated
    }
}

/// Load ignore rules from `<root>/.gitignore`
pub fn load_gitignore(root: &Path) -> Result<IgnoreRules, DiscoveryError> {
    let path = root.join(".gitignore");
    let content = fs::read_to_string(&path).map_err(|source| DiscoveryError::Gitignore {
        path: path.clone(),
        source,
    })?;
    let rules = IgnoreRules::parse(&content)?;
    info!(path = %path.display(), rules = rules.len(), "Loaded ignore rules");
    Ok(rules)
}

/// Root-relative path with `/` separators
pub fn relative_label(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Find files under `root` matching `pattern` and not covered by `rules`.
///
/// Returns absolute paths ordered by directory walk with entries sorted by name.
pub fn discover(root: &Path, pattern: &str, rules: &IgnoreRules) -> Result<Vec<PathBuf>, DiscoveryError> {
    debug!(root = %root.display(), %pattern, rules = rules.len(), "discover: called");

    let unreadable = |source| DiscoveryError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    };
    let root = root.canonicalize().map_err(unreadable)?;
    fs::read_dir(&root).map_err(unreadable)?;

    let matcher = Pattern::new(pattern).map_err(|source| DiscoveryError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let walk_root = root.clone();
    let walker = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| {
            if e.depth() == 0 {
                return true;
            }
            let rel = relative_label(&walk_root, e.path());
            !rules.is_ignored(&rel, e.file_type().is_dir())
        });

    let mut found = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(%e, "discover: skipping unreadable entry");
                continue;
            }
        };
        // Symlinks are not followed while walking, but a link to a file still counts
        let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        let rel = relative_label(&root, entry.path());
        if matcher.matches_with(&rel, MATCH_OPTIONS) {
            debug!(path = %rel, "discover: matched");
            found.push(entry.into_path());
        }
    }

    info!(root = %root.display(), found = found.len(), "Discovered example files");
    Ok(found)
}
