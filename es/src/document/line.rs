//! Line records and the env-file line parser

use tracing::debug;

/// Classification of a single env-file line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Blank,
    Variable,
}

/// A `KEY=VALUE` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Text before the first `=`; never empty
    pub key: String,

    /// Text after the first `=`, or `None` when the line has no `=`
    pub default_value: Option<String>,

    /// Value entered by the user, if any
    pub edited_value: Option<String>,
}

impl Variable {
    pub fn new(key: impl Into<String>, default_value: Option<String>) -> Self {
        Self {
            key: key.into(),
            default_value,
            edited_value: None,
        }
    }

    /// The value written on render.
    ///
    /// An empty edit falls back to the default, and a missing default renders empty.
    pub fn effective_value(&self) -> &str {
        match self.edited_value.as_deref() {
            Some(edited) if !edited.is_empty() => edited,
            _ => self.default_value.as_deref().unwrap_or(""),
        }
    }
}

/// One line of an env-example file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Reproduced verbatim; holds the full line text
    Comment(String),
    Blank,
    Variable(Variable),
}

impl Line {
    pub fn kind(&self) -> LineKind {
        match self {
            Line::Comment(_) => LineKind::Comment,
            Line::Blank => LineKind::Blank,
            Line::Variable(_) => LineKind::Variable,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Line::Variable(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_variable_mut(&mut self) -> Option<&mut Variable> {
        match self {
            Line::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// Classify a single line (without its terminating newline)
    pub fn classify(text: &str) -> Self {
        if text.starts_with('#') {
            return Line::Comment(text.to_string());
        }
        if text.is_empty() {
            return Line::Blank;
        }

        match text.split_once('=') {
            // `=value` has no key to prompt for; keep it as opaque text
            Some(("", _)) => Line::Comment(text.to_string()),
            Some((key, value)) => Line::Variable(Variable::new(key, Some(value.to_string()))),
            None => Line::Variable(Variable::new(text, None)),
        }
    }
}

/// Parse env-file content into one record per line.
///
/// A single trailing newline terminates the last line rather than starting a new
/// one, so `"A=1\n"` is one record. The empty string is one blank record.
pub fn parse(content: &str) -> Vec<Line> {
    let body = content.strip_suffix('\n').unwrap_or(content);
    let lines: Vec<Line> = body.split('\n').map(Line::classify).collect();
    debug!(len = content.len(), records = lines.len(), "parse: done");
    lines
}
