//! Validation of user-supplied project and resource names.
//!
//! Resource names become JavaScript identifiers (`{name}Routes`) and file
//! names, so they must be valid identifiers. Project names become a
//! directory and the `name` field of `package.json`.

use std::fmt;

use crate::error::{NameKind, ScaffoldError};

const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// A validated resource name, safe to splice into identifiers and paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn parse(name: &str) -> Result<Self, ScaffoldError> {
        let invalid = |reason| ScaffoldError::InvalidName {
            kind: NameKind::Resource,
            name: name.to_string(),
            reason,
        };

        let mut chars = name.chars();
        let first = chars.next().ok_or_else(|| invalid("name is empty"))?;
        if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
            return Err(invalid("must start with a letter, '_' or '$'"));
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            return Err(invalid("only letters, digits, '_' and '$' are allowed"));
        }
        if RESERVED_WORDS.contains(&name) {
            return Err(invalid("is a reserved JavaScript word"));
        }
        Ok(ResourceName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check that `name` can be used as a project directory and package name.
pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    let invalid = |reason| ScaffoldError::InvalidName {
        kind: NameKind::Project,
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.starts_with(['.', '-', '_']) {
        return Err(invalid("must not start with '.', '-' or '_'"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(invalid("only letters, digits, '-', '_' and '.' are allowed"));
    }
    Ok(())
}
