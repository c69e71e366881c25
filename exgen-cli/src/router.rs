//! Scanning and patching of the router-aggregator file (`src/routes/index.js`).
//!
//! A generated project keeps every resource router wired into one file with
//! this shape:
//!
//! ```text
//! import { Router } from 'express';
//! import userRoutes from './user.js';
//! const router = Router();
//! router.use('/user', userRoutes);
//! export default router;
//! ```
//!
//! [`RouterAnchors::scan`] tokenizes that file line by line and records the
//! structural anchors (last import statement, router declaration, export).
//! [`plan`] then splices in one import and one mount statement for a
//! resource, each guarded so that repeated runs never duplicate them.

use crate::error::{Anchor, PatchError};

pub const ROUTER_DECLARATION: &str = "const router = Router();";
pub const EXPORT_STATEMENT: &str = "export default router;";

/// Byte span of a single line inside the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// 1-based line number.
    pub number: usize,
    /// Offset of the first byte of the line.
    pub start: usize,
    /// Offset just past the line content, before any `\r\n` / `\n`.
    pub content_end: usize,
    /// Offset of the next line (past the line break, if any).
    pub end: usize,
}

impl LineSpan {
    fn has_line_break(&self) -> bool {
        self.end > self.content_end
    }
}

/// An `import ...` statement found in the router file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Default binding (`userRoutes` in `import userRoutes from './user.js'`).
    pub binding: Option<String>,
    /// Module specifier, without quotes.
    pub module: Option<String>,
    /// Line on which the statement starts.
    pub line: usize,
}

/// A `router.use('<path>', <binding>)` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountStatement {
    pub path: String,
    pub binding: String,
    pub line: usize,
}

/// Structural anchors of a router-aggregator file.
#[derive(Debug, Clone)]
pub struct RouterAnchors {
    imports: Vec<ImportStatement>,
    mounts: Vec<MountStatement>,
    last_import: Option<LineSpan>,
    declaration: LineSpan,
    export: LineSpan,
    line_break: &'static str,
}

impl RouterAnchors {
    /// Scan `source` and locate its anchors.
    ///
    /// Returns [`PatchError::MissingAnchor`] when the router declaration or
    /// the export line is absent, and [`PatchError::ExportBeforeDeclaration`]
    /// when the export comes first. Only the first declaration and the first
    /// export are considered.
    pub fn scan(source: &str) -> Result<Self, PatchError> {
        let mut imports = Vec::new();
        let mut mounts = Vec::new();
        let mut last_import = None;
        let mut declaration = None;
        let mut export = None;
        let mut open: Option<OpenStatement> = None;

        for (span, text) in lines(source) {
            let code = strip_line_comment(text).trim();

            if let Some(mut statement) = open.take() {
                statement.text.push(' ');
                statement.text.push_str(code);
                match statement.kind {
                    OpenKind::Import if code.contains('}') => {
                        imports.push(ImportStatement::parse(&statement.text, statement.first_line));
                        last_import = Some(span);
                    }
                    OpenKind::Mount if code.contains(')') => {
                        mounts.extend(MountStatement::parse(&statement.text, statement.first_line));
                    }
                    _ => open = Some(statement),
                }
                continue;
            }

            if is_import(code) {
                if code.contains('{') && !code.contains('}') && !code.contains(" from ") {
                    open = Some(OpenStatement::new(OpenKind::Import, span.number, code));
                } else {
                    imports.push(ImportStatement::parse(code, span.number));
                    last_import = Some(span);
                }
            } else if code == ROUTER_DECLARATION {
                declaration.get_or_insert(span);
            } else if code == EXPORT_STATEMENT {
                export.get_or_insert(span);
            } else if code.starts_with("router.use(") && !code.contains(')') {
                open = Some(OpenStatement::new(OpenKind::Mount, span.number, code));
            } else if let Some(mount) = MountStatement::parse(code, span.number) {
                mounts.push(mount);
            }
        }

        // An import brace that never closes runs to the end of the file.
        if let Some(statement) = open {
            if statement.kind == OpenKind::Import {
                imports.push(ImportStatement::parse(&statement.text, statement.first_line));
                last_import = lines(source).last().map(|(span, _)| span);
            }
        }

        let declaration = declaration.ok_or(PatchError::MissingAnchor(Anchor::RouterDeclaration))?;
        let export = export.ok_or(PatchError::MissingAnchor(Anchor::Export))?;
        if export.number < declaration.number {
            return Err(PatchError::ExportBeforeDeclaration {
                declaration_line: declaration.number,
                export_line: export.number,
            });
        }

        tracing::debug!(
            imports = imports.len(),
            mounts = mounts.len(),
            declaration_line = declaration.number,
            export_line = export.number,
            "scanned router file"
        );

        Ok(RouterAnchors {
            imports,
            mounts,
            last_import,
            declaration,
            export,
            line_break: if source.contains("\r\n") { "\r\n" } else { "\n" },
        })
    }

    pub fn imports(&self) -> &[ImportStatement] {
        &self.imports
    }

    pub fn mounts(&self) -> &[MountStatement] {
        &self.mounts
    }

    pub fn declaration(&self) -> LineSpan {
        self.declaration
    }

    pub fn export(&self) -> LineSpan {
        self.export
    }

    /// Module imported under `binding`, if any.
    pub fn module_for(&self, binding: &str) -> Option<&str> {
        self.imports
            .iter()
            .find(|import| import.binding.as_deref() == Some(binding))
            .and_then(|import| import.module.as_deref())
    }

    fn has_import(&self, binding: &str) -> bool {
        self.imports
            .iter()
            .any(|import| import.binding.as_deref() == Some(binding))
    }

    fn has_mount(&self, path: &str) -> bool {
        self.mounts.iter().any(|mount| mount.path == path)
    }

    /// Offset and text for a new import line: right after the last import
    /// statement, or at the very start of the file when there is none.
    fn import_insertion(&self, statement: &str) -> (usize, String) {
        match self.last_import {
            Some(span) if span.has_line_break() => {
                (span.end, format!("{statement}{}", self.line_break))
            }
            Some(span) => (span.end, format!("{}{statement}", self.line_break)),
            None => (0, format!("{statement}{}", self.line_break)),
        }
    }
}

/// Result of patching a router file for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub text: String,
    pub import_added: bool,
    pub mount_added: bool,
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        self.import_added || self.mount_added
    }
}

/// Binding name under which a resource router is imported.
pub fn routes_binding(resource: &str) -> String {
    format!("{resource}Routes")
}

/// Wire `resource` into the router file, returning the patched text.
pub fn patch(source: &str, resource: &str) -> Result<String, PatchError> {
    plan(source, resource).map(|outcome| outcome.text)
}

/// Wire `resource` into the router file.
///
/// Adds `import {resource}Routes from './{resource}.js';` after the last
/// import statement, unless that binding is already imported. Then adds
/// `router.use('/{resource}', {resource}Routes);` right before the export
/// line, unless a mount on `/{resource}` already exists. The mount offset is
/// taken from a fresh scan of the import-patched text.
///
/// The whole file is validated before anything is spliced, so an error
/// never comes with partially patched text.
pub fn plan(source: &str, resource: &str) -> Result<PatchOutcome, PatchError> {
    let binding = routes_binding(resource);
    let mut anchors = RouterAnchors::scan(source)?;
    let mut text = source.to_string();

    let import_added = !anchors.has_import(&binding);
    if import_added {
        let statement = format!("import {binding} from './{resource}.js';");
        let (offset, line) = anchors.import_insertion(&statement);
        text.insert_str(offset, &line);
        anchors = RouterAnchors::scan(&text)?;
    }

    let mount_path = format!("/{resource}");
    let mount_added = !anchors.has_mount(&mount_path);
    if mount_added {
        let line = format!(
            "router.use('{mount_path}', {binding});{}",
            anchors.line_break
        );
        text.insert_str(anchors.export.start, &line);
    }

    Ok(PatchOutcome {
        text,
        import_added,
        mount_added,
    })
}

fn lines(source: &str) -> impl Iterator<Item = (LineSpan, &str)> {
    let mut offset = 0;
    source
        .split_inclusive('\n')
        .enumerate()
        .map(move |(index, raw)| {
            let text = raw.trim_end_matches(['\n', '\r']);
            let span = LineSpan {
                number: index + 1,
                start: offset,
                content_end: offset + text.len(),
                end: offset + raw.len(),
            };
            offset = span.end;
            (span, text)
        })
}

/// Statement spanning several lines, accumulated until it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenKind {
    /// `import {` waiting for its `}`.
    Import,
    /// `router.use(` waiting for its `)`.
    Mount,
}

struct OpenStatement {
    kind: OpenKind,
    first_line: usize,
    text: String,
}

impl OpenStatement {
    fn new(kind: OpenKind, first_line: usize, code: &str) -> Self {
        OpenStatement {
            kind,
            first_line,
            text: code.to_string(),
        }
    }
}

/// `line` without a trailing `//` comment. Slashes inside string or
/// template literals are kept.
fn strip_line_comment(line: &str) -> &str {
    let mut quote = None;
    let mut escaped = false;
    let mut prev_slash = false;
    for (at, c) in line.char_indices() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => quote = Some(c),
                '/' if prev_slash => return &line[..at - 1],
                _ => {}
            },
        }
        prev_slash = quote.is_none() && c == '/' && !prev_slash;
    }
    line
}

fn is_import(trimmed: &str) -> bool {
    trimmed.strip_prefix("import").is_some_and(|rest| {
        rest.starts_with(|c: char| c.is_whitespace() || matches!(c, '{' | '*' | '\'' | '"'))
    })
}

fn leading_identifier(s: &str) -> &str {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(s.len());
    &s[..end]
}

/// Contents of the first quoted string in `s` (single or double quotes).
fn quoted(s: &str) -> Option<&str> {
    let open = s.find(['\'', '"'])?;
    let quote = s[open..].chars().next()?;
    let rest = &s[open + 1..];
    let close = rest.find(quote)?;
    Some(&rest[..close])
}

impl ImportStatement {
    fn parse(statement: &str, line: usize) -> Self {
        let rest = statement["import".len()..].trim_start();
        let binding = leading_identifier(rest);
        let specifier = match rest.rfind(" from ") {
            Some(at) => &rest[at..],
            None => rest,
        };
        ImportStatement {
            binding: (!binding.is_empty()).then(|| binding.to_string()),
            module: quoted(specifier).map(str::to_string),
            line,
        }
    }
}

impl MountStatement {
    fn parse(trimmed: &str, line: usize) -> Option<Self> {
        let args = trimmed.strip_prefix("router.use(")?.trim_start();
        if !args.starts_with(['\'', '"']) {
            return None;
        }
        let path = quoted(args)?;
        let after_path = &args[path.len() + 2..];
        let binding = leading_identifier(after_path.trim_start().strip_prefix(',')?.trim_start());
        if binding.is_empty() {
            return None;
        }
        Some(MountStatement {
            path: path.to_string(),
            binding: binding.to_string(),
            line,
        })
    }
}
