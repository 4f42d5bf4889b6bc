//! Syntax nodes carried by the documentation model
//!
//! The analyzer hands these over untouched; printing them is a code renderer's job.

use serde::{Deserialize, Serialize};

/// The declaration keyword a [Decl] was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Const,
    Var,
    Type,
    Func,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Const => "const",
            DeclKind::Var => "var",
            DeclKind::Type => "type",
            DeclKind::Func => "func",
        }
    }
}

/// A declaration as it appeared in source.
///
/// For grouped const/var declarations `source` holds the whole group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decl {
    pub kind: DeclKind,
    pub source: String,
}

impl Decl {
    pub fn new(kind: DeclKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}

/// Executable body of a runnable example.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub source: String,
}

impl Code {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// A comment found inside an example body.
///
/// `offset` is the byte position in [Code::source] the comment was lifted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub offset: usize,
    pub text: String,
}

impl Comment {
    pub fn new(offset: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            text: text.into(),
        }
    }
}
