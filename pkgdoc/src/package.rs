//! Package-level documentation entities

use crate::syntax::{Code, Comment, Decl};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the analyzer knows about one package directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Directory path the page was built for
    pub dirname: String,
    /// Whether the package is a command rather than a library
    pub is_main: bool,
    /// Primary documentation, absent when the directory has no buildable package
    pub pdoc: Option<PackageDoc>,
    /// Notes grouped by marker, e.g. "BUG" or "TODO"
    pub notes: BTreeMap<String, Vec<Note>>,
    pub examples: Vec<Example>,
    /// Child directories, absent when the listing was not computed
    pub dirs: Option<DirList>,
}

impl PageInfo {
    pub fn new(dirname: impl Into<String>) -> Self {
        Self {
            dirname: dirname.into(),
            ..Self::default()
        }
    }

    pub fn main(mut self) -> Self {
        self.is_main = true;
        self
    }

    pub fn with_pdoc(mut self, pdoc: PackageDoc) -> Self {
        self.pdoc = Some(pdoc);
        self
    }

    pub fn with_note(mut self, marker: impl Into<String>, note: Note) -> Self {
        self.notes.entry(marker.into()).or_default().push(note);
        self
    }

    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    pub fn with_dirs(mut self, dirs: DirList) -> Self {
        self.dirs = Some(dirs);
        self
    }
}

/// The primary documentation section of a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDoc {
    pub name: String,
    pub import_path: String,
    /// Package comment
    pub doc: String,
    pub consts: Vec<Value>,
    pub vars: Vec<Value>,
    pub types: Vec<Type>,
    pub funcs: Vec<Func>,
}

impl PackageDoc {
    pub fn new(name: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_path: import_path.into(),
            ..Self::default()
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_const(mut self, value: Value) -> Self {
        self.consts.push(value);
        self
    }

    pub fn with_var(mut self, value: Value) -> Self {
        self.vars.push(value);
        self
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.types.push(ty);
        self
    }

    pub fn with_func(mut self, func: Func) -> Self {
        self.funcs.push(func);
        self
    }
}

/// A grouped const or var declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub doc: String,
    /// Every identifier declared by the group, in source order
    pub names: Vec<String>,
    pub decl: Decl,
}

impl Value {
    pub fn new<I, S>(names: I, decl: Decl) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            doc: String::new(),
            names: names.into_iter().map(Into::into).collect(),
            decl,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }
}

/// A type declaration and the declarations associated with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Type {
    pub doc: String,
    pub name: String,
    pub decl: Decl,
    /// Constants of this type
    pub consts: Vec<Value>,
    /// Variables of this type
    pub vars: Vec<Value>,
    /// Package-level functions returning this type
    pub funcs: Vec<Func>,
    /// Functions bound to this type
    pub methods: Vec<Func>,
}

impl Type {
    pub fn new(name: impl Into<String>, decl: Decl) -> Self {
        Self {
            doc: String::new(),
            name: name.into(),
            decl,
            consts: Vec::new(),
            vars: Vec::new(),
            funcs: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_const(mut self, value: Value) -> Self {
        self.consts.push(value);
        self
    }

    pub fn with_var(mut self, value: Value) -> Self {
        self.vars.push(value);
        self
    }

    pub fn with_func(mut self, func: Func) -> Self {
        self.funcs.push(func);
        self
    }

    pub fn with_method(mut self, method: Func) -> Self {
        self.methods.push(method);
        self
    }
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Func {
    pub doc: String,
    pub name: String,
    pub decl: Decl,
}

impl Func {
    pub fn new(name: impl Into<String>, decl: Decl) -> Self {
        Self {
            doc: String::new(),
            name: name.into(),
            decl,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }
}

/// A marked note, such as `BUG(uid): body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub uid: String,
    pub body: String,
}

impl Note {
    pub fn new(uid: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            body: body.into(),
        }
    }
}

/// A runnable example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Name suffix, empty for the package example
    pub name: String,
    pub doc: String,
    pub code: Code,
    /// Comments lifted out of `code`
    pub comments: Vec<Comment>,
    /// Expected output, if the example declares one
    pub output: String,
}

impl Example {
    pub fn new(name: impl Into<String>, code: Code) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            code,
            comments: Vec::new(),
            output: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }
}

/// Listing of the directories below a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirList {
    pub list: Vec<DirEntry>,
}

impl DirList {
    pub fn new(list: Vec<DirEntry>) -> Self {
        Self { list }
    }
}

/// One directory in a [DirList].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Nesting depth below the listed root
    pub depth: usize,
    pub name: String,
    /// Path relative to the listed root
    pub path: String,
    pub has_pkg: bool,
    /// Synopsis of the package in the directory, if any
    pub synopsis: String,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_package(mut self, synopsis: impl Into<String>) -> Self {
        self.has_pkg = true;
        self.synopsis = synopsis.into();
        self
    }
}
