//! Documentation model of an analyzed source package
//!
//!     The analyzer walks a package directory, parses its source files and collects every
//!     exported declaration together with the comment attached to it. The result is a
//!     [PageInfo]: one page worth of documentation for one directory. This crate only defines
//!     that shape, it neither builds nor validates it.
//!
//! Structure
//!
//!     PageInfo
//!     ├── pdoc: Option<PackageDoc>     # absent for bare directories
//!     │   ├── consts / vars: [Value]   # grouped declarations
//!     │   ├── types: [Type]            # each with consts, vars, funcs, methods
//!     │   └── funcs: [Func]
//!     ├── notes: marker -> [Note]
//!     ├── examples: [Example]
//!     └── dirs: Option<DirList>
//!
//!     Declarations keep their syntax node ([Decl]) so that a code renderer can print them.
//!     Examples keep the executable body ([Code]) and the comments found inside it, since
//!     those are printed back in place.
//!
//!     Every type derives serde traits so analyzer output can be stored as JSON fixtures.

pub mod package;
pub mod syntax;

pub use package::{DirEntry, DirList, Example, Func, Note, PackageDoc, PageInfo, Type, Value};
pub use syntax::{Code, Comment, Decl, DeclKind};
