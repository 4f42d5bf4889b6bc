//! # docfx
//!
//! Turns the documentation model of an analyzed package into a flat tree that a
//! documentation site generator can consume.
//!
//! Architecture
//!
//!     The analyzer (see the `pkgdoc` crate) hands over a [PageInfo](pkgdoc::PageInfo) per
//!     package directory. The [mapper] walks it and produces a [model::Package], asking two
//!     collaborators for text along the way:
//!
//!     - [text]: summary and plain-text description of every doc comment
//!     - [render::CodeRenderer]: source text of declarations and examples, supplied by the
//!       caller since only the caller knows how code should look on its pages
//!
//!     The result is plain data, serialized with [emit] or any serde format.
//!
//!     .
//!     ├── model.rs     # Output tree, the serialization contract
//!     ├── mapper.rs    # PageInfo -> Package
//!     ├── text.rs      # summary / description
//!     │   ├── comment.rs   # comment block parser
//!     │   └── printer.rs   # plain-text printer
//!     ├── render.rs    # CodeRenderer contract, SourceRenderer
//!     ├── emit.rs      # JSON / YAML output
//!     └── error.rs
//!
//!     This is a pure lib: no files are read or written and no logging subscriber is
//!     installed. Mapping emits `tracing` events for whichever subscriber the application
//!     sets up.
//!
//! Configuration
//!
//!     Text layout and output format come from the `docfx-config` crate:
//!
//!     ```ignore
//!     let config = docfx_config::Loader::new().with_optional_file("docfx.toml").with_env().build()?;
//!     let text = TextRenderer::new(TextOptions::from(&config.text));
//!     let package = DocfxMapper::new(&renderer).with_text_renderer(text).map_package(&page)?;
//!     let json = emit::to_string(&package, &config.output)?;
//!     ```

pub mod emit;
pub mod error;
pub mod mapper;
pub mod model;
pub mod render;
pub mod text;

pub use error::{EmitError, RenderError};
pub use mapper::{to_docfx, DocfxMapper};
pub use render::{CodeRenderer, CommentedNode, Node, SourceRenderer};
pub use text::{description, summary, TextOptions, TextRenderer};
