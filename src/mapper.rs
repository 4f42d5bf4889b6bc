//! Maps an analyzed package onto the output tree.
//!
//! The walk is top-down over [PageInfo] and builds the [model] bottom-up. Every documented
//! entity gets its summary and description from the [TextRenderer] and its code from the
//! caller's [CodeRenderer]. Sequences map one to one: same length, same order, nothing
//! filtered or merged.
//!
//! The only way mapping can fail is the code renderer failing. Its error is returned as is
//! and stops the walk.

use crate::model;
use crate::render::{CodeRenderer, CommentedNode, Node};
use crate::text::TextRenderer;
use pkgdoc::{DirList, Example, Func, Note, PageInfo, Type, Value};
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace};

/// Maps a page with the default text options.
pub fn to_docfx<R: CodeRenderer>(page: &PageInfo, renderer: &R) -> Result<model::Package, R::Error> {
    DocfxMapper::new(renderer).map_package(page)
}

/// Tree mapper bound to one code renderer.
///
/// Holds no state between calls, so one mapper can serve any number of pages, from
/// several threads if the renderer allows it.
pub struct DocfxMapper<'r, R> {
    renderer: &'r R,
    text: TextRenderer,
}

impl<'r, R: CodeRenderer> DocfxMapper<'r, R> {
    pub fn new(renderer: &'r R) -> Self {
        Self {
            renderer,
            text: TextRenderer::default(),
        }
    }

    /// Use a text renderer with non-default options, e.g. built from configuration.
    pub fn with_text_renderer(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    /// Maps a whole page.
    ///
    /// Notes and child directories are always mapped. Everything else needs the primary
    /// documentation section and stays empty without it.
    #[instrument(level = "debug", skip_all, fields(dir = %page.dirname))]
    pub fn map_package(&self, page: &PageInfo) -> Result<model::Package, R::Error> {
        let mut package = model::Package {
            is_main: page.is_main,
            dir: page.dirname.clone(),
            notes: self.map_notes(&page.notes),
            dirs: self.map_dirs(page.dirs.as_ref()),
            ..model::Package::default()
        };

        match &page.pdoc {
            Some(pdoc) => {
                package.import_path = pdoc.import_path.clone();
                package.summary = self.text.summary(&pdoc.doc);
                package.description = self.text.description(&pdoc.doc);
                package.examples = self.map_examples(&page.examples, page)?;
                package.consts = self.map_values(&pdoc.consts, page)?;
                package.vars = self.map_values(&pdoc.vars, page)?;
                package.funcs = self.map_funcs(&pdoc.funcs, page)?;
                package.types = self.map_types(&pdoc.types, page)?;
            }
            None => debug!("no package documentation, mapping directory only"),
        }

        debug!(
            import_path = %package.import_path,
            consts = package.consts.len(),
            vars = package.vars.len(),
            types = package.types.len(),
            funcs = package.funcs.len(),
            examples = package.examples.len(),
            notes = package.notes.len(),
            dirs = package.dirs.len(),
            "mapped package"
        );
        Ok(package)
    }

    pub fn map_values(&self, values: &[Value], page: &PageInfo) -> Result<Vec<model::Value>, R::Error> {
        values.iter().map(|value| self.map_value(value, page)).collect()
    }

    pub fn map_value(&self, value: &Value, page: &PageInfo) -> Result<model::Value, R::Error> {
        Ok(model::Value {
            names: value.names.clone(),
            summary: self.text.summary(&value.doc),
            description: self.text.description(&value.doc),
            code: self.renderer.render(page, Node::Decl(&value.decl))?,
        })
    }

    pub fn map_types(&self, types: &[Type], page: &PageInfo) -> Result<Vec<model::Type>, R::Error> {
        types.iter().map(|ty| self.map_type(ty, page)).collect()
    }

    /// Maps a type and the consts, vars, constructors and methods grouped under it.
    pub fn map_type(&self, ty: &Type, page: &PageInfo) -> Result<model::Type, R::Error> {
        trace!(
            name = %ty.name,
            funcs = ty.funcs.len(),
            methods = ty.methods.len(),
            "mapping type"
        );
        Ok(model::Type {
            name: ty.name.clone(),
            summary: self.text.summary(&ty.doc),
            description: self.text.description(&ty.doc),
            code: self.renderer.render(page, Node::Decl(&ty.decl))?,
            consts: self.map_values(&ty.consts, page)?,
            vars: self.map_values(&ty.vars, page)?,
            funcs: self.map_funcs(&ty.funcs, page)?,
            methods: self.map_funcs(&ty.methods, page)?,
        })
    }

    pub fn map_funcs(&self, funcs: &[Func], page: &PageInfo) -> Result<Vec<model::Func>, R::Error> {
        funcs.iter().map(|func| self.map_func(func, page)).collect()
    }

    pub fn map_func(&self, func: &Func, page: &PageInfo) -> Result<model::Func, R::Error> {
        Ok(model::Func {
            name: func.name.clone(),
            summary: self.text.summary(&func.doc),
            description: self.text.description(&func.doc),
            code: self.renderer.render(page, Node::Decl(&func.decl))?,
        })
    }

    pub fn map_examples(
        &self,
        examples: &[Example],
        page: &PageInfo,
    ) -> Result<Vec<model::Example>, R::Error> {
        examples
            .iter()
            .map(|example| self.map_example(example, page))
            .collect()
    }

    /// The example code is rendered together with its comments.
    pub fn map_example(&self, example: &Example, page: &PageInfo) -> Result<model::Example, R::Error> {
        let node = Node::Commented(CommentedNode {
            node: &example.code,
            comments: &example.comments,
        });
        Ok(model::Example {
            name: example.name.clone(),
            code: self.renderer.render(page, node)?,
        })
    }

    /// Marker keys are copied as they are, whatever their spelling.
    pub fn map_notes(&self, notes: &BTreeMap<String, Vec<Note>>) -> BTreeMap<String, Vec<model::Note>> {
        notes
            .iter()
            .map(|(marker, notes)| {
                let mapped = notes
                    .iter()
                    .map(|note| model::Note {
                        uid: note.uid.clone(),
                        description: note.body.clone(),
                    })
                    .collect();
                (marker.clone(), mapped)
            })
            .collect()
    }

    /// A missing listing maps to no directories.
    pub fn map_dirs(&self, dirs: Option<&DirList>) -> Vec<model::Directory> {
        let Some(dirs) = dirs else {
            return Vec::new();
        };
        dirs.list
            .iter()
            .map(|dir| model::Directory {
                name: dir.name.clone(),
                path: dir.path.clone(),
                summary: dir.synopsis.clone(),
                has_pkg: dir.has_pkg,
            })
            .collect()
    }
}
