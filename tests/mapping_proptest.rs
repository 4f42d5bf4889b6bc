//! Property tests for the tree mapper

use docfx::{to_docfx, summary, CodeRenderer, Node};
use pkgdoc::{
    Code, Decl, DeclKind, DirEntry, DirList, Example, Func, Note, PackageDoc, PageInfo, Type, Value,
};
use proptest::collection::{btree_map, vec};
use proptest::option;
use proptest::prelude::*;
use std::convert::Infallible;

struct EchoRenderer;

impl CodeRenderer for EchoRenderer {
    type Error = Infallible;

    fn render(&self, _page: &PageInfo, node: Node<'_>) -> Result<String, Infallible> {
        Ok(match node {
            Node::Decl(decl) => decl.source.clone(),
            Node::Commented(example) => example.node.source.clone(),
        })
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,8}"
}

fn doc_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,\n\t`'#*-]{0,60}"
}

fn func_strategy() -> impl Strategy<Value = Func> {
    (name_strategy(), doc_strategy()).prop_map(|(name, doc)| {
        let decl = Decl::new(DeclKind::Func, format!("func {name}()"));
        Func::new(name, decl).with_doc(doc)
    })
}

fn value_strategy(kind: DeclKind) -> impl Strategy<Value = Value> {
    (vec(name_strategy(), 1..4), doc_strategy()).prop_map(move |(names, doc)| {
        let decl = Decl::new(kind, format!("{} {}", kind.as_str(), names.join(", ")));
        Value::new(names, decl).with_doc(doc)
    })
}

fn type_strategy() -> impl Strategy<Value = Type> {
    (
        name_strategy(),
        doc_strategy(),
        vec(value_strategy(DeclKind::Const), 0..3),
        vec(value_strategy(DeclKind::Var), 0..3),
        vec(func_strategy(), 0..3),
        vec(func_strategy(), 0..3),
    )
        .prop_map(|(name, doc, consts, vars, funcs, methods)| {
            let decl = Decl::new(DeclKind::Type, format!("type {name} struct{{}}"));
            let mut ty = Type::new(name, decl).with_doc(doc);
            ty.consts = consts;
            ty.vars = vars;
            ty.funcs = funcs;
            ty.methods = methods;
            ty
        })
}

fn pdoc_strategy() -> impl Strategy<Value = PackageDoc> {
    (
        name_strategy(),
        doc_strategy(),
        vec(value_strategy(DeclKind::Const), 0..4),
        vec(value_strategy(DeclKind::Var), 0..4),
        vec(type_strategy(), 0..4),
        vec(func_strategy(), 0..5),
    )
        .prop_map(|(name, doc, consts, vars, types, funcs)| {
            let mut pdoc = PackageDoc::new(name.to_lowercase(), name.to_lowercase()).with_doc(doc);
            pdoc.consts = consts;
            pdoc.vars = vars;
            pdoc.types = types;
            pdoc.funcs = funcs;
            pdoc
        })
}

fn page_strategy() -> impl Strategy<Value = PageInfo> {
    let note = ("[a-z]{2,4}", doc_strategy()).prop_map(|(uid, body)| Note::new(uid, body));
    let example = (name_strategy(), "[a-z(). ]{0,20}")
        .prop_map(|(name, code)| Example::new(name, Code::new(code)));
    let dir = (name_strategy(), any::<bool>(), doc_strategy()).prop_map(|(name, has_pkg, synopsis)| {
        let entry = DirEntry::new(name.clone(), format!("src/{name}"));
        if has_pkg {
            entry.with_package(synopsis)
        } else {
            entry
        }
    });

    (
        "src/[a-z]{1,8}",
        any::<bool>(),
        option::of(pdoc_strategy()),
        btree_map("[A-Z]{2,5}", vec(note, 0..3), 0..3),
        vec(example, 0..3),
        option::of(vec(dir, 0..4)),
    )
        .prop_map(|(dirname, is_main, pdoc, notes, examples, dirs)| PageInfo {
            dirname,
            is_main,
            pdoc,
            notes,
            examples,
            dirs: dirs.map(DirList::new),
        })
}

fn func_names(funcs: &[Func]) -> Vec<&str> {
    funcs.iter().map(|f| f.name.as_str()).collect()
}

fn mapped_func_names(funcs: &[docfx::model::Func]) -> Vec<&str> {
    funcs.iter().map(|f| f.name.as_str()).collect()
}

proptest! {
    #[test]
    fn sequences_keep_length_and_order(page in page_strategy()) {
        let package = to_docfx(&page, &EchoRenderer).unwrap();

        prop_assert_eq!(&package.dir, &page.dirname);
        prop_assert_eq!(package.is_main, page.is_main);

        let notes: Vec<_> = page.notes.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        let mapped: Vec<_> = package.notes.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        prop_assert_eq!(notes, mapped);

        let dirs: Vec<_> = page.dirs.iter().flat_map(|d| d.list.iter().map(|e| e.path.as_str())).collect();
        let mapped: Vec<_> = package.dirs.iter().map(|d| d.path.as_str()).collect();
        prop_assert_eq!(dirs, mapped);

        match &page.pdoc {
            Some(pdoc) => {
                prop_assert_eq!(&package.import_path, &pdoc.import_path);
                prop_assert_eq!(package.examples.len(), page.examples.len());
                prop_assert_eq!(package.consts.len(), pdoc.consts.len());
                prop_assert_eq!(package.vars.len(), pdoc.vars.len());
                prop_assert_eq!(func_names(&pdoc.funcs), mapped_func_names(&package.funcs));

                prop_assert_eq!(package.types.len(), pdoc.types.len());
                for (ty, mapped) in pdoc.types.iter().zip(&package.types) {
                    prop_assert_eq!(&ty.name, &mapped.name);
                    prop_assert_eq!(&ty.decl.source, &mapped.code);
                    prop_assert_eq!(ty.consts.len(), mapped.consts.len());
                    prop_assert_eq!(ty.vars.len(), mapped.vars.len());
                    prop_assert_eq!(func_names(&ty.funcs), mapped_func_names(&mapped.funcs));
                    prop_assert_eq!(func_names(&ty.methods), mapped_func_names(&mapped.methods));
                }
                for (value, mapped) in pdoc.consts.iter().zip(&package.consts) {
                    prop_assert_eq!(&value.names, &mapped.names);
                }
            }
            None => {
                prop_assert_eq!(package.import_path.as_str(), "");
                prop_assert_eq!(package.summary.as_str(), "");
                prop_assert_eq!(package.description.as_str(), "");
                prop_assert!(package.consts.is_empty());
                prop_assert!(package.vars.is_empty());
                prop_assert!(package.types.is_empty());
                prop_assert!(package.funcs.is_empty());
                prop_assert!(package.examples.is_empty());
            }
        }
    }

    #[test]
    fn mapping_is_idempotent(page in page_strategy()) {
        let first = to_docfx(&page, &EchoRenderer).unwrap();
        let second = to_docfx(&page, &EchoRenderer).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn summary_is_a_single_trimmed_line(doc in doc_strategy()) {
        let line = summary(&doc);
        prop_assert!(!line.contains('\n'));
        prop_assert_eq!(line.trim(), line.as_str());
    }
}
