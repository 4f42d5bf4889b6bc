//! Output data model
//!
//! These types are the serialized contract with the site generator. Field names are
//! fixed by their serde attributes; sequences are plain `Vec`s and notes a `BTreeMap`, so
//! an empty collection always serializes as `[]` or `{}` and never as `null`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A documented package, or a bare directory when it has no primary documentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    #[serde(rename = "ismain")]
    pub is_main: bool,
    pub summary: String,
    pub description: String,
    #[serde(rename = "importPath")]
    pub import_path: String,
    pub dir: String,
    pub consts: Vec<Value>,
    pub types: Vec<Type>,
    pub vars: Vec<Value>,
    pub funcs: Vec<Func>,
    /// Notes keyed by marker, in marker order
    pub notes: BTreeMap<String, Vec<Note>>,
    pub examples: Vec<Example>,
    pub dirs: Vec<Directory>,
}

/// A child directory of the package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    pub name: String,
    pub path: String,
    pub summary: String,
    #[serde(rename = "haspkg")]
    pub has_pkg: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub uid: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub name: String,
    pub code: String,
}

/// A grouped const or var declaration; one declaration may introduce several names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    pub names: Vec<String>,
    pub summary: String,
    pub description: String,
    pub code: String,
}

/// A type together with the declarations grouped under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub code: String,

    pub consts: Vec<Value>,
    pub vars: Vec<Value>,
    /// Constructors: package-level functions returning this type
    pub funcs: Vec<Func>,
    pub methods: Vec<Func>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Func {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_package_serializes_every_field() {
        let value = serde_json::to_value(Package::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "ismain": false,
                "summary": "",
                "description": "",
                "importPath": "",
                "dir": "",
                "consts": [],
                "types": [],
                "vars": [],
                "funcs": [],
                "notes": {},
                "examples": [],
                "dirs": []
            })
        );
    }

    #[test]
    fn type_keeps_constructors_and_methods_apart() {
        let ty = Type {
            name: "Buffer".to_string(),
            funcs: vec![Func::default()],
            ..Type::default()
        };
        let value = serde_json::to_value(&ty).unwrap();
        assert_eq!(value["funcs"].as_array().map(Vec::len), Some(1));
        assert_eq!(value["methods"], json!([]));
        assert_eq!(value["consts"], json!([]));
        assert_eq!(value["vars"], json!([]));
    }

    #[test]
    fn directory_uses_wire_names() {
        let dir = Directory {
            name: "flate".to_string(),
            path: "compress/flate".to_string(),
            summary: "Package flate implements DEFLATE.".to_string(),
            has_pkg: true,
        };
        let value = serde_json::to_value(&dir).unwrap();
        assert_eq!(value["haspkg"], json!(true));
        assert!(value.get("has_pkg").is_none());
    }
}
