//! Serialization of mapped packages
//!
//! The site generator reads JSON; YAML is offered for tools that prefer it. Nothing here
//! touches the filesystem, callers decide where the text goes.

use crate::error::EmitError;
use crate::model::Package;
use docfx_config::{OutputConfig, OutputFormat};

/// Serializes in the format and style the output configuration asks for.
pub fn to_string(package: &Package, output: &OutputConfig) -> Result<String, EmitError> {
    match output.format {
        OutputFormat::Json if output.pretty => to_json_pretty(package),
        OutputFormat::Json => to_json(package),
        OutputFormat::Yaml => to_yaml(package),
    }
}

pub fn to_json(package: &Package) -> Result<String, EmitError> {
    Ok(serde_json::to_string(package)?)
}

pub fn to_json_pretty(package: &Package) -> Result<String, EmitError> {
    Ok(serde_json::to_string_pretty(package)?)
}

pub fn to_yaml(package: &Package) -> Result<String, EmitError> {
    Ok(serde_yaml::to_string(package)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Func, Note};

    fn sample() -> Package {
        let mut package = Package {
            dir: "src/bytes".to_string(),
            import_path: "bytes".to_string(),
            summary: "Package bytes implements functions for byte slices.".to_string(),
            funcs: vec![Func {
                name: "Equal".to_string(),
                ..Func::default()
            }],
            ..Package::default()
        };
        package.notes.insert(
            "BUG".to_string(),
            vec![Note {
                uid: "rsc".to_string(),
                description: "Fields is slow.".to_string(),
            }],
        );
        package
    }

    #[test]
    fn compact_json_is_a_single_line() {
        let output = OutputConfig {
            format: OutputFormat::Json,
            pretty: false,
        };
        let text = to_string(&sample(), &output).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.starts_with("{\"ismain\":false,"));
        assert!(text.contains("\"importPath\":\"bytes\""));
    }

    #[test]
    fn pretty_json_is_indented() {
        let text = to_string(&sample(), &OutputConfig::default()).unwrap();
        assert!(text.contains("\n  \"dir\": \"src/bytes\","));
        let back: Package = serde_json::from_str(&text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn yaml_keeps_empty_collections() {
        let output = OutputConfig {
            format: OutputFormat::Yaml,
            pretty: true,
        };
        let text = to_string(&Package::default(), &output).unwrap();
        assert!(text.contains("consts: []"));
        assert!(text.contains("notes: {}"));

        let back: Package = serde_yaml::from_str(&to_yaml(&sample()).unwrap()).unwrap();
        assert_eq!(back, sample());
    }
}
