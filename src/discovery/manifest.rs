//! Project configuration (keyart.yaml) parsing.
//!
//! The manifest sets parser options, the default layout, the default output
//! directory and extra layout templates.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KeyartError, Result};
use crate::parser::{ParserOptions, DEFAULT_CONSTRUCTORS};
use crate::types::{LayoutRegistry, LayoutTemplate, DEFAULT_LAYOUT};

/// Project configuration loaded from keyart.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Recognized constructor calls (`"LAYOUT_moonlander("`).
    pub constructors: Vec<String>,

    /// Upper-case layer definitions before matching constructors.
    pub normalize_case: bool,

    /// Default layout name.
    pub layout: String,

    /// Default output directory for rendered diagrams.
    pub output: Option<PathBuf>,

    /// Directory names skipped while scanning for keymaps.
    pub excludes: Vec<String>,

    /// Extra layout templates, name -> ASCII art.
    pub layouts: BTreeMap<String, String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            constructors: DEFAULT_CONSTRUCTORS.iter().map(|c| c.to_string()).collect(),
            normalize_case: false,
            layout: DEFAULT_LAYOUT.to_string(),
            output: None,
            excludes: vec![],
            layouts: BTreeMap::new(),
        }
    }
}

impl Manifest {
    /// Load manifest from a keyart.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| KeyartError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| KeyartError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check keyart.yaml syntax".to_string()),
        })?;

        if manifest.constructors.is_empty() {
            return Err(KeyartError::Config {
                message: "constructors must not be empty".to_string(),
                help: Some("List at least one constructor, e.g. `LAYOUT(`".to_string()),
            });
        }

        Ok(manifest)
    }

    /// Parser options described by this manifest.
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions::default()
            .with_constructors(self.constructors.iter().cloned())
            .with_normalize_case(self.normalize_case)
    }

    /// Builtin layouts plus the layouts defined here.
    pub fn layout_registry(&self) -> LayoutRegistry {
        let mut registry = LayoutRegistry::with_builtins();
        for (name, diagram) in &self.layouts {
            registry.add(LayoutTemplate::new(name.clone(), diagram.clone()));
        }
        registry
    }

    /// Check if a path passes through an excluded directory.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.components().any(|component| {
            let name = component.as_os_str().to_string_lossy();
            self.excludes.iter().any(|excluded| *excluded == name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert_eq!(manifest.layout, "EXTRA_WIDE");
        assert_eq!(manifest.parser_options(), ParserOptions::default());
        assert!(manifest.output.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
constructors: ["LAYOUT_moonlander"]
normalize_case: true
layout: TINY
output: diagrams
excludes: [default]
layouts:
  TINY: "| KEY_00 | KEY_01 |"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        let options = manifest.parser_options();
        assert_eq!(options.constructors, vec!["LAYOUT_moonlander(".to_string()]);
        assert!(options.normalize_case);
        assert_eq!(manifest.output, Some(PathBuf::from("diagrams")));

        let registry = manifest.layout_registry();
        assert_eq!(registry.get(&manifest.layout).unwrap().slot_count(), 2);
        assert!(registry.get(DEFAULT_LAYOUT).is_ok());
    }

    #[test]
    fn test_parse_partial_manifest_keeps_defaults() {
        let manifest = Manifest::parse("normalize_case: true").unwrap();

        assert!(manifest.normalize_case);
        assert_eq!(manifest.constructors.len(), 3);
        assert_eq!(manifest.layout, DEFAULT_LAYOUT);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Manifest::parse("constructors: [unclosed").unwrap_err();

        assert!(matches!(err, KeyartError::Config { .. }));
    }

    #[test]
    fn test_parse_empty_constructors() {
        assert!(Manifest::parse("constructors: []").is_err());
    }

    #[test]
    fn test_is_excluded() {
        let manifest = Manifest {
            excludes: vec!["default".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("ergodox_ez/keymaps/default/keymap.c")));
        assert!(!manifest.is_excluded(Path::new("ergodox_ez/keymaps/arlenk/keymap.c")));
    }
}
