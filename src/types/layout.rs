//! Layout templates for keyboard diagrams.
//!
//! A layout is ASCII art with `KEY_NN` placeholders where slot `NN` of a
//! layer is drawn. Builtin layouts are static; projects can add their own
//! through `keyart.yaml`.

use std::collections::BTreeSet;

use crate::error::{KeyartError, Result};
use crate::render::find_placeholders;

/// Name of the default layout.
pub const DEFAULT_LAYOUT: &str = "EXTRA_WIDE";

/// ErgoDox EZ, 76 slots, labels six characters wide.
const EXTRA_WIDE: &str = r#".--------------------------------------------------------------. .--------------------------------------------------------------.
| KEY_00 | KEY_01 | KEY_02 | KEY_03 | KEY_04 | KEY_05 | KEY_06 | | KEY_38 | KEY_39 | KEY_40 | KEY_41 | KEY_42 | KEY_43 | KEY_44 |
!--------+--------+--------+--------+--------+-----------------! !--------+--------+--------+--------+--------+-----------------!
| KEY_07 | KEY_08 | KEY_09 | KEY_10 | KEY_11 | KEY_12 | KEY_13 | ! KEY_45 | KEY_46 | KEY_47 | KEY_48 | KEY_49 | KEY_50 | KEY_51 |
!--------+--------+--------+--------x--------x--------!        ! !        !--------x--------x--------+--------+--------+--------!
| KEY_14 | KEY_15 | KEY_16 | KEY_17 | KEY_18 | KEY_19 |--------! !--------! KEY_52 | KEY_53 | KEY_54 | KEY_55 | KEY_56 | KEY_57 |
!--------+--------+--------+--------x--------x--------! KEY_26 ! ! KEY_58 !--------x--------x--------+--------+--------+--------!
| KEY_20 | KEY_21 | KEY_22 | KEY_23 | KEY_24 | KEY_25 |        | !        | KEY_59 | KEY_60 | KEY_61 | KEY_62 | KEY_63 | KEY_64 |
'--------+--------+--------+--------+--------+-----------------' '-----------------+--------+--------+--------+--------+--------'
 | KEY_27| KEY_28 | KEY_29 | KEY_30 | KEY_31 |                                     ! KEY_65 | KEY_66 | KEY_67 | KEY_68 | KEY_69|
 '-------------------------------------------'                                     '-------------------------------------------'
                                             .-----------------. .-----------------.
                                             | KEY_32 | KEY_33 | ! KEY_70 | KEY_71 |
                                    .--------+--------+--------! !--------+--------+--------.
                                    !        !        | KEY_34 | ! KEY_72 |        !        !
                                    ! KEY_35 ! KEY_36 !--------! !--------! KEY_74 ! KEY_75 !
                                    |        |        | KEY_37 | ! KEY_73 |        |        |
                                    '--------------------------' '--------------------------'
"#;

/// A named diagram template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTemplate {
    /// Layout name (e.g. `EXTRA_WIDE`).
    pub name: String,
    /// ASCII art with `KEY_NN` placeholders.
    pub diagram: String,
}

impl LayoutTemplate {
    pub fn new(name: impl Into<String>, diagram: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diagram: diagram.into(),
        }
    }

    /// Distinct slots that have a placeholder.
    pub fn slots(&self) -> BTreeSet<usize> {
        find_placeholders(&self.diagram).map(|p| p.slot).collect()
    }

    /// Number of distinct slots.
    pub fn slot_count(&self) -> usize {
        self.slots().len()
    }
}

/// Collection of builtin layouts.
pub struct BuiltinLayouts;

impl BuiltinLayouts {
    /// Get all builtin layouts.
    pub fn all() -> Vec<LayoutTemplate> {
        vec![LayoutTemplate::new(DEFAULT_LAYOUT, EXTRA_WIDE)]
    }

    /// Get a builtin layout by name.
    pub fn get(name: &str) -> Option<LayoutTemplate> {
        Self::all().into_iter().find(|l| l.name == name)
    }
}

/// Builtin layouts plus project layouts.
///
/// Project layouts shadow builtins with the same name.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: Vec<LayoutTemplate>,
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl LayoutRegistry {
    /// Registry with only the builtin layouts.
    pub fn with_builtins() -> Self {
        Self {
            layouts: BuiltinLayouts::all(),
        }
    }

    /// Add or replace a layout.
    pub fn add(&mut self, layout: LayoutTemplate) {
        match self.layouts.iter_mut().find(|l| l.name == layout.name) {
            Some(existing) => *existing = layout,
            None => self.layouts.push(layout),
        }
    }

    /// Look up a layout by name.
    pub fn get(&self, name: &str) -> Result<&LayoutTemplate> {
        self.layouts
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| KeyartError::Config {
                message: format!("Unknown layout: {}", name),
                help: Some(format!("Available layouts: {}", self.names().join(", "))),
            })
    }

    /// Layout names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.layouts.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutTemplate> {
        self.layouts.iter()
    }
}
