//! Parsed keymap layers.
//!
//! A `Layer` maps slot indices (positions in the constructor call, starting
//! at 0) to raw key tokens such as `KC_A` or `LT(1,KC_Z)`. A `LayerSet`
//! holds every layer of a keymap in source order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

/// A single keymap layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Layer name, verbatim from the brackets (`0`, `BASE`, `_SYMB`).
    pub name: String,

    /// Key tokens indexed by slot.
    keys: Vec<String>,
}

impl Layer {
    /// Create a layer from its key tokens in slot order.
    pub fn new(name: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            name: name.into(),
            keys,
        }
    }

    /// Get the key token at a slot.
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.keys.get(slot).map(String::as_str)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the layer has no slots.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check if every slot is blank (e.g. `KEYMAP(),`).
    pub fn is_blank(&self) -> bool {
        self.keys.iter().all(|k| k.is_empty())
    }

    /// Key tokens in slot order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Iterate over `(slot, token)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.keys.iter().enumerate().map(|(slot, key)| (slot, key.as_str()))
    }
}

impl Serialize for Layer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.keys.len()))?;
        for (slot, key) in self.iter() {
            map.serialize_entry(&slot, key)?;
        }
        map.end()
    }
}

/// All layers of a keymap, keyed by name, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerSet {
    layers: Vec<Layer>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a layer.
    ///
    /// A layer with the same name is replaced in place and returned.
    pub fn insert(&mut self, layer: Layer) -> Option<Layer> {
        match self.layers.iter_mut().find(|l| l.name == layer.name) {
            Some(existing) => {
                warn!(layer = %layer.name, "duplicate layer name, keeping the later definition");
                Some(std::mem::replace(existing, layer))
            }
            None => {
                self.layers.push(layer);
                None
            }
        }
    }

    /// Get a layer by name.
    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer names in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|l| l.name.as_str())
    }

    /// Iterate over layers in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
        self.layers.iter()
    }
}

impl<'a> IntoIterator for &'a LayerSet {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Layer> for LayerSet {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        let mut set = LayerSet::new();
        for layer in iter {
            set.insert(layer);
        }
        set
    }
}

impl Serialize for LayerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.layers.len()))?;
        for layer in &self.layers {
            map.serialize_entry(&layer.name, layer)?;
        }
        map.end()
    }
}
