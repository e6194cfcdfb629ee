//! Lookup table of glazing materials.
//!
//! A catalog is built once by the host application and handed to the engine
//! by reference; the engine only reads from it.

use crate::{Error, MaterialSpec, Result};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// Identifier of clear float glass in the standard catalog.
pub const GLASS_CLEAR: &str = "glass-clear";
/// Identifier of tinted glass in the standard catalog.
pub const GLASS_TINTED: &str = "glass-tinted";
/// Identifier of low-emissivity glass in the standard catalog.
pub const GLASS_LOW_E: &str = "glass-low-e";
/// Identifier of reflective glass in the standard catalog.
pub const GLASS_REFLECTIVE: &str = "glass-reflective";

/// A catalog entry: display name plus physical properties.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    /// Human-readable name
    pub name: String,
    /// Optical and commercial properties
    pub spec: MaterialSpec,
}

/// Read-only map from material identifier to [`MaterialSpec`].
///
/// # Example
/// ```
/// # use daylighting::catalog::{MaterialCatalog, GLASS_LOW_E};
/// let catalog = MaterialCatalog::standard();
/// let low_e = catalog.require(GLASS_LOW_E).unwrap();
/// assert_eq!(low_e.transmittance(), 0.7);
/// assert!(catalog.require("glass-frosted").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl MaterialCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The four glazing types offered by default.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            GLASS_CLEAR,
            "Glass clear",
            MaterialSpec::from_parts(0.9, 100.0, 0.7),
        );
        catalog.insert(
            GLASS_TINTED,
            "Glass tinted",
            MaterialSpec::from_parts(0.6, 150.0, 0.8),
        );
        catalog.insert(
            GLASS_LOW_E,
            "Glass low e",
            MaterialSpec::from_parts(0.7, 200.0, 0.9),
        );
        catalog.insert(
            GLASS_REFLECTIVE,
            "Glass reflective",
            MaterialSpec::from_parts(0.4, 250.0, 0.85),
        );
        catalog
    }

    /// Adds or replaces a material. Returns the previous entry, if any.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        spec: MaterialSpec,
    ) -> Option<CatalogEntry> {
        self.entries.insert(
            id.into(),
            CatalogEntry {
                name: name.into(),
                spec,
            },
        )
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_material(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        spec: MaterialSpec,
    ) -> Self {
        self.insert(id, name, spec);
        self
    }

    /// Looks up a material's properties.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<MaterialSpec> {
        self.entries.get(id).map(|entry| entry.spec)
    }

    /// Looks up a material, failing for unknown identifiers.
    ///
    /// # Errors
    /// Returns `UnknownMaterial` if `id` is not in the catalog.
    pub fn require(&self, id: &str) -> Result<MaterialSpec> {
        self.get(id).ok_or_else(|| Error::unknown_material(id))
    }

    /// Looks up the full entry including the display name.
    #[must_use]
    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Whether the catalog knows `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(id, entry)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = MaterialCatalog::standard();
        assert_eq!(catalog.len(), 4);

        let clear = catalog.get(GLASS_CLEAR).unwrap();
        assert_eq!(clear.transmittance(), 0.9);
        assert_eq!(clear.cost(), 100.0);
        assert_eq!(clear.sustainability(), 0.7);

        let reflective = catalog.entry(GLASS_REFLECTIVE).unwrap();
        assert_eq!(reflective.name, "Glass reflective");
        assert_eq!(reflective.spec.transmittance(), 0.4);

        assert_eq!(catalog.get(GLASS_TINTED).unwrap().cost(), 150.0);
        assert_eq!(catalog.get(GLASS_LOW_E).unwrap().sustainability(), 0.9);
    }

    #[test]
    fn test_unknown_material() {
        let catalog = MaterialCatalog::standard();
        assert!(catalog.get("glass-frosted").is_none());
        assert!(!catalog.contains("glass-frosted"));
        assert_eq!(
            catalog.require("glass-frosted"),
            Err(Error::unknown_material("glass-frosted"))
        );
    }

    #[test]
    fn test_custom_catalog() {
        let triple = MaterialSpec::new(0.5, 400.0, 0.95).unwrap();
        let catalog = MaterialCatalog::new().with_material("glass-triple", "Triple glazing", triple);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.require("glass-triple"), Ok(triple));
        assert!(MaterialCatalog::new().is_empty());
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = MaterialCatalog::standard();
        let cheaper = MaterialSpec::new(0.9, 80.0, 0.7).unwrap();
        let previous = catalog.insert(GLASS_CLEAR, "Glass clear", cheaper).unwrap();

        assert_eq!(previous.spec.cost(), 100.0);
        assert_eq!(catalog.get(GLASS_CLEAR).unwrap().cost(), 80.0);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_iteration_order() {
        let catalog = MaterialCatalog::standard();
        let ids: alloc::vec::Vec<&str> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            [GLASS_CLEAR, GLASS_LOW_E, GLASS_REFLECTIVE, GLASS_TINTED]
        );
    }
}
