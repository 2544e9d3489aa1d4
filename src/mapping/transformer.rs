use super::error::MappingError;
use super::load::load_mappings;
use super::types::Mapping;
use std::collections::BTreeMap;
use std::path::Path;

/// Owns the mapping for every domain type a serializer can render.
///
/// Mappings are keyed by class name. Link fields are rewritten through
/// [`ResourceTransformer::mappings_mut`] during link materialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceTransformer {
    mappings: BTreeMap<String, Mapping>,
}

impl ResourceTransformer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transformer, rejecting classes mapped twice.
    pub fn from_mappings(mappings: Vec<Mapping>) -> Result<Self, MappingError> {
        let mut transformer = Self::new();
        for mapping in mappings {
            transformer.add_mapping(mapping)?;
        }
        Ok(transformer)
    }

    /// Load mappings from a file or directory (see [`load_mappings`]).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MappingError> {
        Self::from_mappings(load_mappings(path)?)
    }

    pub fn add_mapping(&mut self, mapping: Mapping) -> Result<(), MappingError> {
        if self.mappings.contains_key(mapping.class_name()) {
            return Err(MappingError::DuplicateClass {
                class: mapping.class_name().to_string(),
            });
        }
        self.mappings.insert(mapping.class_name().to_string(), mapping);
        Ok(())
    }

    #[must_use]
    pub fn mapping(&self, class_name: &str) -> Option<&Mapping> {
        self.mappings.get(class_name)
    }

    /// Find a mapping by its JSON:API type (alias or short class name).
    #[must_use]
    pub fn mapping_for_type(&self, resource_type: &str) -> Option<&Mapping> {
        self.mappings
            .values()
            .find(|m| m.resource_type() == resource_type)
    }

    pub fn mappings(&self) -> impl Iterator<Item = &Mapping> {
        self.mappings.values()
    }

    pub fn mappings_mut(&mut self) -> impl Iterator<Item = &mut Mapping> {
        self.mappings.values_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    #[must_use]
    pub fn into_mappings(self) -> Vec<Mapping> {
        self.mappings.into_values().collect()
    }
}
