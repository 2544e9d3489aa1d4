use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Presentation rules for one domain type.
///
/// The four URL-bearing fields hold route identifiers until link
/// materialization replaces them with URL templates. An empty string means the
/// link is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    #[serde(default)]
    id_properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    hidden_properties: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    aliased_properties: BTreeMap<String, String>,
    #[serde(default)]
    resource_url_pattern: String,
    #[serde(default)]
    self_url: String,
    #[serde(default)]
    other_urls: BTreeMap<String, String>,
    #[serde(default)]
    relationship_self_url: BTreeMap<String, BTreeMap<String, String>>,
}

impl Mapping {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        self.alias = Some(alias.into());
    }

    /// JSON:API `type` for this mapping: the alias, or the last segment of the
    /// class name (`Acme\Domain\Post` and `acme::domain::Post` both give `Post`).
    #[must_use]
    pub fn resource_type(&self) -> &str {
        if let Some(alias) = self.alias.as_deref() {
            return alias;
        }
        self.class_name
            .rsplit(['\\', ':', '.'])
            .next()
            .unwrap_or(&self.class_name)
    }

    #[must_use]
    pub fn id_properties(&self) -> &[String] {
        &self.id_properties
    }

    pub fn set_id_properties(&mut self, properties: Vec<String>) {
        self.id_properties = properties;
    }

    #[must_use]
    pub fn hidden_properties(&self) -> &[String] {
        &self.hidden_properties
    }

    pub fn set_hidden_properties(&mut self, properties: Vec<String>) {
        self.hidden_properties = properties;
    }

    /// Property renames, original name to exposed name.
    #[must_use]
    pub fn aliased_properties(&self) -> &BTreeMap<String, String> {
        &self.aliased_properties
    }

    pub fn set_aliased_property(&mut self, property: impl Into<String>, alias: impl Into<String>) {
        self.aliased_properties.insert(property.into(), alias.into());
    }

    #[must_use]
    pub fn resource_url_pattern(&self) -> &str {
        &self.resource_url_pattern
    }

    pub fn set_resource_url_pattern(&mut self, value: impl Into<String>) {
        self.resource_url_pattern = value.into();
    }

    #[must_use]
    pub fn self_url(&self) -> &str {
        &self.self_url
    }

    pub fn set_self_url(&mut self, value: impl Into<String>) {
        self.self_url = value.into();
    }

    /// Named collection links (e.g. `comments` → `list_post_comments`).
    #[must_use]
    pub fn other_urls(&self) -> &BTreeMap<String, String> {
        &self.other_urls
    }

    pub fn other_urls_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.other_urls
    }

    pub fn set_other_url(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.other_urls.insert(name.into(), value.into());
    }

    /// Relationship links keyed by relationship name, then link name
    /// (`author` → `self` → `get_post_author`).
    #[must_use]
    pub fn relationship_self_url(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.relationship_self_url
    }

    pub fn relationship_self_url_mut(&mut self) -> &mut BTreeMap<String, BTreeMap<String, String>> {
        &mut self.relationship_self_url
    }

    pub fn set_relationship_url(
        &mut self,
        relationship: impl Into<String>,
        link: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.relationship_self_url
            .entry(relationship.into())
            .or_default()
            .insert(link.into(), value.into());
    }
}
