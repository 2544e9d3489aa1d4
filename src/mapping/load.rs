use super::error::MappingError;
use super::types::Mapping;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct MappingDocument {
    mapping: MappingEntry,
}

#[derive(Debug, Deserialize)]
struct MappingEntry {
    class: Option<String>,
    alias: Option<String>,
    #[serde(default)]
    id_properties: Vec<String>,
    #[serde(default)]
    hide_properties: Vec<String>,
    #[serde(default)]
    aliased_properties: BTreeMap<String, String>,
    #[serde(default)]
    urls: BTreeMap<String, Option<String>>,
    #[serde(default)]
    relationships: BTreeMap<String, BTreeMap<String, Option<String>>>,
}

impl MappingEntry {
    fn into_mapping(self, source: &Path) -> Result<Mapping, MappingError> {
        let class = self
            .class
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| MappingError::MissingClass {
                path: source.to_path_buf(),
            })?;

        let mut mapping = Mapping::new(class);
        if let Some(alias) = self.alias {
            mapping.set_alias(alias);
        }
        mapping.set_id_properties(self.id_properties);
        mapping.set_hidden_properties(self.hide_properties);
        for (property, alias) in self.aliased_properties {
            mapping.set_aliased_property(property, alias);
        }

        let mut urls = self.urls;
        let self_url = urls.remove("self").flatten().unwrap_or_default();
        let resource_url = urls
            .remove("resource")
            .flatten()
            .unwrap_or_else(|| self_url.clone());
        mapping.set_self_url(self_url);
        mapping.set_resource_url_pattern(resource_url);
        for (name, route) in urls {
            mapping.set_other_url(name, route.unwrap_or_default());
        }

        for (relationship, links) in self.relationships {
            for (link, route) in links {
                mapping.set_relationship_url(relationship.clone(), link, route.unwrap_or_default());
            }
        }

        Ok(mapping)
    }
}

/// Parse one mapping document.
///
/// `source` is only used in error messages.
pub fn parse_mapping(yaml: &str, source: impl AsRef<Path>) -> Result<Mapping, MappingError> {
    let source = source.as_ref();
    let document: MappingDocument =
        serde_yaml::from_str(yaml).map_err(|e| MappingError::Parse {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
    document.mapping.into_mapping(source)
}

/// Read and parse a single mapping file.
pub fn load_mapping_file(path: impl AsRef<Path>) -> Result<Mapping, MappingError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| MappingError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mapping = parse_mapping(&content, path)?;
    debug!(path = %path.display(), class = %mapping.class_name(), "Loaded mapping");
    Ok(mapping)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Load mappings from a file, or from every `*.yml`/`*.yaml` file in a
/// directory (non-recursive, in file name order).
pub fn load_mappings(path: impl AsRef<Path>) -> Result<Vec<Mapping>, MappingError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return load_mapping_file(path).map(|m| vec![m]);
    }

    let io_error = |e: std::io::Error| MappingError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .map_err(io_error)?
        .map(|entry| entry.map(|e| e.path()).map_err(io_error))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|p| p.is_file() && is_yaml(p))
        .collect();
    files.sort();

    let mappings = files
        .iter()
        .map(load_mapping_file)
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        dir = %path.display(),
        mappings_count = mappings.len(),
        "Loaded mapping directory"
    );
    Ok(mappings)
}
