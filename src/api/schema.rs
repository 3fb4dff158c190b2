//! Wire types shared by every Rancher API resource.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Link name of a resource's own URL
pub const SELF_LINK: &str = "self";

/// Link name of a schema's collection URL
pub const COLLECTION_LINK: &str = "collection";

/// Header carrying the schema collection URL on the API root document
pub const SCHEMAS_HEADER: &str = "X-API-Schemas";

/// A resource type the client knows how to look up by its schema id
pub trait ApiType: serde::de::DeserializeOwned {
    /// Schema id of the type (e.g. "project", "registry")
    const TYPE: &'static str;
}

/// Deserialize `null` as the type's default; the API sends `null` for unset fields
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fields common to every resource
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub links: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: HashMap<String, String>,
}

impl Resource {
    /// Look up a named link
    pub fn link(&self, name: &str) -> Option<&str> {
        self.links
            .get(name)
            .map(String::as_str)
            .filter(|l| !l.is_empty())
    }

    /// The resource's own URL
    pub fn self_link(&self) -> Option<&str> {
        self.link(SELF_LINK)
    }
}

/// Resource type description published by the API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(default, deserialize_with = "null_as_default")]
    pub plural_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub collection_methods: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_methods: Vec<String>,
}

impl Schema {
    pub fn id(&self) -> &str {
        &self.resource.id
    }

    pub fn collection_url(&self) -> Option<&str> {
        self.resource.link(COLLECTION_LINK)
    }
}

/// Pagination block of a collection response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub limit: Option<u64>,

    #[serde(default)]
    pub total: Option<u64>,

    #[serde(default)]
    pub next: Option<String>,
}

/// A list response
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Collection<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub links: HashMap<String, String>,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// The schema collection returned during client construction
pub type Schemas = Collection<Schema>;
