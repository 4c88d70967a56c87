//! Static catalog mapping hardware identifiers to marketing names.
//!
//! The catalog is built once from the literal table in the `data` module and is
//! read-only afterwards, so it can be shared across threads without locking.
//!
//! For now, we define:
//! - `ModelCatalog`: the indexed, immutable identifier -> name map.
//! - `CatalogEntry`: a serializable view of one row, used for listings.

mod data;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::{trace, warn};

use crate::family::DeviceFamily;

static CATALOG: LazyLock<ModelCatalog> = LazyLock::new(|| ModelCatalog::from_rows(data::ENTRIES));

/// One identifier -> marketing name row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub identifier: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<DeviceFamily>,
}

/// Immutable identifier -> marketing name mapping.
///
/// Lookups are exact and case-sensitive. Several identifiers may share one
/// name; every identifier appears at most once.
#[derive(Debug)]
pub struct ModelCatalog {
    rows: &'static [(&'static str, &'static str)],
    index: HashMap<&'static str, &'static str>,
}

impl ModelCatalog {
    /// The process-wide catalog, built on first use.
    pub fn global() -> &'static ModelCatalog {
        &CATALOG
    }

    fn from_rows(rows: &'static [(&'static str, &'static str)]) -> Self {
        let duplicates = duplicate_identifiers(rows);
        if !duplicates.is_empty() {
            warn!(?duplicates, "catalog rows repeat identifiers; last row wins");
        }
        let index: HashMap<_, _> = rows.iter().copied().collect();
        trace!(rows = rows.len(), indexed = index.len(), "built model catalog index");
        Self { rows, index }
    }

    /// Marketing name for `identifier`, or `None` if it is not a known key.
    ///
    /// No validation is performed; malformed input simply misses.
    pub fn name_for(&self, identifier: &str) -> Option<&'static str> {
        let name = self.index.get(identifier).copied();
        if name.is_none() {
            trace!(identifier, "identifier not in catalog");
        }
        name
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Every identifier mapping to exactly `name`, in catalog order.
    pub fn identifiers_for(&self, name: &str) -> Vec<&'static str> {
        self.rows.iter().filter(|(_, n)| *n == name).map(|(id, _)| *id).collect()
    }

    /// All rows, ordered by family and then by numeric major/minor version.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        let mut rows: Vec<_> = self.rows.to_vec();
        rows.sort_by_key(|(id, _)| sort_key(id));
        rows.into_iter()
            .map(|(identifier, name)| CatalogEntry {
                identifier: identifier.to_string(),
                name: name.to_string(),
                family: DeviceFamily::from_identifier(identifier),
            })
            .collect()
    }

    /// Rows belonging to one device family, in the same order as [`Self::entries`].
    pub fn entries_in(&self, family: DeviceFamily) -> Vec<CatalogEntry> {
        self.entries().into_iter().filter(|entry| entry.family == Some(family)).collect()
    }
}

/// Ordering key for `<Family><Major>,<Minor>` identifiers.
///
/// Unparseable numbers sort first within their family.
fn sort_key(identifier: &str) -> (Option<DeviceFamily>, u32, u32) {
    let family = DeviceFamily::from_identifier(identifier);
    let version = family.map_or(identifier, |f| &identifier[f.prefix().len()..]);
    let (major, minor) = version.split_once(',').unwrap_or((version, ""));
    (family, major.parse().unwrap_or(0), minor.parse().unwrap_or(0))
}

/// Identifiers that appear on more than one row.
fn duplicate_identifiers(rows: &[(&'static str, &'static str)]) -> Vec<&'static str> {
    let mut seen = HashMap::new();
    for (id, _) in rows {
        *seen.entry(*id).or_insert(0usize) += 1;
    }
    let mut dups: Vec<_> = seen.into_iter().filter(|(_, n)| *n > 1).map(|(id, _)| id).collect();
    dups.sort_unstable();
    dups
}
