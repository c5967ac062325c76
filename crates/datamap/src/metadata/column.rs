use crate::types::ColumnType;
use serde::Serialize;
use std::ops::Not;

///
/// ColumnList
///
/// Column metadata in property declaration order. The order is stable and
/// deterministic; downstream schema generation depends on it.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ColumnList {
    pub columns: Vec<ColumnMetadata>,
}

impl ColumnList {
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.property == property)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnMetadata> {
        self.columns.iter()
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a ColumnMetadata;
    type IntoIter = std::slice::Iter<'a, ColumnMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

///
/// ColumnMetadata
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ColumnMetadata {
    pub property: &'static str,
    pub name: &'static str,

    #[serde(rename = "type")]
    pub ty: ColumnType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub unique: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}
