use crate::metadata::{ColumnList, ColumnMetadata, PrimaryKeyMetadata, RelationMap};
use serde::Serialize;

///
/// EntityMetadata
///
/// Resolved, immutable description of one mapped class. Constructed once
/// per class on first resolution and owned by the resolver cache for the
/// process lifetime.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EntityMetadata {
    pub class: String,
    pub table_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<&'static str>,

    pub primary_key: PrimaryKeyMetadata,
    pub columns: ColumnList,
    pub relations: RelationMap,
}

impl EntityMetadata {
    /// Column metadata backing the primary key, if its property also
    /// carries a column marker.
    #[must_use]
    pub fn pk_column(&self) -> Option<&ColumnMetadata> {
        self.columns.get(self.primary_key.property)
    }
}
