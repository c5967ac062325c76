use crate::{
    MAX_ASSOCIATION_NAME_LEN, MAX_COLUMN_NAME_LEN, MAX_TABLE_NAME_LEN, err, error::ErrorTree,
    metadata::EntityMetadata,
};
use std::{collections::BTreeMap, sync::Arc};

/// Table names must be unique across the schema, column names unique
/// within their entity, and every resolved identifier within its length
/// cap.
pub(crate) fn validate_naming(
    resolved: &BTreeMap<String, Arc<EntityMetadata>>,
    errs: &mut ErrorTree,
) {
    let mut tables: BTreeMap<&str, &str> = BTreeMap::new();

    for (path, metadata) in resolved {
        if metadata.table_name.len() > MAX_TABLE_NAME_LEN {
            err!(
                errs,
                "table name '{}' of '{path}' exceeds {MAX_TABLE_NAME_LEN} characters",
                metadata.table_name
            );
        }

        if let Some(prev) = tables.insert(metadata.table_name.as_str(), path.as_str()) {
            err!(
                errs,
                "duplicate table name '{}' for '{prev}' and '{path}'",
                metadata.table_name
            );
        }

        let mut columns: BTreeMap<&str, &str> = BTreeMap::new();
        for column in &metadata.columns {
            if column.name.len() > MAX_COLUMN_NAME_LEN {
                err!(
                    errs,
                    "column name '{}' of '{path}' exceeds {MAX_COLUMN_NAME_LEN} characters",
                    column.name
                );
            }

            if let Some(prev) = columns.insert(column.name, column.property) {
                err!(
                    errs,
                    "duplicate column name '{}' on properties '{prev}' and '{}' of '{path}'",
                    column.name,
                    column.property
                );
            }
        }

        for (property, relation) in metadata.relations.iter() {
            if let Some(name) = relation.name()
                && name.len() > MAX_ASSOCIATION_NAME_LEN
            {
                err!(
                    errs,
                    "association name '{name}' on '{path}.{property}' exceeds {MAX_ASSOCIATION_NAME_LEN} characters"
                );
            }
        }
    }
}
