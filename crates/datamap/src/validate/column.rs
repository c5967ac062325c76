use crate::{err, error::ErrorTree, metadata::EntityMetadata};
use std::{collections::BTreeMap, sync::Arc};

/// Length belongs to string columns, precision and scale to float columns;
/// a scale without a precision is meaningless. Resolution records these
/// verbatim, so the cross-check lives here.
pub(crate) fn validate_shape(
    resolved: &BTreeMap<String, Arc<EntityMetadata>>,
    errs: &mut ErrorTree,
) {
    for (path, metadata) in resolved {
        for column in &metadata.columns {
            if column.length.is_some() && !column.ty.supports_length() {
                err!(
                    errs,
                    "column '{path}.{}' declares a length but type {} does not take one",
                    column.name,
                    column.ty
                );
            }

            if (column.precision.is_some() || column.scale.is_some())
                && !column.ty.supports_precision()
            {
                err!(
                    errs,
                    "column '{path}.{}' declares precision or scale but type {} does not take them",
                    column.name,
                    column.ty
                );
            }

            if column.scale.is_some() && column.precision.is_none() {
                err!(
                    errs,
                    "column '{path}.{}' declares a scale without a precision",
                    column.name
                );
            }
        }
    }
}
