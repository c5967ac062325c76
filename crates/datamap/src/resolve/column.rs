use crate::{
    class::ClassDef,
    marker::ColumnMarker,
    metadata::{ColumnList, ColumnMetadata},
    reader::MarkerReader,
};

/// Build column metadata for every property carrying a column marker,
/// preserving property declaration order. Column name defaults to the
/// property name.
#[must_use]
pub fn resolve(class: &'static ClassDef) -> ColumnList {
    let mut columns = Vec::new();

    for property in class.properties {
        let Some(marker) = MarkerReader::read::<ColumnMarker>(property) else {
            continue;
        };

        columns.push(ColumnMetadata {
            property: property.ident,
            name: marker.name.unwrap_or(property.ident),
            ty: marker.ty,
            length: marker.length,
            unique: marker.unique,
            precision: marker.precision,
            scale: marker.scale,
        });
    }

    ColumnList { columns }
}
