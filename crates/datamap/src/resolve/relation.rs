use crate::{
    ConfigError,
    class::ClassDef,
    marker::RelationMarker,
    metadata::{RelationMap, RelationMetadata},
    reader::MarkerReader,
};
use convert_case::{Case, Casing};

/// Build relation metadata for every property carrying a relation marker.
///
/// Resolution reads only the marker data of the declaring class: the target
/// property is the declared counterpart name (or its deterministic
/// default), never the target's resolved metadata. Self-referencing and
/// mutually-referencing classes therefore resolve without recursion.
pub fn resolve(class: &'static ClassDef) -> Result<RelationMap, ConfigError> {
    let mut relations = RelationMap::default();

    for property in class.properties {
        let mut markers = MarkerReader::read_all::<RelationMarker>(property);

        let Some(marker) = markers.next() else {
            continue;
        };

        if markers.next().is_some() {
            return Err(ConfigError::MultipleRelationMarkers {
                class: class.def.path(),
                property: property.ident,
            });
        }

        relations.insert(property.ident, resolve_marker(class, property.ident, marker));
    }

    Ok(relations)
}

fn resolve_marker(
    class: &'static ClassDef,
    property: &'static str,
    marker: &'static RelationMarker,
) -> RelationMetadata {
    match marker {
        RelationMarker::HasOne(m) => RelationMetadata::HasOne {
            target_entity: m.target_entity,
            target_property: m
                .inversed_by
                .map_or_else(|| class.def.ident.to_case(Case::Snake), str::to_string),
            name: association_name(class, property, m.name),
        },
        RelationMarker::BelongsTo(m) => RelationMetadata::BelongsTo {
            target_entity: m.target_entity,
            target_property: m.mapped_by,
        },
        RelationMarker::HasMany(m) => RelationMetadata::HasMany {
            target_entity: m.target_entity,
            target_property: m.inversed_by,
            name: association_name(class, property, m.name),
        },
        RelationMarker::BelongsToMany(m) => RelationMetadata::BelongsToMany {
            target_entity: m.target_entity,
            target_property: m.mapped_by,
        },
    }
}

// The synthesized string becomes a join-table or foreign-key identifier
// downstream: `<snake-cased owning class short name>_<owning property name>`.
fn association_name(
    class: &'static ClassDef,
    property: &'static str,
    explicit: Option<&'static str>,
) -> String {
    explicit.map_or_else(
        || format!("{}_{property}", class.def.ident.to_case(Case::Snake)),
        str::to_string,
    )
}
