use crate::{
    class::{ClassDef, PropertyDef},
    marker::{ClassMarkerKind, PropertyMarkerKind, RelationMarker},
};

///
/// MarkerReader
///
/// Pure lookup over the declarative markers attached to a class or a
/// property. Absence is a normal, representable outcome; callers that
/// require presence raise their own configuration errors.
///

pub struct MarkerReader;

impl MarkerReader {
    /// First class-level marker of the requested kind.
    #[must_use]
    pub fn read_class<M: ClassMarkerKind>(class: &'static ClassDef) -> Option<&'static M> {
        class.markers.iter().find_map(M::pick)
    }

    /// First property-level marker of the requested kind.
    #[must_use]
    pub fn read<M: PropertyMarkerKind>(property: &'static PropertyDef) -> Option<&'static M> {
        property.markers.iter().find_map(M::pick)
    }

    /// Every property-level marker of the requested kind, in declaration
    /// order.
    pub fn read_all<M: PropertyMarkerKind + 'static>(
        property: &'static PropertyDef,
    ) -> impl Iterator<Item = &'static M> {
        property.markers.iter().filter_map(M::pick)
    }

    /// Whichever of the four relation kinds the property carries, if any.
    #[must_use]
    pub fn read_relation(property: &'static PropertyDef) -> Option<&'static RelationMarker> {
        Self::read::<RelationMarker>(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        class::Def,
        marker::{
            BelongsTo, ClassMarker, ColumnMarker, EntityMarker, PrimaryKeyMarker, PropertyMarker,
        },
    };

    static MARKED: ClassDef = ClassDef {
        def: Def {
            module_path: "tests::reader",
            ident: "Marked",
        },
        markers: &[ClassMarker::Entity(EntityMarker {
            name: Some("marked"),
            repository: None,
        })],
        properties: &[
            PropertyDef {
                ident: "id",
                markers: &[PropertyMarker::PrimaryKey(PrimaryKeyMarker::new())],
            },
            PropertyDef {
                ident: "owner",
                markers: &[PropertyMarker::Relation(RelationMarker::BelongsTo(
                    BelongsTo {
                        target_entity: "tests::reader::Other",
                        mapped_by: "marked",
                    },
                ))],
            },
        ],
    };

    static UNMARKED: ClassDef = ClassDef {
        def: Def {
            module_path: "tests::reader",
            ident: "Unmarked",
        },
        markers: &[],
        properties: &[],
    };

    #[test]
    fn reads_present_class_marker() {
        let entity = MarkerReader::read_class::<EntityMarker>(&MARKED);
        assert_eq!(entity.and_then(|m| m.name), Some("marked"));
    }

    #[test]
    fn absence_is_none() {
        assert!(MarkerReader::read_class::<EntityMarker>(&UNMARKED).is_none());

        let id = MARKED.property("id").unwrap();
        assert!(MarkerReader::read::<ColumnMarker>(id).is_none());
        assert!(MarkerReader::read_relation(id).is_none());
    }

    #[test]
    fn reads_relation_kind() {
        let owner = MARKED.property("owner").unwrap();
        let relation = MarkerReader::read_relation(owner).unwrap();

        assert_eq!(relation.target_entity(), "tests::reader::Other");
        assert!(!relation.is_owning_side());
    }

    #[test]
    fn read_all_counts_markers() {
        let id = MARKED.property("id").unwrap();
        assert_eq!(MarkerReader::read_all::<PrimaryKeyMarker>(id).count(), 1);
        assert_eq!(MarkerReader::read_all::<ColumnMarker>(id).count(), 0);
    }
}
