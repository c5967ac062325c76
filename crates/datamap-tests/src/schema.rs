//! The shared fixture graph.
//!
//! Five mutually-referencing classes covering every scalar type and all
//! four relation kinds, in both directions:
//!
//! - `Foo`: explicit table name and repository; one column per scalar
//!   type; one relation of each kind.
//! - `Bar`: owning side of a one-to-many back at `Foo` (`HasOne`).
//! - `Baz`: inverse side of a many-to-many declared on `Foo` (`BelongsToMany`).
//! - `Qux`: owning side of a many-to-many back at `Foo` (`HasMany`).
//! - `Quux`: inverse side of a one-to-many declared on `Foo` (`BelongsTo`).

use datamap::prelude::*;

///
/// Foo
///

pub static FOO: ClassDef = ClassDef {
    def: Def {
        module_path: "datamap_tests::schema",
        ident: "Foo",
    },
    markers: &[ClassMarker::Entity(EntityMarker {
        name: Some("foo_entity"),
        repository: Some("datamap_tests::schema::FooRepository"),
    })],
    properties: &[
        PropertyDef {
            ident: "id",
            markers: &[PropertyMarker::PrimaryKey(PrimaryKeyMarker::new())],
        },
        PropertyDef {
            ident: "corge",
            markers: &[PropertyMarker::Column(ColumnMarker {
                unique: true,
                ..ColumnMarker::new(ColumnType::Integer)
            })],
        },
        PropertyDef {
            ident: "grault",
            markers: &[PropertyMarker::Column(ColumnMarker {
                name: Some("grault_txt"),
                length: Some(100),
                ..ColumnMarker::new(ColumnType::String)
            })],
        },
        PropertyDef {
            ident: "garply",
            markers: &[PropertyMarker::Column(ColumnMarker {
                precision: Some(10),
                scale: Some(5),
                ..ColumnMarker::new(ColumnType::Float)
            })],
        },
        PropertyDef {
            ident: "waldo",
            markers: &[PropertyMarker::Column(ColumnMarker::new(
                ColumnType::Boolean,
            ))],
        },
        PropertyDef {
            ident: "fred",
            markers: &[PropertyMarker::Column(ColumnMarker::new(ColumnType::Array))],
        },
        PropertyDef {
            ident: "plugh",
            markers: &[PropertyMarker::Column(ColumnMarker::new(ColumnType::Text))],
        },
        PropertyDef {
            ident: "xyzzy",
            markers: &[PropertyMarker::Column(ColumnMarker::new(
                ColumnType::DateTime,
            ))],
        },
        PropertyDef {
            ident: "thud",
            markers: &[PropertyMarker::Column(ColumnMarker::new(ColumnType::Date))],
        },
        PropertyDef {
            ident: "quux",
            markers: &[PropertyMarker::Relation(RelationMarker::HasOne(HasOne {
                target_entity: "datamap_tests::schema::Quux",
                inversed_by: Some("foos"),
                name: None,
            }))],
        },
        PropertyDef {
            ident: "bazes",
            markers: &[PropertyMarker::Relation(RelationMarker::HasMany(HasMany {
                target_entity: "datamap_tests::schema::Baz",
                inversed_by: "foos",
                name: None,
            }))],
        },
        PropertyDef {
            ident: "bars",
            markers: &[PropertyMarker::Relation(RelationMarker::BelongsTo(
                BelongsTo {
                    target_entity: "datamap_tests::schema::Bar",
                    mapped_by: "foo",
                },
            ))],
        },
        PropertyDef {
            ident: "quxes",
            markers: &[PropertyMarker::Relation(RelationMarker::BelongsToMany(
                BelongsToMany {
                    target_entity: "datamap_tests::schema::Qux",
                    mapped_by: "foos",
                },
            ))],
        },
    ],
};

///
/// Bar
///

pub static BAR: ClassDef = ClassDef {
    def: Def {
        module_path: "datamap_tests::schema",
        ident: "Bar",
    },
    markers: &[ClassMarker::Entity(EntityMarker::new())],
    properties: &[
        PropertyDef {
            ident: "id",
            markers: &[PropertyMarker::PrimaryKey(PrimaryKeyMarker::new())],
        },
        PropertyDef {
            ident: "foo",
            markers: &[PropertyMarker::Relation(RelationMarker::HasOne(HasOne {
                target_entity: "datamap_tests::schema::Foo",
                inversed_by: Some("bars"),
                name: None,
            }))],
        },
    ],
};

///
/// Baz
///

pub static BAZ: ClassDef = ClassDef {
    def: Def {
        module_path: "datamap_tests::schema",
        ident: "Baz",
    },
    markers: &[ClassMarker::Entity(EntityMarker::new())],
    properties: &[
        PropertyDef {
            ident: "id",
            markers: &[PropertyMarker::PrimaryKey(PrimaryKeyMarker::new())],
        },
        PropertyDef {
            ident: "foos",
            markers: &[PropertyMarker::Relation(RelationMarker::BelongsToMany(
                BelongsToMany {
                    target_entity: "datamap_tests::schema::Foo",
                    mapped_by: "bazes",
                },
            ))],
        },
    ],
};

///
/// Qux
///

pub static QUX: ClassDef = ClassDef {
    def: Def {
        module_path: "datamap_tests::schema",
        ident: "Qux",
    },
    markers: &[ClassMarker::Entity(EntityMarker::new())],
    properties: &[
        PropertyDef {
            ident: "id",
            markers: &[PropertyMarker::PrimaryKey(PrimaryKeyMarker::new())],
        },
        PropertyDef {
            ident: "foos",
            markers: &[PropertyMarker::Relation(RelationMarker::HasMany(HasMany {
                target_entity: "datamap_tests::schema::Foo",
                inversed_by: "quxes",
                name: None,
            }))],
        },
    ],
};

///
/// Quux
///

pub static QUUX: ClassDef = ClassDef {
    def: Def {
        module_path: "datamap_tests::schema",
        ident: "Quux",
    },
    markers: &[ClassMarker::Entity(EntityMarker::new())],
    properties: &[
        PropertyDef {
            ident: "id",
            markers: &[PropertyMarker::PrimaryKey(PrimaryKeyMarker::new())],
        },
        PropertyDef {
            ident: "foos",
            markers: &[PropertyMarker::Relation(RelationMarker::BelongsTo(
                BelongsTo {
                    target_entity: "datamap_tests::schema::Foo",
                    mapped_by: "quux",
                },
            ))],
        },
    ],
};

/// Registry holding the complete fixture graph.
#[must_use]
pub fn registry() -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    registry
        .register(&FOO)
        .register(&BAR)
        .register(&BAZ)
        .register(&QUX)
        .register(&QUUX);

    registry
}

/// Resolver over the complete fixture graph.
#[must_use]
pub fn resolver() -> MetadataResolver {
    MetadataResolver::new(registry())
}
