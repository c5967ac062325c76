use crate::schema;
use datamap::prelude::*;
use std::sync::{Arc, Mutex};

#[test]
fn resolves_every_fixture_class() {
    let resolver = schema::resolver();

    let cases: [(&str, &str, Option<&str>, usize, usize); 5] = [
        (
            "datamap_tests::schema::Foo",
            "foo_entity",
            Some("datamap_tests::schema::FooRepository"),
            8,
            4,
        ),
        ("datamap_tests::schema::Bar", "bar", None, 0, 1),
        ("datamap_tests::schema::Baz", "baz", None, 0, 1),
        ("datamap_tests::schema::Qux", "qux", None, 0, 1),
        ("datamap_tests::schema::Quux", "quux", None, 0, 1),
    ];

    for (class, table, repository, columns, relations) in cases {
        let metadata = resolver.get_metadata(class).unwrap();

        assert_eq!(metadata.class, class);
        assert_eq!(metadata.table_name, table, "{class}");
        assert_eq!(metadata.repository, repository, "{class}");
        assert_eq!(metadata.primary_key.property, "id", "{class}");
        assert!(metadata.primary_key.auto_increment, "{class}");
        assert_eq!(metadata.columns.len(), columns, "{class}");
        assert_eq!(metadata.relations.len(), relations, "{class}");
    }
}

#[test]
fn second_resolution_returns_the_same_instance() {
    let resolver = schema::resolver();

    let first = resolver.get_metadata("datamap_tests::schema::Foo").unwrap();
    let second = resolver.get_metadata("datamap_tests::schema::Foo").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);
    assert_eq!(resolver.cached_classes(), 1);
}

#[test]
fn independent_resolvers_own_independent_caches() {
    let a = schema::resolver();
    let b = schema::resolver();

    let from_a = a.get_metadata("datamap_tests::schema::Foo").unwrap();
    let from_b = b.get_metadata("datamap_tests::schema::Foo").unwrap();

    assert!(!Arc::ptr_eq(&from_a, &from_b));
    assert_eq!(from_a, from_b);
}

#[test]
fn columns_follow_property_declaration_order() {
    let resolver = schema::resolver();
    let foo = resolver.get_metadata("datamap_tests::schema::Foo").unwrap();

    let order: Vec<&str> = foo.columns.iter().map(|c| c.property).collect();
    assert_eq!(
        order,
        ["corge", "grault", "garply", "waldo", "fred", "plugh", "xyzzy", "thud"]
    );
}

#[test]
fn column_defaults_and_overrides() {
    let resolver = schema::resolver();
    let foo = resolver.get_metadata("datamap_tests::schema::Foo").unwrap();

    let corge = foo.columns.get("corge").unwrap();
    assert_eq!(corge.name, "corge");
    assert_eq!(corge.ty, ColumnType::Integer);
    assert!(corge.unique);
    assert_eq!(corge.length, None);

    let grault = foo.columns.get("grault").unwrap();
    assert_eq!(grault.name, "grault_txt");
    assert_eq!(grault.ty, ColumnType::String);
    assert_eq!(grault.length, Some(100));
    assert!(!grault.unique);

    let garply = foo.columns.get("garply").unwrap();
    assert_eq!(garply.ty, ColumnType::Float);
    assert_eq!(garply.precision, Some(10));
    assert_eq!(garply.scale, Some(5));

    assert_eq!(foo.columns.get("thud").unwrap().ty, ColumnType::Date);
    assert_eq!(foo.columns.get("xyzzy").unwrap().ty, ColumnType::DateTime);
}

#[test]
fn table_name_defaults_to_snake_cased_short_name() {
    let resolver = schema::resolver();
    let bar = resolver.get_metadata("datamap_tests::schema::Bar").unwrap();

    assert_eq!(bar.table_name, "bar");
    assert_eq!(bar.repository, None);
}

#[test]
fn primary_key_property_has_no_column_metadata() {
    let resolver = schema::resolver();
    let foo = resolver.get_metadata("datamap_tests::schema::Foo").unwrap();

    assert!(foo.pk_column().is_none());
    assert!(foo.columns.get("id").is_none());
}

#[test]
fn metadata_serializes_with_lowercase_type_tags() {
    let resolver = schema::resolver();
    let foo = resolver.get_metadata("datamap_tests::schema::Foo").unwrap();

    let value = serde_json::to_value(&*foo).unwrap();
    assert_eq!(value["table_name"], "foo_entity");
    assert_eq!(value["primary_key"]["property"], "id");
    assert_eq!(value["columns"]["columns"][0]["type"], "integer");
}

///
/// Recorder
///

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl ResolveTraceSink for Recorder {
    fn on_event(&self, event: ResolveTraceEvent<'_>) {
        self.events.lock().unwrap().push(format!("{event:?}"));
    }
}

#[test]
fn trace_sink_observes_resolution_and_cache_hits() {
    let recorder = Arc::new(Recorder::default());
    let resolver = schema::resolver().with_trace(Arc::clone(&recorder) as Arc<dyn ResolveTraceSink>);

    resolver.get_metadata("datamap_tests::schema::Foo").unwrap();
    resolver.get_metadata("datamap_tests::schema::Foo").unwrap();

    let events = recorder.events.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].starts_with("Resolved"));
    assert!(events[1].starts_with("CacheHit"));
}
