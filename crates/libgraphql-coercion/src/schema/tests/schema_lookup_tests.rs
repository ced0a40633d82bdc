use crate::coercer::Direction;
use crate::schema::SchemaLookup;
use crate::test_utils::test_schema;
use crate::types::GraphQLTypeKind;
use std::sync::Arc;

#[test]
fn classifiers_return_none_for_other_kinds() {
    let schema = test_schema();

    assert!(schema.find_enum("Color").is_some());
    assert!(schema.find_enum("Int").is_none());
    assert!(schema.find_scalar("Slug").is_some());
    assert!(schema.find_scalar("Color").is_none());
    assert!(schema.find_input_object("Filter").is_some());
    assert!(schema.find_input_object("User").is_none());
    assert!(schema.is_object("User"));
    assert!(!schema.is_object("Node"));
    assert!(schema.is_union("SearchResult"));
    assert!(!schema.is_union("Missing"));
    assert_eq!(schema.find_type("Node").map(|t| t.kind()), Some(GraphQLTypeKind::Interface));
}

#[test]
fn type_directives_are_filtered_by_direction() {
    let lookup: Arc<dyn SchemaLookup> = Arc::new(test_schema());

    let output = lookup.type_directives("Slug", Direction::Output);
    assert_eq!(
        output.iter().map(|binding| binding.name()).collect::<Vec<_>>(),
        vec!["upper"],
    );
    assert!(lookup.type_directives("Slug", Direction::Input).is_empty());
    assert!(lookup.type_directives("Missing", Direction::Output).is_empty());
}
