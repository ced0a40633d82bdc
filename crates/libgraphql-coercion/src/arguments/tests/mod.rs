
use crate::coercer::CoercerBuilder;
use crate::schema::Schema;
use crate::test_utils::annot;
use crate::test_utils::record_directive;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::ResolutionInfo;
use crate::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// ```graphql
/// type Query {
///   echo(
///     a: String = "X" @record(label: "a"),
///     b: String @record(label: "b"),
///     n: Int,
///   ): String
/// }
/// ```
fn echo_schema() -> Schema {
    Schema::builder()
        .add_directive(record_directive()).expect("add @record")
        .add_type(
            ObjectType::new("Query").with_field(
                Field::new("echo", annot("String"))
                    .with_parameter(
                        Parameter::new("a", annot("String"))
                            .with_default_value("X")
                            .with_directive(
                                DirectiveAnnotation::new("record").with_arg("label", "a")
                            )
                    )
                    .with_parameter(
                        Parameter::new("b", annot("String"))
                            .with_directive(
                                DirectiveAnnotation::new("record").with_arg("label", "b")
                            )
                    )
                    .with_parameter(Parameter::new("n", annot("Int")))
            )
        ).expect("add Query")
        .build()
        .expect("valid echo schema")
}

fn echo_field(schema: &Schema) -> Field {
    schema.find_type("Query")
        .and_then(|query_type| query_type.as_object())
        .and_then(|query_type| query_type.field("echo"))
        .cloned()
        .expect("Query.echo")
}

fn echo_builder() -> (CoercerBuilder, Field) {
    let schema = echo_schema();
    let field = echo_field(&schema);
    (CoercerBuilder::new(Arc::new(schema)), field)
}

fn echo_info() -> ResolutionInfo {
    ResolutionInfo::new("Query", "echo")
}

fn occurrences<const N: usize>(entries: [(&str, Value); N]) -> IndexMap<String, Value> {
    entries.into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
