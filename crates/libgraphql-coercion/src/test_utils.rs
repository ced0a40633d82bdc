use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::Next;
use crate::directives::Directive;
use crate::directives::DirectiveArgs;
use crate::directives::DirectiveHook;
use crate::directives::HookName;
use crate::scalars::StringScalar;
use crate::schema::Schema;
use crate::types::DirectiveAnnotation;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::Context;
use crate::Value;
use async_trait::async_trait;
use std::sync::Mutex;

pub(crate) fn annot(type_ref: &str) -> TypeAnnotation {
    TypeAnnotation::parse(type_ref).expect("valid type reference")
}

/// A [`Context`] carrying a log that [`RecordHook`]s append to.
pub(crate) fn recording_context() -> Context {
    Context::new(Mutex::new(Vec::<String>::new()))
}

pub(crate) fn recorded(context: &Context) -> Vec<String> {
    context.downcast_ref::<Mutex<Vec<String>>>()
        .expect("recording context")
        .lock()
        .expect("unpoisoned log")
        .clone()
}

fn record(context: &Context, entry: String) {
    if let Some(log) = context.downcast_ref::<Mutex<Vec<String>>>() {
        log.lock().expect("unpoisoned log").push(entry);
    }
}

/// Records `enter:<label>` before and `exit:<label>` after calling `next`.
pub(crate) struct RecordHook;

#[async_trait]
impl DirectiveHook for RecordHook {
    async fn call(
        &self,
        args: &DirectiveArgs,
        value: Value,
        scope: CoercionScope<'_>,
        next: Next<'_>,
    ) -> CoercionResult {
        let label = args.get("label")
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string();
        record(scope.context, format!("enter:{label}"));
        let result = next.run(value, scope).await;
        record(scope.context, format!("exit:{label}"));
        result
    }
}

/// Never calls `next`; returns its `value` argument instead.
pub(crate) struct ReplaceHook;

#[async_trait]
impl DirectiveHook for ReplaceHook {
    async fn call(
        &self,
        args: &DirectiveArgs,
        _value: Value,
        _scope: CoercionScope<'_>,
        _next: Next<'_>,
    ) -> CoercionResult {
        Ok(args.get("value").cloned().unwrap_or(Value::Null))
    }
}

/// Uppercases string values after the rest of the chain ran.
pub(crate) struct UpperHook;

#[async_trait]
impl DirectiveHook for UpperHook {
    async fn call(
        &self,
        _args: &DirectiveArgs,
        value: Value,
        scope: CoercionScope<'_>,
        next: Next<'_>,
    ) -> CoercionResult {
        Ok(match next.run(value, scope).await? {
            Value::String(str) => Value::String(str.to_uppercase()),
            other => other,
        })
    }
}

/// Trims string values before handing them to the rest of the chain.
pub(crate) struct TrimHook;

#[async_trait]
impl DirectiveHook for TrimHook {
    async fn call(
        &self,
        _args: &DirectiveArgs,
        value: Value,
        scope: CoercionScope<'_>,
        next: Next<'_>,
    ) -> CoercionResult {
        let value = match value {
            Value::String(str) => Value::String(str.trim().to_string()),
            other => other,
        };
        next.run(value, scope).await
    }
}

pub(crate) fn record_directive() -> Directive {
    Directive::new("record")
        .with_parameter(Parameter::new("label", annot("String")))
        .with_hook(HookName::OnArgumentExecution, RecordHook)
        .with_hook(HookName::OnInputCoercion, RecordHook)
        .with_hook(HookName::OnOutputCoercion, RecordHook)
        .with_hook(HookName::OnFieldExecution, RecordHook)
}

/// A small schema exercising every kind of named type:
///
/// ```graphql
/// enum Color { RED GREEN BLUE }
/// input Filter {
///   name: String @trim
///   limit: Int = 10
///   enabled: Boolean = false
///   color: Color
///   and: [Filter!]
/// }
/// interface Node { id: ID! }
/// type User implements Node { id: ID!, name: String @upper }
/// union SearchResult = User
/// scalar Slug @upper
/// type Query {
///   users(filter: Filter, first: Int = 5, after: String): [User!]!
///   search(term: String!): [SearchResult]
///   node(id: ID!): Node
///   colors(only: [Color!]): [Color!]!
///   slug: Slug
/// }
/// ```
pub(crate) fn test_schema() -> Schema {
    Schema::builder()
        .add_directive(record_directive()).expect("add @record")
        .add_directive(
            Directive::new("replace")
                .with_parameter(Parameter::new("value", annot("String")))
                .with_hook(HookName::OnArgumentExecution, ReplaceHook)
                .with_hook(HookName::OnInputCoercion, ReplaceHook)
        ).expect("add @replace")
        .add_directive(
            Directive::new("trim")
                .with_hook(HookName::OnArgumentExecution, TrimHook)
                .with_hook(HookName::OnInputCoercion, TrimHook)
        ).expect("add @trim")
        .add_directive(
            Directive::new("upper")
                .with_hook(HookName::OnOutputCoercion, UpperHook)
        ).expect("add @upper")
        .add_type(EnumType::new("Color").with_values(["RED", "GREEN", "BLUE"]))
        .expect("add Color")
        .add_type(
            InputObjectType::new("Filter")
                .with_field(
                    InputField::new("name", annot("String"))
                        .with_directive(DirectiveAnnotation::new("trim"))
                )
                .with_field(InputField::new("limit", annot("Int")).with_default_value(10))
                .with_field(
                    InputField::new("enabled", annot("Boolean"))
                        .with_default_value(false)
                )
                .with_field(InputField::new("color", annot("Color")))
                .with_field(InputField::new("and", annot("[Filter!]")))
        ).expect("add Filter")
        .add_type(InterfaceType::new("Node").with_field(Field::new("id", annot("ID!"))))
        .expect("add Node")
        .add_type(
            ObjectType::new("User")
                .implementing("Node")
                .with_field(Field::new("id", annot("ID!")))
                .with_field(
                    Field::new("name", annot("String"))
                        .with_directive(DirectiveAnnotation::new("upper"))
                )
        ).expect("add User")
        .add_type(UnionType::new("SearchResult").with_member("User"))
        .expect("add SearchResult")
        .add_type(
            ScalarType::new("Slug", StringScalar)
                .with_directive(DirectiveAnnotation::new("upper"))
        ).expect("add Slug")
        .add_type(
            ObjectType::new("Query")
                .with_field(
                    Field::new("users", annot("[User!]!"))
                        .with_parameter(Parameter::new("filter", annot("Filter")))
                        .with_parameter(
                            Parameter::new("first", annot("Int")).with_default_value(5)
                        )
                        .with_parameter(Parameter::new("after", annot("String")))
                )
                .with_field(
                    Field::new("search", annot("[SearchResult]"))
                        .with_parameter(Parameter::new("term", annot("String!")))
                )
                .with_field(
                    Field::new("node", annot("Node"))
                        .with_parameter(Parameter::new("id", annot("ID!")))
                )
                .with_field(
                    Field::new("colors", annot("[Color!]!"))
                        .with_parameter(Parameter::new("only", annot("[Color!]")))
                )
                .with_field(Field::new("slug", annot("Slug")))
        ).expect("add Query")
        .build()
        .expect("valid test schema")
}
