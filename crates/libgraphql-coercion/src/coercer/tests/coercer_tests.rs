use crate::coercer::tests::coerce;
use crate::coercer::tests::field_path;
use crate::coercer::tests::test_builder;
use crate::coercer::Coercer;
use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::CoercionStep;
use crate::coercer::Direction;
use crate::coercer::Next;
use crate::coercer::steps::ListStep;
use crate::coercer::steps::NonNullStep;
use crate::types::DefinitionRef;
use crate::CoercionError;
use crate::Context;
use crate::PathSegment;
use crate::ResolutionInfo;
use crate::Value;
use futures::future::BoxFuture;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CoercionError>;

#[tokio::test]
async fn non_null_list_of_non_null_rejects_null_element() {
    let builder = test_builder();
    let result = coerce(
        &builder,
        "[Int!]!",
        Direction::Input,
        Value::List(vec![Value::Int(1), Value::Null, Value::Int(3)]),
    ).await;

    assert_eq!(result, Err(CoercionError::NullError {
        expected_type: "Int!".to_string(),
        locations: vec![],
        path: field_path(vec![PathSegment::Index(1)]),
        schema_coordinate: "$v".to_string(),
    }));
}

#[tokio::test]
async fn non_null_list_of_non_null_accepts_full_list() -> Result<()> {
    let builder = test_builder();
    let coerced = coerce(
        &builder,
        "[Int!]!",
        Direction::Input,
        Value::from(vec![1, 2, 3]),
    ).await?;

    assert_eq!(coerced, Value::from(vec![1, 2, 3]));
    Ok(())
}

#[tokio::test]
async fn nullable_list_passes_null_through() -> Result<()> {
    let builder = test_builder();
    assert_eq!(coerce(&builder, "[Int]", Direction::Input, Value::Null).await?, Value::Null);
    assert_eq!(coerce(&builder, "[Int!]", Direction::Input, Value::Null).await?, Value::Null);
    Ok(())
}

#[tokio::test]
async fn non_null_list_rejects_null_list() {
    let builder = test_builder();
    let result = coerce(&builder, "[Int]!", Direction::Input, Value::Null).await;

    assert!(matches!(
        result,
        Err(CoercionError::NullError { ref expected_type, .. }) if expected_type == "[Int]!",
    ));
}

#[tokio::test]
async fn single_value_is_promoted_to_list() -> Result<()> {
    let builder = test_builder();
    assert_eq!(
        coerce(&builder, "[Int]", Direction::Input, Value::Int(5)).await?,
        Value::from(vec![5]),
    );
    assert_eq!(
        coerce(&builder, "[Boolean]", Direction::Input, Value::Boolean(false)).await?,
        Value::from(vec![false]),
    );
    assert_eq!(
        coerce(&builder, "[[Int]]", Direction::Input, Value::Int(1)).await?,
        Value::List(vec![Value::from(vec![1])]),
    );
    Ok(())
}

#[tokio::test]
async fn invalid_list_element_is_attributed_to_its_index() {
    let builder = test_builder();
    let result = coerce(
        &builder,
        "[Int]",
        Direction::Input,
        Value::List(vec![Value::Int(1), Value::Int(2), Value::from("three")]),
    ).await;

    let Err(CoercionError::InvalidValue { path, type_name, schema_coordinate, .. }) = &result else {
        panic!("Expected an InvalidValue error, got: {result:?}");
    };
    assert_eq!(*path, field_path(vec![PathSegment::Index(2)]));
    assert_eq!(path.to_string(), "field[2]");
    assert_eq!(type_name, "Int");
    assert_eq!(schema_coordinate, "$v");
}

#[tokio::test]
async fn enum_accepts_declared_values_only() -> Result<()> {
    let builder = test_builder();
    assert_eq!(
        coerce(&builder, "Color", Direction::Input, Value::Enum("RED".to_string())).await?,
        Value::from("RED"),
    );
    assert_eq!(
        coerce(&builder, "Color", Direction::Output, Value::from("GREEN")).await?,
        Value::from("GREEN"),
    );

    let result = coerce(&builder, "Color", Direction::Input, Value::from("PURPLE")).await;
    let Err(CoercionError::InvalidValue { message, type_name, .. }) = &result else {
        panic!("Expected an InvalidValue error, got: {result:?}");
    };
    assert_eq!(type_name, "Color");
    assert_eq!(message, "Value `PURPLE` does not exist in the `Color` enum");

    assert!(matches!(
        coerce(&builder, "Color", Direction::Input, Value::from("red")).await,
        Err(CoercionError::InvalidValue { .. }),
    ));
    assert!(matches!(
        coerce(&builder, "Color", Direction::Input, Value::Int(0)).await,
        Err(CoercionError::InvalidValue { .. }),
    ));
    Ok(())
}

#[tokio::test]
async fn enum_list_coerces_each_member() -> Result<()> {
    let builder = test_builder();
    let coerced = coerce(
        &builder,
        "[Color!]!",
        Direction::Output,
        Value::List(vec![Value::Enum("BLUE".to_string()), Value::from("RED")]),
    ).await?;

    assert_eq!(coerced, Value::from(vec!["BLUE", "RED"]));
    Ok(())
}

#[tokio::test]
async fn scalar_rejection_becomes_invalid_value() {
    let builder = test_builder();
    let result = coerce(&builder, "Int", Direction::Input, Value::Float(1.5)).await;

    assert_eq!(result, Err(CoercionError::InvalidValue {
        locations: vec![],
        message: "Int cannot represent a Float value: 1.5".to_string(),
        path: field_path(vec![]),
        schema_coordinate: "$v".to_string(),
        type_name: "Int".to_string(),
    }));
}

#[tokio::test]
async fn identity_coercer_returns_value_unchanged() -> Result<()> {
    let coercer = Coercer::identity();
    let coerced = coercer.coerce(
        Value::from("anything"),
        DefinitionRef::Variable("v"),
        &Context::empty(),
        &ResolutionInfo::default(),
    ).await?;

    assert!(coercer.is_identity());
    assert_eq!(coerced, Value::from("anything"));
    Ok(())
}

/// Appends a suffix to string values and then hands them on.
struct SuffixStep(&'static str);
impl CoercionStep for SuffixStep {
    fn label(&self) -> String {
        format!("Suffix({})", self.0)
    }

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        let value = match value {
            Value::String(str) => Value::String(format!("{str}{}", self.0)),
            other => other,
        };
        next.run(value, scope)
    }
}

#[tokio::test]
async fn compose_runs_outer_step_first() -> Result<()> {
    let inner = Coercer::from_step(SuffixStep("-inner"));
    let composed = Coercer::compose(Arc::new(SuffixStep("-outer")), &inner);

    assert_eq!(composed.labels(), vec!["Suffix(-outer)", "Suffix(-inner)"]);
    let coerced = composed.coerce(
        Value::from("v"),
        DefinitionRef::Variable("v"),
        &Context::empty(),
        &ResolutionInfo::default(),
    ).await?;
    assert_eq!(coerced, Value::from("v-outer-inner"));
    Ok(())
}

#[tokio::test]
async fn hand_built_chain_matches_builder_semantics() -> Result<()> {
    let coercer = Coercer::from_steps(vec![
        Arc::new(ListStep) as Arc<dyn CoercionStep>,
        Arc::new(NonNullStep::new("String!")) as Arc<dyn CoercionStep>,
        Arc::new(SuffixStep("!")) as Arc<dyn CoercionStep>,
    ]);
    let info = ResolutionInfo::new("Query", "greetings");
    let context = Context::empty();

    let coerced = coercer.coerce(
        Value::from("hi"),
        DefinitionRef::Variable("v"),
        &context,
        &info,
    ).await?;
    assert_eq!(coerced, Value::from(vec!["hi!"]));

    let err = coercer.coerce(
        Value::List(vec![Value::Null]),
        DefinitionRef::Variable("v"),
        &context,
        &info,
    ).await.unwrap_err();
    assert_eq!(err.path().to_string(), "greetings[0]");
    Ok(())
}

#[tokio::test]
async fn errors_render_as_graphql_errors() {
    let builder = test_builder();
    let err = coerce(&builder, "Int!", Direction::Input, Value::Null)
        .await
        .unwrap_err();
    let graphql_err = err.to_graphql_error();

    assert_eq!(graphql_err.path, field_path(vec![]));
    assert_eq!(
        graphql_err.message,
        "Null value for non-nullable `$v` at `field`: expected a value of type `Int!`",
    );
}
