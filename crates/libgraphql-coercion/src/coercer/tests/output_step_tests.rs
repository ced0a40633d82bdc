use crate::coercer::steps::TYPENAME_FIELD;
use crate::coercer::tests::coerce;
use crate::coercer::tests::test_builder;
use crate::coercer::Direction;
use crate::CoercionError;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CoercionError>;

fn typename_of(value: &Value) -> Option<&str> {
    value.as_object()
        .and_then(|entries| entries.get(TYPENAME_FIELD))
        .and_then(Value::as_str)
}

fn resolved(entries: Vec<(&str, Value)>) -> Value {
    Value::Object(
        entries.into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<IndexMap<_, _>>()
    )
}

#[tokio::test]
async fn object_output_stamps_its_own_typename() -> Result<()> {
    let builder = test_builder();
    let coerced = coerce(
        &builder,
        "User",
        Direction::Output,
        resolved(vec![("id", Value::Int(1)), ("name", Value::from("ada"))]),
    ).await?;

    assert_eq!(coerced, resolved(vec![(TYPENAME_FIELD, Value::from("User"))]));
    Ok(())
}

#[tokio::test]
async fn abstract_output_only_propagates_carried_typename() -> Result<()> {
    let builder = test_builder();

    let with_typename = coerce(
        &builder,
        "Node",
        Direction::Output,
        resolved(vec![(TYPENAME_FIELD, Value::from("User")), ("id", Value::Int(1))]),
    ).await?;
    assert_eq!(typename_of(&with_typename), Some("User"));

    let without_typename = coerce(
        &builder,
        "SearchResult",
        Direction::Output,
        resolved(vec![("id", Value::Int(1))]),
    ).await?;
    assert_eq!(without_typename, resolved(vec![]));
    Ok(())
}

#[tokio::test]
async fn list_of_objects_produces_one_skeleton_per_element() -> Result<()> {
    let builder = test_builder();
    let coerced = coerce(
        &builder,
        "[User!]!",
        Direction::Output,
        Value::List(vec![resolved(vec![]), resolved(vec![])]),
    ).await?;

    let items = coerced.as_list().expect("list output");
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| typename_of(item) == Some("User")));
    Ok(())
}

#[tokio::test]
async fn null_object_is_null_unless_non_null() {
    let builder = test_builder();
    assert_eq!(coerce(&builder, "User", Direction::Output, Value::Null).await, Ok(Value::Null));
    assert!(matches!(
        coerce(&builder, "[User!]!", Direction::Output, Value::List(vec![Value::Null])).await,
        Err(CoercionError::NullError { .. }),
    ));
}

#[tokio::test]
async fn unknown_output_type_yields_empty_skeleton() -> Result<()> {
    let builder = test_builder();
    let coerced = coerce(
        &builder,
        "Mystery",
        Direction::Output,
        Value::from("whatever"),
    ).await?;

    assert_eq!(coerced, resolved(vec![]));
    Ok(())
}
