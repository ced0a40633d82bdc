use crate::loc;
use crate::ArgumentsError;
use crate::CoercionError;
use crate::PathSegment;
use crate::ResponsePath;

fn null_error() -> CoercionError {
    CoercionError::NullError {
        expected_type: "String!".to_string(),
        locations: vec![loc::Position::new(2, 5)],
        path: ResponsePath::from(vec![
            PathSegment::Field("users".to_string()),
            PathSegment::Index(1),
            PathSegment::Field("name".to_string()),
        ]),
        schema_coordinate: "User.name".to_string(),
    }
}

#[test]
fn graphql_error_serializes_to_response_shape() -> serde_json::Result<()> {
    let json = serde_json::to_value(null_error().to_graphql_error())?;

    assert_eq!(json, serde_json::json!({
        "message": "Null value for non-nullable `User.name` at `users[1].name`: \
            expected a value of type `String!`",
        "locations": [{ "line": 2, "column": 5 }],
        "path": ["users", 1, "name"],
    }));
    Ok(())
}

#[test]
fn empty_locations_and_path_are_omitted() -> serde_json::Result<()> {
    let err = CoercionError::InvalidValue {
        locations: vec![],
        message: "Int cannot represent a String value: \"x\"".to_string(),
        path: ResponsePath::new(),
        schema_coordinate: "$first".to_string(),
        type_name: "Int".to_string(),
    };

    let json = serde_json::to_value(err.to_graphql_error())?;

    assert_eq!(json, serde_json::json!({
        "message": "Invalid value for `$first` at ``: Int cannot represent a \
            String value: \"x\"",
    }));
    Ok(())
}

#[test]
fn arguments_error_lists_every_failure() {
    let err = ArgumentsError {
        errors: vec![null_error(), null_error()],
    };

    assert_eq!(err.to_graphql_errors().len(), 2);
    assert_eq!(
        err.to_string().lines().filter(|line| line.starts_with("  * ")).count(),
        2,
    );
}
