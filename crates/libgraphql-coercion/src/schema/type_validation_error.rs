use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input object type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input object type"
    )]
    InvalidOutputFieldWithInputType {
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{schema_coordinate}` parameter was declared with the \
        `{outputonly_type_name}` type, which is not an input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        outputonly_type_name: String,
        schema_coordinate: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{member_type_name}`, but this type is a {} type \
        and union members can only be object types.",
        member_type_kind.name(),
    )]
    InvalidUnionMemberTypeKind {
        member_type_kind: GraphQLTypeKind,
        member_type_name: String,
        union_type_name: String,
    },

    #[error(
        "`{annotated_coordinate}` is annotated with `@{directive_name}`, but \
        no directive with that name is defined"
    )]
    UndefinedDirective {
        annotated_coordinate: String,
        directive_name: String,
    },

    #[error(
        "`{referencing_coordinate}` references a type named \
        `{undefined_type_name}`, but no type with that name is defined"
    )]
    UndefinedTypeName {
        referencing_coordinate: String,
        undefined_type_name: String,
    },
}
