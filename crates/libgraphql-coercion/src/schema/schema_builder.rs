use crate::directives::builtin_directives;
use crate::directives::Directive;
use crate::scalars::builtin_scalar_types;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`].
///
/// Types and directives are registered in any order; references between them
/// are only resolved (and validated) by [`SchemaBuilder::build()`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    directive_defs: HashMap<String, Directive>,
    types: HashMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directive(mut self, directive: Directive) -> Result<Self> {
        let directive_name = directive.name().to_string();
        if directive_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                directive_name,
            });
        }
        if self.directive_defs.contains_key(&directive_name) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name,
            });
        }
        self.directive_defs.insert(directive_name, directive);
        Ok(self)
    }

    pub fn add_type(mut self, graphql_type: impl Into<GraphQLType>) -> Result<Self> {
        let graphql_type = graphql_type.into();
        let type_name = graphql_type.name().to_string();
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                type_name,
            });
        }
        if self.types.contains_key(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name,
            });
        }
        if let GraphQLType::Enum(enum_type) = &graphql_type {
            if enum_type.values().is_empty() {
                return Err(SchemaBuildError::EnumWithNoVariants {
                    type_name,
                });
            }
        }
        self.types.insert(type_name, graphql_type);
        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();
        self.inject_missing_builtin_scalars();

        let errors = self.validate_types();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        log::debug!(
            "Built schema with {} types and {} directives.",
            self.types.len(),
            self.directive_defs.len(),
        );
        Ok(Schema {
            directive_defs: self.directive_defs,
            types: self.types,
        })
    }

    fn inject_missing_builtin_directives(&mut self) {
        for directive in builtin_directives() {
            if !self.directive_defs.contains_key(directive.name()) {
                self.directive_defs.insert(directive.name().to_string(), directive);
            }
        }
    }

    fn inject_missing_builtin_scalars(&mut self) {
        for scalar_type in builtin_scalar_types() {
            if !self.types.contains_key(scalar_type.name()) {
                self.types.insert(scalar_type.name().to_string(), scalar_type.into());
            }
        }
    }

    fn validate_types(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        let mut directives = self.directive_defs.values().collect::<Vec<_>>();
        directives.sort_by(|a, b| a.name().cmp(b.name()));
        for directive in directives {
            for param in directive.parameters().values() {
                self.validate_parameter(param, &mut errors);
            }
        }

        let mut graphql_types = self.types.values().collect::<Vec<_>>();
        graphql_types.sort_by(|a, b| a.name().cmp(b.name()));
        for graphql_type in graphql_types {
            self.validate_directive_annotations(
                graphql_type.name(),
                graphql_type.directives(),
                &mut errors,
            );

            match graphql_type {
                GraphQLType::Interface(iface_type) =>
                    self.validate_output_fields(iface_type.fields(), &mut errors),

                GraphQLType::Object(obj_type) =>
                    self.validate_output_fields(obj_type.fields(), &mut errors),

                GraphQLType::InputObject(input_type) => {
                    for field in input_type.fields().values() {
                        let field_coord = field.schema_coordinate();
                        self.validate_directive_annotations(
                            field_coord.as_str(),
                            field.directives(),
                            &mut errors,
                        );
                        match self.resolve_annotation(
                            field_coord.as_str(),
                            field.type_annotation(),
                            &mut errors,
                        ) {
                            Some(field_type) if !field_type.is_input_type() =>
                                errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                                    field_name: field.name().to_string(),
                                    invalid_type_name: field_type.name().to_string(),
                                    parent_type_name: input_type.name().to_string(),
                                }),
                            _ => (),
                        }
                    }
                },

                GraphQLType::Union(union_type) => {
                    for member_name in union_type.member_type_names() {
                        match self.types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(member_type) =>
                                errors.push(TypeValidationError::InvalidUnionMemberTypeKind {
                                    member_type_kind: GraphQLTypeKind::from(member_type),
                                    member_type_name: member_name.to_string(),
                                    union_type_name: union_type.name().to_string(),
                                }),
                            None =>
                                errors.push(TypeValidationError::UndefinedTypeName {
                                    referencing_coordinate: union_type.name().to_string(),
                                    undefined_type_name: member_name.to_string(),
                                }),
                        }
                    }
                },

                GraphQLType::Enum(enum_type) => {
                    for value in enum_type.values().values() {
                        self.validate_directive_annotations(
                            format!("{}.{}", enum_type.name(), value.name()).as_str(),
                            value.directives(),
                            &mut errors,
                        );
                    }
                },

                GraphQLType::Scalar(_) => (),
            }
        }
        errors
    }

    fn validate_output_fields(
        &self,
        fields: &IndexMap<String, Field>,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for field in fields.values() {
            let field_coord = field.schema_coordinate();
            self.validate_directive_annotations(
                field_coord.as_str(),
                field.directives(),
                errors,
            );
            if let Some(GraphQLType::InputObject(input_type)) = self.resolve_annotation(
                field_coord.as_str(),
                field.type_annotation(),
                errors,
            ) {
                errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                    field_name: field.name().to_string(),
                    input_type_name: input_type.name().to_string(),
                    parent_type_name: field.parent_type_name().to_string(),
                });
            }
            for param in field.parameters().values() {
                self.validate_parameter(param, errors);
            }
        }
    }

    fn validate_parameter(
        &self,
        param: &Parameter,
        errors: &mut Vec<TypeValidationError>,
    ) {
        let param_coord = param.schema_coordinate();
        self.validate_directive_annotations(
            param_coord.as_str(),
            param.directives(),
            errors,
        );
        match self.resolve_annotation(
            param_coord.as_str(),
            param.type_annotation(),
            errors,
        ) {
            Some(param_type) if !param_type.is_input_type() =>
                errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                    outputonly_type_name: param_type.name().to_string(),
                    schema_coordinate: param_coord,
                }),
            _ => (),
        }
    }

    fn validate_directive_annotations(
        &self,
        annotated_coordinate: &str,
        annotations: &[DirectiveAnnotation],
        errors: &mut Vec<TypeValidationError>,
    ) {
        for annot in annotations {
            if !self.directive_defs.contains_key(annot.directive_name()) {
                errors.push(TypeValidationError::UndefinedDirective {
                    annotated_coordinate: annotated_coordinate.to_string(),
                    directive_name: annot.directive_name().to_string(),
                });
            }
        }
    }

    /// Looks up the named type at the core of `type_annotation`, recording an
    /// [`TypeValidationError::UndefinedTypeName`] if there is none.
    fn resolve_annotation(
        &self,
        referencing_coordinate: &str,
        type_annotation: &TypeAnnotation,
        errors: &mut Vec<TypeValidationError>,
    ) -> Option<&GraphQLType> {
        let type_name = type_annotation
            .innermost_named_type_annotation()
            .graphql_type_name();
        let resolved = self.types.get(type_name);
        if resolved.is_none() {
            errors.push(TypeValidationError::UndefinedTypeName {
                referencing_coordinate: referencing_coordinate.to_string(),
                undefined_type_name: type_name.to_string(),
            });
        }
        resolved
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
    },

    #[error("Multiple GraphQL types were defined with the name `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Enum types must define one or more unique variants: `{type_name}` defines none")]
    EnumWithNoVariants {
        type_name: String,
    },

    #[error("Custom directive names must not start with `__`: `{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        directive_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error(
        "Non-null types can not be wrapped in another non-null layer: \
        `{type_ref}`"
    )]
    NonNullOfNonNull {
        type_ref: String,
    },

    #[error(
        "Found {} type validation error(s) while building the schema:\n{}",
        errors.len(),
        errors.iter()
            .map(|err| format!("  * {err}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error("Unexpected `{found}` at offset {offset} of type reference `{type_ref}`")]
    UnexpectedAstNode {
        found: String,
        offset: usize,
        type_ref: String,
    },
}
