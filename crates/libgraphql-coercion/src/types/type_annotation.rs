use crate::schema::SchemaBuildError;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), or
/// [`InputField`](crate::types::InputField).
///
/// Each layer records its own nullability; a non-nullable layer is the
/// `NonNull` wrapper of the GraphQL type algebra. Because nullability is a
/// flag rather than a wrapping layer, a `NonNull` wrapping another `NonNull`
/// cannot be represented.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Shorthand for a [`TypeAnnotation::List`] layer around `inner`.
    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type_ref: Box::new(inner),
            nullable,
        })
    }

    /// Shorthand for a [`TypeAnnotation::Named`] reference to `type_name`.
    pub fn named(type_name: impl Into<String>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            type_name: type_name.into(),
        })
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it (the "reduced" type).
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// Parse a GraphQL type reference such as `[Int!]!`.
    ///
    /// Whitespace (and commas, which GraphQL treats as whitespace) between
    /// tokens is ignored.
    pub fn parse(type_ref: &str) -> Result<Self, SchemaBuildError> {
        let mut parser = TypeRefParser {
            chars: type_ref.char_indices().peekable(),
            source: type_ref,
        };
        let annot = parser.parse_annotation()?;
        parser.skip_ignored();
        match parser.chars.peek().copied() {
            None => Ok(annot),
            Some((idx, ch)) => Err(parser.unexpected(idx, ch)),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::str::FromStr for TypeAnnotation {
    type Err = SchemaBuildError;

    fn from_str(type_ref: &str) -> Result<Self, Self::Err> {
        Self::parse(type_ref)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}

struct TypeRefParser<'src> {
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    source: &'src str,
}
impl TypeRefParser<'_> {
    fn parse_annotation(&mut self) -> Result<TypeAnnotation, SchemaBuildError> {
        self.skip_ignored();
        let inner = match self.chars.peek().copied() {
            Some((_, '[')) => {
                self.chars.next();
                let inner = self.parse_annotation()?;
                self.skip_ignored();
                match self.chars.next() {
                    Some((_, ']')) => (),
                    Some((idx, ch)) => return Err(self.unexpected(idx, ch)),
                    None => return Err(self.unexpected_end()),
                }
                TypeAnnotation::list(inner, true)
            },

            Some((idx, ch)) if ch == '_' || ch.is_ascii_alphabetic() => {
                let mut end = idx;
                while let Some((name_idx, name_ch)) = self.chars.peek().copied() {
                    if name_ch == '_' || name_ch.is_ascii_alphanumeric() {
                        end = name_idx + name_ch.len_utf8();
                        self.chars.next();
                    } else {
                        break;
                    }
                }
                TypeAnnotation::named(&self.source[idx..end], true)
            },

            Some((idx, ch)) => return Err(self.unexpected(idx, ch)),
            None => return Err(self.unexpected_end()),
        };

        self.skip_ignored();
        if let Some((_, '!')) = self.chars.peek() {
            self.chars.next();
            self.skip_ignored();
            if let Some((_, '!')) = self.chars.peek() {
                return Err(SchemaBuildError::NonNullOfNonNull {
                    type_ref: self.source.to_string(),
                });
            }
            return Ok(match inner {
                TypeAnnotation::List(mut annot) => {
                    annot.nullable = false;
                    TypeAnnotation::List(annot)
                },
                TypeAnnotation::Named(mut annot) => {
                    annot.nullable = false;
                    TypeAnnotation::Named(annot)
                },
            });
        }
        Ok(inner)
    }

    fn skip_ignored(&mut self) {
        while let Some((_, ch)) = self.chars.peek() {
            if ch.is_whitespace() || *ch == ',' {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn unexpected(&self, offset: usize, found: char) -> SchemaBuildError {
        SchemaBuildError::UnexpectedAstNode {
            found: found.to_string(),
            offset,
            type_ref: self.source.to_string(),
        }
    }

    fn unexpected_end(&self) -> SchemaBuildError {
        SchemaBuildError::UnexpectedAstNode {
            found: "end of input".to_string(),
            offset: self.source.len(),
            type_ref: self.source.to_string(),
        }
    }
}
