use crate::Value;
use async_trait::async_trait;
use thiserror::Error;

/// Raised by a [`ScalarCoercion`] function that cannot represent the given
/// value in its scalar type.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ScalarCoercionError {
    pub message: String,
}
impl ScalarCoercionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The pair of coercion functions carried by a
/// [`ScalarType`](crate::types::ScalarType).
///
/// Both functions receive non-null values only: `null` is passed through by
/// the scalar coercion step without consulting the scalar, and whether `null`
/// is legal is decided by a surrounding non-null layer.
///
/// The functions are asynchronous so that custom scalars may perform I/O
/// (e.g. a lookup to validate an opaque identifier).
#[async_trait]
pub trait ScalarCoercion: Send + Sync {
    /// Coerce a client-supplied value (literal or variable) into the internal
    /// representation of this scalar.
    async fn coerce_input(&self, raw: Value) -> Result<Value, ScalarCoercionError>;

    /// Coerce a resolver's return value into the serialized representation of
    /// this scalar.
    async fn coerce_output(&self, raw: Value) -> Result<Value, ScalarCoercionError>;
}

/// A [`ScalarCoercion`] built from two synchronous functions.
pub struct FnScalarCoercion<TInput, TOutput> {
    input: TInput,
    output: TOutput,
}
impl<TInput, TOutput> FnScalarCoercion<TInput, TOutput>
where
    TInput: Fn(Value) -> Result<Value, ScalarCoercionError> + Send + Sync,
    TOutput: Fn(Value) -> Result<Value, ScalarCoercionError> + Send + Sync,
{
    pub fn new(input: TInput, output: TOutput) -> Self {
        Self { input, output }
    }
}

#[async_trait]
impl<TInput, TOutput> ScalarCoercion for FnScalarCoercion<TInput, TOutput>
where
    TInput: Fn(Value) -> Result<Value, ScalarCoercionError> + Send + Sync,
    TOutput: Fn(Value) -> Result<Value, ScalarCoercionError> + Send + Sync,
{
    async fn coerce_input(&self, raw: Value) -> Result<Value, ScalarCoercionError> {
        (self.input)(raw)
    }

    async fn coerce_output(&self, raw: Value) -> Result<Value, ScalarCoercionError> {
        (self.output)(raw)
    }
}
