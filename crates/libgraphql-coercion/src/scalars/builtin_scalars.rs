//! The five scalars every schema contains, coerced per
//! [the October 2021 spec](https://spec.graphql.org/October2021/#sec-Scalars.Built-in-Scalars).

use crate::scalars::ScalarCoercion;
use crate::scalars::ScalarCoercionError;
use crate::types::ScalarType;
use crate::Value;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ScalarCoercionError>;

pub const BOOLEAN_SCALAR_NAME: &str = "Boolean";
pub const FLOAT_SCALAR_NAME: &str = "Float";
pub const ID_SCALAR_NAME: &str = "ID";
pub const INT_SCALAR_NAME: &str = "Int";
pub const STRING_SCALAR_NAME: &str = "String";

/// Fresh [`ScalarType`]s for each built-in scalar.
pub fn builtin_scalar_types() -> Vec<ScalarType> {
    vec![
        ScalarType::new(BOOLEAN_SCALAR_NAME, BooleanScalar),
        ScalarType::new(FLOAT_SCALAR_NAME, FloatScalar),
        ScalarType::new(ID_SCALAR_NAME, IdScalar),
        ScalarType::new(INT_SCALAR_NAME, IntScalar),
        ScalarType::new(STRING_SCALAR_NAME, StringScalar),
    ]
}

fn invalid(scalar_name: &str, raw: &Value) -> ScalarCoercionError {
    ScalarCoercionError::new(format!(
        "{scalar_name} cannot represent a {} value: {raw}",
        raw.kind_name(),
    ))
}

fn int_in_range(scalar_name: &str, value: i64, raw: &Value) -> Result<Value> {
    if i32::try_from(value).is_ok() {
        Ok(Value::Int(value))
    } else {
        Err(ScalarCoercionError::new(format!(
            "{scalar_name} cannot represent non 32-bit signed integer value: {raw}",
        )))
    }
}

#[derive(Debug)]
pub struct BooleanScalar;

#[async_trait]
impl ScalarCoercion for BooleanScalar {
    async fn coerce_input(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::Boolean(_) => Ok(raw),
            other => Err(invalid(BOOLEAN_SCALAR_NAME, &other)),
        }
    }

    async fn coerce_output(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::Boolean(_) => Ok(raw),
            Value::Int(value) => Ok(Value::Boolean(value != 0)),
            Value::Float(value) if value.is_finite() => Ok(Value::Boolean(value != 0.0)),
            other => Err(invalid(BOOLEAN_SCALAR_NAME, &other)),
        }
    }
}

#[derive(Debug)]
pub struct FloatScalar;

#[async_trait]
impl ScalarCoercion for FloatScalar {
    async fn coerce_input(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::Float(value) if value.is_finite() => Ok(raw),
            Value::Int(value) => Ok(Value::Float(value as f64)),
            other => Err(invalid(FLOAT_SCALAR_NAME, &other)),
        }
    }

    async fn coerce_output(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::Float(value) if value.is_finite() => Ok(raw),
            Value::Int(value) => Ok(Value::Float(value as f64)),
            Value::Boolean(value) => Ok(Value::Float(if value { 1.0 } else { 0.0 })),
            Value::String(ref str) => match str.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Value::Float(value)),
                _ => Err(invalid(FLOAT_SCALAR_NAME, &raw)),
            },
            other => Err(invalid(FLOAT_SCALAR_NAME, &other)),
        }
    }
}

#[derive(Debug)]
pub struct IdScalar;

#[async_trait]
impl ScalarCoercion for IdScalar {
    async fn coerce_input(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::String(_) => Ok(raw),
            Value::Int(value) => Ok(Value::String(value.to_string())),
            other => Err(invalid(ID_SCALAR_NAME, &other)),
        }
    }

    async fn coerce_output(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::String(_) => Ok(raw),
            Value::Int(value) => Ok(Value::String(value.to_string())),
            other => Err(invalid(ID_SCALAR_NAME, &other)),
        }
    }
}

#[derive(Debug)]
pub struct IntScalar;

#[async_trait]
impl ScalarCoercion for IntScalar {
    async fn coerce_input(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::Int(value) => int_in_range(INT_SCALAR_NAME, value, &raw),
            other => Err(invalid(INT_SCALAR_NAME, &other)),
        }
    }

    async fn coerce_output(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::Int(value) => int_in_range(INT_SCALAR_NAME, value, &raw),
            Value::Float(value) if value.is_finite() && value.fract() == 0.0 =>
                int_in_range(INT_SCALAR_NAME, value as i64, &raw),
            Value::Boolean(value) => Ok(Value::Int(i64::from(value))),
            Value::String(ref str) => match str.trim().parse::<i64>() {
                Ok(value) => int_in_range(INT_SCALAR_NAME, value, &raw),
                Err(_) => Err(invalid(INT_SCALAR_NAME, &raw)),
            },
            other => Err(invalid(INT_SCALAR_NAME, &other)),
        }
    }
}

#[derive(Debug)]
pub struct StringScalar;

#[async_trait]
impl ScalarCoercion for StringScalar {
    async fn coerce_input(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::String(_) => Ok(raw),
            other => Err(invalid(STRING_SCALAR_NAME, &other)),
        }
    }

    async fn coerce_output(&self, raw: Value) -> Result<Value> {
        match raw {
            Value::String(_) => Ok(raw),
            Value::Enum(value) => Ok(Value::String(value)),
            Value::Int(value) => Ok(Value::String(value.to_string())),
            Value::Float(value) => Ok(Value::String(value.to_string())),
            Value::Boolean(value) => Ok(Value::String(value.to_string())),
            other => Err(invalid(STRING_SCALAR_NAME, &other)),
        }
    }
}
