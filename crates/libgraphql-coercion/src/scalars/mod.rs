mod builtin_scalars;
mod scalar_coercion;

pub use builtin_scalars::builtin_scalar_types;
pub use builtin_scalars::BooleanScalar;
pub use builtin_scalars::FloatScalar;
pub use builtin_scalars::IdScalar;
pub use builtin_scalars::IntScalar;
pub use builtin_scalars::StringScalar;
pub use builtin_scalars::BOOLEAN_SCALAR_NAME;
pub use builtin_scalars::FLOAT_SCALAR_NAME;
pub use builtin_scalars::ID_SCALAR_NAME;
pub use builtin_scalars::INT_SCALAR_NAME;
pub use builtin_scalars::STRING_SCALAR_NAME;
pub use scalar_coercion::FnScalarCoercion;
pub use scalar_coercion::ScalarCoercion;
pub use scalar_coercion::ScalarCoercionError;
