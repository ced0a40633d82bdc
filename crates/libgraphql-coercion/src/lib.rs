//! Input and output value coercion for GraphQL types, arguments, and
//! directives.
//!
//! Given a [`Schema`](schema::Schema), a [`CoercerBuilder`](coercer::CoercerBuilder)
//! composes a [`Coercer`](coercer::Coercer) for any type annotation and
//! direction: a chain of steps that null-checks, walks lists, coerces
//! scalars/enums/input objects, and runs directive hooks. Argument sets are
//! coerced through a pluggable [`ArgumentsCoercer`](arguments::ArgumentsCoercer)
//! policy. [`CoercionEngine`](engine::CoercionEngine) ties these together for
//! an execution pipeline.

pub mod arguments;
pub mod coercer;
mod coercion_error;
pub mod config;
mod context;
pub mod directives;
pub mod engine;
pub mod loc;
mod resolution_info;
mod response_path;
pub mod scalars;
pub mod schema;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;
pub mod types;
mod value;

pub use coercion_error::ArgumentsError;
pub use coercion_error::CoercionError;
pub use coercion_error::GraphQLError;
pub use context::Context;
pub use resolution_info::ResolutionInfo;
pub use response_path::PathSegment;
pub use response_path::ResponsePath;
pub use value::Value;
