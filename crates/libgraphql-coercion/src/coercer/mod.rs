mod builder;
#[allow(clippy::module_inception)]
mod coercer;
mod direction;
pub mod steps;

pub use builder::build_coercer;
pub(crate) use builder::CoercerCache;
pub use builder::CoercerBuilder;
pub use coercer::Coercer;
pub use coercer::CoercionResult;
pub use coercer::CoercionScope;
pub use coercer::CoercionStep;
pub use coercer::Next;
pub use direction::Direction;

#[cfg(test)]
mod tests;
