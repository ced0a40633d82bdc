mod argument_coercer;
mod arguments_coercer;
mod coerce_arguments;

pub use argument_coercer::argument_coercer;
pub use argument_coercer::coerce_argument;
pub(crate) use argument_coercer::coerce_entry;
pub use arguments_coercer::ArgumentUnit;
pub use arguments_coercer::ArgumentUnitsResult;
pub use arguments_coercer::ArgumentsCoercer;
pub use arguments_coercer::ConcurrentArgumentsCoercer;
pub use arguments_coercer::SequentialArgumentsCoercer;
pub use coerce_arguments::coerce_arguments;

#[cfg(test)]
mod tests;
