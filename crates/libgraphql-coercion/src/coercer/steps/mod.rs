mod composite_output_step;
mod directive_step;
mod enum_step;
mod input_object_step;
mod list_step;
mod non_null_step;
mod scalar_step;

pub use composite_output_step::CompositeOutputStep;
pub use composite_output_step::TYPENAME_FIELD;
pub use directive_step::DirectiveStep;
pub use directive_step::PostCoercionDirectivesStep;
pub use enum_step::EnumStep;
pub use input_object_step::InputObjectStep;
pub use list_step::ListStep;
pub use non_null_step::NonNullStep;
pub use scalar_step::ScalarStep;
