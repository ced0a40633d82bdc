use crate::coercer::Coercer;
use crate::coercer::steps::ScalarStep;
use crate::coercer::Direction;
use crate::directives::get_directive_instances;
use crate::directives::wrap_with_directives;
use crate::directives::HookName;
use crate::scalars::IntScalar;
use crate::test_utils::recorded;
use crate::test_utils::recording_context;
use crate::test_utils::test_schema;
use crate::types::DefinitionRef;
use crate::types::DirectiveAnnotation;
use crate::CoercionError;
use crate::Context;
use crate::ResolutionInfo;
use crate::Value;
use std::sync::Arc;

type Result<T> = std::result::Result<T, CoercionError>;

fn record(label: &str) -> DirectiveAnnotation {
    DirectiveAnnotation::new("record").with_arg("label", label)
}

#[tokio::test]
async fn first_declared_directive_runs_first() -> Result<()> {
    let schema = test_schema();
    let bindings = get_directive_instances(&[record("D1"), record("D2")], &schema);
    let inner = Coercer::from_step(ScalarStep::new("Int", Arc::new(IntScalar), Direction::Input));
    let coercer = wrap_with_directives(&bindings, HookName::OnArgumentExecution, Some(&inner));

    assert_eq!(coercer.labels(), vec![
        "@record:on_argument_execution",
        "@record:on_argument_execution",
        "Scalar(Int)",
    ]);

    let context = recording_context();
    let coerced = coercer.coerce(
        Value::Int(7),
        DefinitionRef::Variable("v"),
        &context,
        &ResolutionInfo::default(),
    ).await?;

    assert_eq!(coerced, Value::Int(7));
    assert_eq!(recorded(&context), vec!["enter:D1", "enter:D2", "exit:D2", "exit:D1"]);
    Ok(())
}

#[tokio::test]
async fn short_circuiting_directive_skips_the_rest_of_the_chain() -> Result<()> {
    let schema = test_schema();
    let bindings = get_directive_instances(
        &[
            record("outer"),
            DirectiveAnnotation::new("replace").with_arg("value", "replaced"),
            record("inner"),
        ],
        &schema,
    );
    let inner = Coercer::from_step(ScalarStep::new("Int", Arc::new(IntScalar), Direction::Input));
    let coercer = wrap_with_directives(&bindings, HookName::OnArgumentExecution, Some(&inner));

    let context = recording_context();
    let coerced = coercer.coerce(
        Value::from("not an int"),
        DefinitionRef::Variable("v"),
        &context,
        &ResolutionInfo::default(),
    ).await?;

    assert_eq!(coerced, Value::from("replaced"));
    assert_eq!(recorded(&context), vec!["enter:outer", "exit:outer"]);
    Ok(())
}

#[tokio::test]
async fn bindings_without_the_hook_are_left_out() -> Result<()> {
    let schema = test_schema();
    let bindings = get_directive_instances(
        &[DirectiveAnnotation::new("upper"), DirectiveAnnotation::new("trim")],
        &schema,
    );
    let coercer = wrap_with_directives(&bindings, HookName::OnArgumentExecution, None);

    assert_eq!(coercer.labels(), vec!["@trim:on_argument_execution"]);
    let coerced = coercer.coerce(
        Value::from("  x  "),
        DefinitionRef::Variable("v"),
        &Context::empty(),
        &ResolutionInfo::default(),
    ).await?;
    assert_eq!(coerced, Value::from("x"));
    Ok(())
}

#[test]
fn no_bindings_and_no_inner_is_identity() {
    assert!(wrap_with_directives(&[], HookName::OnFieldExecution, None).is_identity());
}
