use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::CoercionStep;
use crate::coercer::Next;
use crate::coercer::steps::ScalarStep;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;
use indexmap::IndexSet;

/// Checks membership in an enum's declared values, then coerces the
/// literal through the `String` scalar of the same direction.
///
/// Membership is checked on the raw literal before any conversion so that
/// only an exact, case-sensitive match of a declared value is accepted.
pub struct EnumStep {
    string_step: ScalarStep,
    type_name: String,
    values: IndexSet<String>,
}
impl EnumStep {
    pub fn new(
        type_name: impl Into<String>,
        values: IndexSet<String>,
        string_step: ScalarStep,
    ) -> Self {
        Self {
            string_step,
            type_name: type_name.into(),
            values,
        }
    }
}
impl CoercionStep for EnumStep {
    fn label(&self) -> String {
        format!("Enum({})", self.type_name)
    }

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        async move {
            let literal = match value {
                Value::Null => return Ok(Value::Null),
                Value::Enum(literal) | Value::String(literal) => literal,
                other => return Err(scope.invalid_value(
                    self.type_name.as_str(),
                    format!(
                        "Enum `{}` cannot represent a non-enum {} value: {other}",
                        self.type_name,
                        other.kind_name(),
                    ),
                )),
            };

            if !self.values.contains(literal.as_str()) {
                return Err(scope.invalid_value(
                    self.type_name.as_str(),
                    format!(
                        "Value `{literal}` does not exist in the `{}` enum",
                        self.type_name,
                    ),
                ));
            }

            let coerced = self.string_step
                .coerce_scalar(Value::String(literal), scope)
                .await?;
            next.run(coerced, scope).await
        }.boxed()
    }
}
