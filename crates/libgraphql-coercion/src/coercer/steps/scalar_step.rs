use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::CoercionStep;
use crate::coercer::Direction;
use crate::coercer::Next;
use crate::scalars::ScalarCoercion;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;

/// Applies a scalar's direction-specific coercion function. `null` passes
/// through untouched; a surrounding [`NonNullStep`](super::NonNullStep)
/// decides whether it is legal.
pub struct ScalarStep {
    coercion: Arc<dyn ScalarCoercion>,
    direction: Direction,
    type_name: String,
}
impl ScalarStep {
    pub fn new(
        type_name: impl Into<String>,
        coercion: Arc<dyn ScalarCoercion>,
        direction: Direction,
    ) -> Self {
        Self {
            coercion,
            direction,
            type_name: type_name.into(),
        }
    }

    pub(crate) async fn coerce_scalar(
        &self,
        value: Value,
        scope: CoercionScope<'_>,
    ) -> CoercionResult {
        let coerced = match self.direction {
            Direction::Input => self.coercion.coerce_input(value).await,
            Direction::Output => self.coercion.coerce_output(value).await,
        };
        coerced.map_err(|err| scope.invalid_value(self.type_name.as_str(), err.message))
    }
}
impl CoercionStep for ScalarStep {
    fn label(&self) -> String {
        format!("Scalar({})", self.type_name)
    }

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        async move {
            if value.is_null() {
                return Ok(Value::Null);
            }
            log::trace!(
                "Coercing {} value for `{}` as scalar `{}`.",
                self.direction,
                scope.info.path,
                self.type_name,
            );
            let coerced = self.coerce_scalar(value, scope).await?;
            next.run(coerced, scope).await
        }.boxed()
    }
}
