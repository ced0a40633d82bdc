use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::CoercionStep;
use crate::coercer::Next;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;

/// Rejects `null` with a [`CoercionError::NullError`](crate::CoercionError)
/// and otherwise hands the value to the remainder of the chain.
#[derive(Debug)]
pub struct NonNullStep {
    expected_type: String,
}
impl NonNullStep {
    /// `expected_type` is the GraphQL rendering of the non-null layer (e.g.
    /// `[Int!]!`), reported when a `null` is rejected.
    pub fn new(expected_type: impl Into<String>) -> Self {
        Self {
            expected_type: expected_type.into(),
        }
    }
}
impl CoercionStep for NonNullStep {
    fn label(&self) -> String {
        "NonNull".to_string()
    }

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        if value.is_null() {
            let err = scope.null_error(self.expected_type.as_str());
            return futures::future::ready(Err(err)).boxed();
        }
        next.run(value, scope)
    }
}
