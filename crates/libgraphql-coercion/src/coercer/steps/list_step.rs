use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::CoercionStep;
use crate::coercer::Next;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;

/// Coerces every element of a list with the remainder of the chain.
///
/// Elements are coerced in order and the first element failure is returned
/// as-is, attributed to the element's index. A non-list value is coerced as a
/// single-element list
/// ([List input coercion](https://spec.graphql.org/October2021/#sec-List.Input-Coercion)).
#[derive(Debug, Default)]
pub struct ListStep;
impl CoercionStep for ListStep {
    fn label(&self) -> String {
        "List".to_string()
    }

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        async move {
            let items = match value {
                Value::Null => return Ok(Value::Null),
                Value::List(items) => items,
                single => vec![single],
            };

            let mut coerced = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                let item_info = scope.info.with_index(index);
                coerced.push(next.run(item, scope.with_info(&item_info)).await?);
            }
            Ok(Value::List(coerced))
        }.boxed()
    }
}
