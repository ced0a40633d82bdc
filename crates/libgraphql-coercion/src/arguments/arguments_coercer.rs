use crate::coercer::CoercionResult;
use crate::CoercionError;
use crate::Value;
use futures::future::BoxFuture;
use futures::FutureExt;

/// One argument's pending coercion. `Ok(None)` means the argument is
/// undefined and is omitted from the result.
pub type ArgumentUnit<'a> = BoxFuture<'a, CoercionResult<Option<Value>>>;

/// The outcome of coercing a set of [`ArgumentUnit`]s: every result in input
/// order, or the failures in input order.
pub type ArgumentUnitsResult = Result<Vec<Option<Value>>, Vec<CoercionError>>;

/// Decides how the per-argument coercions of a field occurrence are driven:
/// in which order, how concurrently, and whether the first failure stops the
/// rest.
///
/// Units are lazy; none of them makes progress until the policy polls it.
/// Whatever the scheduling, results are reported in input order.
pub trait ArgumentsCoercer: std::fmt::Debug + Send + Sync {
    fn coerce_all<'a>(
        &'a self,
        units: Vec<ArgumentUnit<'a>>,
    ) -> BoxFuture<'a, ArgumentUnitsResult>;
}

/// Polls every unit at once.
///
/// With `fail_fast` unset every unit runs to completion and all failures are
/// reported. With `fail_fast` set the first failure is returned as soon as it
/// happens and the outstanding units are dropped (cancelled).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConcurrentArgumentsCoercer {
    pub fail_fast: bool,
}
impl ArgumentsCoercer for ConcurrentArgumentsCoercer {
    fn coerce_all<'a>(
        &'a self,
        units: Vec<ArgumentUnit<'a>>,
    ) -> BoxFuture<'a, ArgumentUnitsResult> {
        async move {
            if self.fail_fast {
                return futures::future::try_join_all(units)
                    .await
                    .map_err(|err| vec![err]);
            }
            collect_results(futures::future::join_all(units).await)
        }.boxed()
    }
}

/// Runs one unit at a time, in input order, so side effects of argument
/// coercion happen in declaration order.
///
/// With `fail_fast` set, units after the first failure are never started.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SequentialArgumentsCoercer {
    pub fail_fast: bool,
}
impl ArgumentsCoercer for SequentialArgumentsCoercer {
    fn coerce_all<'a>(
        &'a self,
        units: Vec<ArgumentUnit<'a>>,
    ) -> BoxFuture<'a, ArgumentUnitsResult> {
        async move {
            let mut results = Vec::with_capacity(units.len());
            for unit in units {
                let result = unit.await;
                let failed = result.is_err();
                results.push(result);
                if failed && self.fail_fast {
                    break;
                }
            }
            collect_results(results)
        }.boxed()
    }
}

fn collect_results(
    results: Vec<CoercionResult<Option<Value>>>,
) -> ArgumentUnitsResult {
    let mut values = Vec::with_capacity(results.len());
    let mut errors = vec![];
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(err) => errors.push(err),
        }
    }
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}
