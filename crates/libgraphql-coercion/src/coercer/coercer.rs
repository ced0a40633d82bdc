use crate::CoercionError;
use crate::Context;
use crate::ResolutionInfo;
use crate::Value;
use crate::types::DefinitionRef;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;

pub type CoercionResult<T = Value> = std::result::Result<T, CoercionError>;

/// Everything a coercion step may consult besides the value itself.
#[derive(Clone, Copy, Debug)]
pub struct CoercionScope<'a> {
    pub context: &'a Context,
    pub definition: DefinitionRef<'a>,
    pub info: &'a ResolutionInfo,
}
impl<'a> CoercionScope<'a> {
    pub fn new(
        definition: DefinitionRef<'a>,
        context: &'a Context,
        info: &'a ResolutionInfo,
    ) -> Self {
        Self {
            context,
            definition,
            info,
        }
    }

    /// The same scope, attributed to a different location in the response
    /// (e.g. a list element).
    pub fn with_info<'b>(&self, info: &'b ResolutionInfo) -> CoercionScope<'b>
    where
        'a: 'b,
    {
        CoercionScope {
            context: self.context,
            definition: self.definition,
            info,
        }
    }

    pub fn with_definition(&self, definition: DefinitionRef<'a>) -> Self {
        Self {
            context: self.context,
            definition,
            info: self.info,
        }
    }

    /// Builds a [`CoercionError::InvalidValue`] attributed to this scope.
    pub fn invalid_value(
        &self,
        type_name: impl Into<String>,
        message: impl Into<String>,
    ) -> CoercionError {
        CoercionError::InvalidValue {
            locations: self.info.locations.clone(),
            message: message.into(),
            path: self.info.path.clone(),
            schema_coordinate: self.definition.schema_coordinate(),
            type_name: type_name.into(),
        }
    }

    /// Builds a [`CoercionError::NullError`] attributed to this scope.
    pub fn null_error(&self, expected_type: impl Into<String>) -> CoercionError {
        CoercionError::NullError {
            expected_type: expected_type.into(),
            locations: self.info.locations.clone(),
            path: self.info.path.clone(),
            schema_coordinate: self.definition.schema_coordinate(),
        }
    }
}

/// A single link in a [`Coercer`] chain.
///
/// A step receives the value, the [`CoercionScope`], and the remainder of
/// the chain as [`Next`]. It decides whether and when to hand a (possibly
/// transformed) value to `next`: wrapper steps such as lists call it once per
/// element, directive steps may skip it entirely, and terminal steps call it
/// with their result.
pub trait CoercionStep: Send + Sync {
    /// A short description of this step, used to inspect composed chains.
    fn label(&self) -> String;

    fn coerce<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
        next: Next<'a>,
    ) -> BoxFuture<'a, CoercionResult>;
}

/// The remainder of a [`Coercer`] chain after the step currently running.
/// An empty remainder returns its value unchanged.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    steps: &'a [Arc<dyn CoercionStep>],
}
impl<'a> Next<'a> {
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn run(
        self,
        value: Value,
        scope: CoercionScope<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        match self.steps.split_first() {
            Some((step, rest)) => step.coerce(value, scope, Next { steps: rest }),
            None => futures::future::ready(Ok(value)).boxed(),
        }
    }
}

/// A composed chain of [`CoercionStep`]s, outermost first.
///
/// Coercers hold no per-request state, so one instance may be shared by any
/// number of concurrent coercions. Cloning is cheap (the steps are shared).
#[derive(Clone, Default)]
pub struct Coercer {
    steps: Vec<Arc<dyn CoercionStep>>,
}
impl Coercer {
    /// A coercer that returns every value unchanged.
    pub fn identity() -> Self {
        Self { steps: vec![] }
    }

    pub fn from_step(step: impl CoercionStep + 'static) -> Self {
        Self {
            steps: vec![Arc::new(step)],
        }
    }

    pub fn from_steps(steps: Vec<Arc<dyn CoercionStep>>) -> Self {
        Self { steps }
    }

    /// Wraps `inner` with `outer`: at call time `outer` runs first and
    /// receives `inner` as its [`Next`].
    pub fn compose(outer: Arc<dyn CoercionStep>, inner: &Coercer) -> Coercer {
        let mut steps = Vec::with_capacity(inner.steps.len() + 1);
        steps.push(outer);
        steps.extend(inner.steps.iter().cloned());
        Coercer { steps }
    }

    /// This chain followed by all of `inner`'s steps.
    pub fn then(&self, inner: &Coercer) -> Coercer {
        let mut steps = self.steps.clone();
        steps.extend(inner.steps.iter().cloned());
        Coercer { steps }
    }

    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// The label of every step, outermost first.
    pub fn labels(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.label()).collect()
    }

    pub fn steps(&self) -> &[Arc<dyn CoercionStep>] {
        self.steps.as_slice()
    }

    pub fn run<'a>(
        &'a self,
        value: Value,
        scope: CoercionScope<'a>,
    ) -> BoxFuture<'a, CoercionResult> {
        Next { steps: self.steps.as_slice() }.run(value, scope)
    }

    pub async fn coerce(
        &self,
        value: Value,
        definition: DefinitionRef<'_>,
        context: &Context,
        info: &ResolutionInfo,
    ) -> CoercionResult {
        self.run(value, CoercionScope::new(definition, context, info)).await
    }
}
impl std::fmt::Debug for Coercer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.labels()).finish()
    }
}
