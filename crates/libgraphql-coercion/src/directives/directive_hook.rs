use crate::coercer::CoercionResult;
use crate::coercer::CoercionScope;
use crate::coercer::Next;
use crate::Value;
use async_trait::async_trait;
use indexmap::IndexMap;

/// The arguments a directive hook is bound to, in declaration order.
///
/// An entry is `None` ("undefined") when the annotation did not pass the
/// argument and the directive declares no default for it. This is distinct
/// from an explicit `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectiveArgs(IndexMap<String, Option<Value>>);
impl DirectiveArgs {
    pub fn new(args: IndexMap<String, Option<Value>>) -> Self {
        Self(args)
    }

    /// The value of `name`, or `None` if it is undefined or not a parameter
    /// of the directive.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).and_then(Option::as_ref)
    }

    pub fn is_undefined(&self, name: &str) -> bool {
        self.get(name).is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, name: String, value: Option<Value>) {
        self.0.insert(name, value);
    }
}

/// A callback a [`Directive`](crate::directives::Directive) binds to one of
/// its [`HookName`](crate::directives::HookName)s.
///
/// Hooks form a chain of responsibility: `next` is everything after this
/// hook (further directives, then the wrapped coercion, if any). A hook may
/// transform the value before calling `next`, transform `next`'s result,
/// do both, or never call `next` at all.
#[async_trait]
pub trait DirectiveHook: Send + Sync {
    async fn call(
        &self,
        args: &DirectiveArgs,
        value: Value,
        scope: CoercionScope<'_>,
        next: Next<'_>,
    ) -> CoercionResult;
}
