use std::any::Any;
use std::sync::Arc;

/// The per-request user context handed to every coercion step, scalar
/// coercion and directive hook.
///
/// The engine never inspects the context; it is carried type-erased so that
/// coercers and hooks stay object safe. Hooks recover the embedder's type
/// with [`Context::downcast_ref`].
#[derive(Clone)]
pub struct Context(Option<Arc<dyn Any + Send + Sync>>);
impl Context {
    pub fn new<T: Any + Send + Sync>(data: T) -> Self {
        Self(Some(Arc::new(data)))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|data| data.downcast_ref::<T>())
    }
}
impl std::default::Default for Context {
    fn default() -> Self {
        Self::empty()
    }
}
impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Context")
            .field(&self.0.as_ref().map(|_| ".."))
            .finish()
    }
}
