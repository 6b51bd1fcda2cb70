use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::tools::ToolError;

type Factory<T> = Box<dyn Fn() -> Result<Arc<T>, ToolError> + Send + Sync>;

/// A tool slot that resolves through its factory at most once.
///
/// The first successful resolution is cached for the handle's lifetime, and
/// concurrent first resolutions cannot construct the tool twice. A failed
/// resolution is returned to the caller and retried on the next access.
pub struct LazyHandle<T: ?Sized> {
    factory: Factory<T>,
    cell: OnceCell<Arc<T>>,
}

impl<T: ?Sized> LazyHandle<T> {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<T>, ToolError> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            cell: OnceCell::new(),
        }
    }

    /// A handle that fails with [`ToolError::Unavailable`] until a host
    /// registers a real factory under this slot.
    pub fn unavailable(tool: &'static str) -> Self {
        Self::new(move || {
            Err(ToolError::Unavailable {
                tool: tool.to_string(),
            })
        })
    }

    /// A handle over an already-constructed tool.
    pub fn provided(tool: Arc<T>) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self::new(move || Ok(Arc::clone(&tool)))
    }

    pub fn resolve(&self) -> Result<Arc<T>, ToolError> {
        self.cell.get_or_try_init(|| (self.factory)()).cloned()
    }
}
