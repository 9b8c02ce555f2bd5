//! Errors surfaced by the dispatcher

use thiserror::Error;

/// Errors returned by [`Dispatcher::dispatch`](crate::Dispatcher::dispatch)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A handler or listener tried to dispatch while a dispatch was running.
    ///
    /// The nested action is dropped; the outer dispatch carries on.
    #[error("cannot dispatch `{action}` in the middle of a dispatch")]
    AlreadyDispatching { action: &'static str },
}
