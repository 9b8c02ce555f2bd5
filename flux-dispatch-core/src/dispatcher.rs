//! Central dispatcher that fans actions out to registered stores
//!
//! The dispatcher is the single entry point for state changes. View code
//! builds an action and hands it to [`Dispatcher::dispatch`]; every
//! registered handler (usually a [`Store`](crate::Store)) sees the action
//! synchronously, in registration order.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::DispatchError;
use crate::Action;

/// Identifies a handler registered with a [`Dispatcher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DispatchToken(u64);

impl DispatchToken {
    /// Raw numeric id, increasing in registration order
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DispatchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID_{}", self.0)
    }
}

/// Outcome of a single [`Dispatcher::dispatch`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Number of handlers the action was delivered to
    pub handlers: usize,
    /// Number of handlers that reported a state change
    pub changed: usize,
}

impl DispatchReport {
    /// Returns true if at least one handler changed its state
    pub fn any_changed(&self) -> bool {
        self.changed > 0
    }
}

type Handler<A> = Box<dyn FnMut(&A) -> bool>;

struct Registration<A> {
    token: DispatchToken,
    handler: Handler<A>,
}

struct Inner<A> {
    handlers: RefCell<Vec<Registration<A>>>,
    // Registered while a dispatch was running; merged in once it ends.
    pending: RefCell<Vec<Registration<A>>>,
    live: RefCell<Vec<DispatchToken>>,
    next_token: Cell<u64>,
    dispatching: Cell<bool>,
}

/// Fan-out point for actions
///
/// `Dispatcher` is a cheap handle: clones share the same handler list, so a
/// single dispatcher can be created at startup and passed to every store and
/// view that needs it. It is single-threaded (`!Send`); dispatch is fully
/// synchronous.
///
/// # Example
/// ```ignore
/// let dispatcher = Dispatcher::<MyAction>::new();
/// let token = dispatcher.register(|action| {
///     println!("got {}", action.action_type());
///     false
/// });
/// dispatcher.dispatch(&MyAction::Ping)?;
/// dispatcher.unregister(token);
/// ```
pub struct Dispatcher<A: Action> {
    inner: Rc<Inner<A>>,
}

impl<A: Action> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: Action> Default for Dispatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> fmt::Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.handler_count())
            .field("dispatching", &self.is_dispatching())
            .finish()
    }
}

impl<A: Action> Dispatcher<A> {
    /// Create a dispatcher with no registered handlers
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                handlers: RefCell::new(Vec::new()),
                pending: RefCell::new(Vec::new()),
                live: RefCell::new(Vec::new()),
                next_token: Cell::new(1),
                dispatching: Cell::new(false),
            }),
        }
    }

    /// Register a handler that will receive every dispatched action
    ///
    /// The handler returns `true` if the action changed its state. A handler
    /// registered during a dispatch starts receiving actions from the next one.
    pub fn register<F>(&self, handler: F) -> DispatchToken
    where
        F: FnMut(&A) -> bool + 'static,
    {
        let token = DispatchToken(self.inner.next_token.get());
        self.inner.next_token.set(token.0 + 1);

        let registration = Registration {
            token,
            handler: Box::new(handler),
        };
        if self.inner.dispatching.get() {
            self.inner.pending.borrow_mut().push(registration);
        } else {
            self.inner.handlers.borrow_mut().push(registration);
        }
        self.inner.live.borrow_mut().push(token);

        debug!(token = %token, "Handler registered");
        token
    }

    /// Remove a handler
    ///
    /// Returns `false` if the token was unknown or already removed. A handler
    /// removed during a dispatch still sees the action being dispatched.
    pub fn unregister(&self, token: DispatchToken) -> bool {
        let removed = {
            let mut live = self.inner.live.borrow_mut();
            let before = live.len();
            live.retain(|t| *t != token);
            live.len() != before
        };
        if !removed {
            return false;
        }

        self.inner.pending.borrow_mut().retain(|r| r.token != token);
        if !self.inner.dispatching.get() {
            self.inner.handlers.borrow_mut().retain(|r| r.token != token);
        }

        debug!(token = %token, "Handler unregistered");
        true
    }

    /// Deliver an action to every registered handler, in registration order
    ///
    /// Dispatching from inside a handler (or a store listener) is rejected
    /// with [`DispatchError::AlreadyDispatching`]. A panicking handler unwinds
    /// out of this call; the dispatcher remains usable afterwards.
    pub fn dispatch(&self, action: &A) -> Result<DispatchReport, DispatchError> {
        if self.inner.dispatching.get() {
            warn!(action = %action.name(), "Rejected nested dispatch");
            return Err(DispatchError::AlreadyDispatching {
                action: action.name(),
            });
        }

        let mut guard = DispatchGuard {
            inner: &self.inner,
            handlers: self.inner.handlers.take(),
        };
        self.inner.dispatching.set(true);

        let mut report = DispatchReport::default();
        for registration in guard.handlers.iter_mut() {
            report.handlers += 1;
            if (registration.handler)(action) {
                report.changed += 1;
            }
        }
        drop(guard);

        debug!(
            action = %action.name(),
            action_type = %action.action_type(),
            handlers = report.handlers,
            changed = report.changed,
            "Action dispatched"
        );
        Ok(report)
    }

    /// Returns true while a dispatch is in progress
    pub fn is_dispatching(&self) -> bool {
        self.inner.dispatching.get()
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.inner.live.borrow().len()
    }
}

/// Puts the handler list back and clears the dispatching flag, also while
/// unwinding from a panicking handler.
struct DispatchGuard<'a, A> {
    inner: &'a Inner<A>,
    handlers: Vec<Registration<A>>,
}

impl<A> Drop for DispatchGuard<'_, A> {
    fn drop(&mut self) {
        let mut handlers = std::mem::take(&mut self.handlers);
        {
            let live = self.inner.live.borrow();
            handlers.retain(|r| live.contains(&r.token));
        }
        handlers.extend(self.inner.pending.take());
        *self.inner.handlers.borrow_mut() = handlers;
        self.inner.dispatching.set(false);
    }
}
