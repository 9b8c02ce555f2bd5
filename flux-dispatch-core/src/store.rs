//! State container with reducer, change listeners and middleware

use std::cell::{Ref, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};

use crate::dispatcher::{DispatchToken, Dispatcher};
use crate::Action;

/// A reducer function that handles actions and mutates state
///
/// Returns `true` if the action was handled and the state changed.
/// Actions the reducer does not recognise must return `false` and leave
/// the state untouched.
pub type Reducer<S, A> = fn(&mut S, &A) -> bool;

/// Identifies a listener registered with a [`Store`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Owner of a slice of application state
///
/// The store is the only writer of its state. State changes happen in
/// [`Store::dispatch`], which runs the reducer and, when the reducer
/// reports a change, notifies every listener with the full state.
///
/// # Type Parameters
/// * `S` - The state type
/// * `A` - The action type (must implement `Action`)
/// * `M` - Middleware wrapping each dispatch (defaults to [`NoopMiddleware`])
///
/// # Example
/// ```ignore
/// #[derive(Default)]
/// struct Prefs {
///     user_name: String,
/// }
///
/// fn reducer(state: &mut Prefs, action: &PrefsAction) -> bool {
///     match action {
///         PrefsAction::UpdateUsername { value } => {
///             state.user_name = value.clone();
///             true
///         }
///         _ => false,
///     }
/// }
///
/// let mut store = Store::new(Prefs::default(), reducer);
/// store.add_listener(|prefs| println!("hello {}", prefs.user_name));
/// store.dispatch(&PrefsAction::UpdateUsername { value: "Alice".into() });
/// ```
pub struct Store<S, A: Action, M: Middleware<A> = NoopMiddleware> {
    state: S,
    reducer: Reducer<S, A>,
    listeners: Vec<(ListenerId, Listener<S>)>,
    next_listener: u64,
    middleware: M,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<S, A: Action, M: Middleware<A>> Store<S, A, M> {
    /// Create a new store whose dispatches run through `middleware`
    pub fn with_middleware(state: S, reducer: Reducer<S, A>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            listeners: Vec::new(),
            next_listener: 0,
            middleware,
            _marker: PhantomData,
        }
    }

    /// Handle an action
    ///
    /// Runs the reducer and, if it reported a change, calls every listener
    /// in registration order. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: &A) -> bool {
        self.middleware.before(action);
        let changed = (self.reducer)(&mut self.state, action);
        if changed {
            self.emit_change();
        }
        self.middleware.after(action, changed);
        changed
    }

    fn emit_change(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Register a listener called with the state after every change
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&S) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Get a reference to the middleware
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Get a mutable reference to the middleware
    pub fn middleware_mut(&mut self) -> &mut M {
        &mut self.middleware
    }
}

impl<S: 'static, A: Action, M: Middleware<A> + 'static> Store<S, A, M> {
    /// Register this store with a dispatcher
    ///
    /// From now on every action dispatched through `dispatcher` reaches
    /// [`Store::dispatch`]. The returned handle is the only way to reach
    /// the store afterwards.
    pub fn attach(self, dispatcher: &Dispatcher<A>) -> StoreHandle<S, A, M> {
        let store = Rc::new(RefCell::new(self));
        let weak: Weak<RefCell<Store<S, A, M>>> = Rc::downgrade(&store);
        let token = dispatcher.register(move |action| {
            let Some(store) = weak.upgrade() else {
                return false;
            };
            let changed = store.borrow_mut().dispatch(action);
            changed
        });

        StoreHandle {
            store,
            registration: Rc::new(Registration {
                token,
                dispatcher: dispatcher.clone(),
            }),
        }
    }
}

/// Unregisters the store's handler once the last handle is gone
struct Registration<A: Action> {
    token: DispatchToken,
    dispatcher: Dispatcher<A>,
}

impl<A: Action> Drop for Registration<A> {
    fn drop(&mut self) {
        self.dispatcher.unregister(self.token);
    }
}

impl<S: fmt::Debug, A: Action, M: Middleware<A>> fmt::Debug for Store<S, A, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Shared handle to a store registered with a [`Dispatcher`]
///
/// Clones refer to the same store. When the last clone is dropped the
/// store is unregistered from its dispatcher.
///
/// # Panics
///
/// Listeners run while the store is borrowed. Calling methods of the handle
/// from inside a listener panics; use the `&S` the listener receives instead.
pub struct StoreHandle<S, A: Action, M: Middleware<A> = NoopMiddleware> {
    store: Rc<RefCell<Store<S, A, M>>>,
    registration: Rc<Registration<A>>,
}

impl<S, A: Action, M: Middleware<A>> Clone for StoreHandle<S, A, M> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            registration: Rc::clone(&self.registration),
        }
    }
}

impl<S, A: Action, M: Middleware<A>> StoreHandle<S, A, M> {
    /// Borrow the current state
    pub fn state(&self) -> Ref<'_, S> {
        Ref::map(self.store.borrow(), |store| store.state())
    }

    /// Clone the current state
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.store.borrow().state().clone()
    }

    /// See [`Store::add_listener`]
    pub fn add_listener<F>(&self, listener: F) -> ListenerId
    where
        F: FnMut(&S) + 'static,
    {
        self.store.borrow_mut().add_listener(listener)
    }

    /// See [`Store::remove_listener`]
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.store.borrow_mut().remove_listener(id)
    }

    pub fn listener_count(&self) -> usize {
        self.store.borrow().listener_count()
    }

    /// Borrow the store's middleware
    pub fn middleware(&self) -> Ref<'_, M> {
        Ref::map(self.store.borrow(), |store| store.middleware())
    }

    /// Token under which the store is registered with the dispatcher
    pub fn dispatch_token(&self) -> DispatchToken {
        self.registration.token
    }

    /// The dispatcher this store is attached to
    pub fn dispatcher(&self) -> &Dispatcher<A> {
        &self.registration.dispatcher
    }

    /// Stop receiving actions. Returns `false` if already detached.
    pub fn detach(&self) -> bool {
        self.registration
            .dispatcher
            .unregister(self.registration.token)
    }
}

/// Middleware trait for intercepting actions
///
/// Implement this trait to add logging or other cross-cutting concerns
/// to a store.
pub trait Middleware<A: Action> {
    /// Called before the action is passed to the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer (and any listeners) ran
    fn after(&mut self, action: &A, state_changed: bool);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs actions through `tracing`
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    /// Label included in every log line, usually the store name
    pub store: &'static str,
    /// Whether to log when the store receives an action
    pub log_before: bool,
    /// Whether to log once the action was processed
    pub log_after: bool,
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new("store")
    }
}

impl LoggingMiddleware {
    /// Create a logging middleware that logs after processing only
    pub fn new(store: &'static str) -> Self {
        Self {
            store,
            log_before: false,
            log_after: true,
        }
    }

    /// Create a logging middleware that logs both before and after
    pub fn verbose(store: &'static str) -> Self {
        Self {
            store,
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(
                store = self.store,
                action = ?action,
                "Store received action"
            );
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                store = self.store,
                action_type = %action.action_type(),
                state_changed,
                "Action processed"
            );
        }
    }
}

/// Compose multiple middleware into a single middleware
pub struct ComposedMiddleware<A: Action> {
    middlewares: Vec<Box<dyn Middleware<A>>>,
}

impl<A: Action> fmt::Debug for ComposedMiddleware<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedMiddleware")
            .field("middlewares_count", &self.middlewares.len())
            .finish()
    }
}

impl<A: Action> Default for ComposedMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Action> ComposedMiddleware<A> {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    /// Add a middleware to the composition
    pub fn add<M: Middleware<A> + 'static>(&mut self, middleware: M) {
        self.middlewares.push(Box::new(middleware));
    }
}

impl<A: Action> Middleware<A> for ComposedMiddleware<A> {
    fn before(&mut self, action: &A) {
        for middleware in &mut self.middlewares {
            middleware.before(action);
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        // Reverse order so the first middleware wraps all the others
        for middleware in self.middlewares.iter_mut().rev() {
            middleware.after(action, state_changed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Counter {
        value: i32,
        label: String,
    }

    #[derive(Clone, Debug)]
    enum CounterAction {
        Add(i32),
        Label(String),
        Unknown,
    }

    impl Action for CounterAction {
        fn name(&self) -> &'static str {
            match self {
                CounterAction::Add(_) => "Add",
                CounterAction::Label(_) => "Label",
                CounterAction::Unknown => "Unknown",
            }
        }

        fn action_type(&self) -> &'static str {
            match self {
                CounterAction::Add(_) => "ADD",
                CounterAction::Label(_) => "LABEL",
                CounterAction::Unknown => "UNKNOWN",
            }
        }
    }

    fn reducer(state: &mut Counter, action: &CounterAction) -> bool {
        match action {
            CounterAction::Add(n) => {
                state.value += n;
                true
            }
            CounterAction::Label(label) => {
                state.label = label.clone();
                true
            }
            CounterAction::Unknown => false,
        }
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = Store::new(Counter::default(), reducer);

        assert!(store.dispatch(&CounterAction::Add(2)));
        assert!(store.dispatch(&CounterAction::Add(3)));
        assert_eq!(store.state().value, 5);
    }

    #[test]
    fn test_listener_receives_new_state() {
        let mut store = Store::new(Counter::default(), reducer);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.add_listener(move |state: &Counter| sink.borrow_mut().push(state.value));

        store.dispatch(&CounterAction::Add(1));
        store.dispatch(&CounterAction::Add(1));

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unhandled_action_skips_listeners() {
        let mut store = Store::new(Counter::default(), reducer);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.add_listener(move |_| counter.set(counter.get() + 1));

        assert!(!store.dispatch(&CounterAction::Unknown));
        assert_eq!(calls.get(), 0);
        assert_eq!(*store.state(), Counter::default());
    }

    #[test]
    fn test_listeners_called_in_order() {
        let mut store = Store::new(Counter::default(), reducer);
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            store.add_listener(move |_| order.borrow_mut().push(tag));
        }

        store.dispatch(&CounterAction::Label("x".into()));
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_remove_listener() {
        let mut store = Store::new(Counter::default(), reducer);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.add_listener(move |_| counter.set(counter.get() + 1));

        assert!(store.remove_listener(id));
        assert!(!store.remove_listener(id));
        store.dispatch(&CounterAction::Add(1));
        assert_eq!(calls.get(), 0);
        assert_eq!(store.listener_count(), 0);
    }

    #[derive(Default)]
    struct CountingMiddleware {
        before_count: usize,
        after_changed: Vec<bool>,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {
            self.before_count += 1;
        }

        fn after(&mut self, _action: &A, state_changed: bool) {
            self.after_changed.push(state_changed);
        }
    }

    #[test]
    fn test_store_with_middleware() {
        let mut store = Store::with_middleware(
            Counter::default(),
            reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(&CounterAction::Add(1));
        store.dispatch(&CounterAction::Unknown);

        assert_eq!(store.middleware().before_count, 2);
        assert_eq!(store.middleware().after_changed, vec![true, false]);
    }

    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Middleware<CounterAction> for Recorder {
        fn before(&mut self, _action: &CounterAction) {
            self.log.borrow_mut().push(format!("{}:before", self.tag));
        }

        fn after(&mut self, _action: &CounterAction, _state_changed: bool) {
            self.log.borrow_mut().push(format!("{}:after", self.tag));
        }
    }

    #[test]
    fn test_composed_middleware_nesting() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut composed = ComposedMiddleware::new();
        composed.add(Recorder {
            tag: "outer",
            log: Rc::clone(&log),
        });
        composed.add(Recorder {
            tag: "inner",
            log: Rc::clone(&log),
        });

        let mut store = Store::with_middleware(Counter::default(), reducer, composed);
        store.dispatch(&CounterAction::Add(1));

        assert_eq!(
            *log.borrow(),
            vec!["outer:before", "inner:before", "inner:after", "outer:after"]
        );
    }

    #[test]
    fn test_attached_store_receives_dispatches() {
        let dispatcher = Dispatcher::new();
        let store = Store::new(Counter::default(), reducer).attach(&dispatcher);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.add_listener(move |_| counter.set(counter.get() + 1));

        let report = dispatcher.dispatch(&CounterAction::Add(4)).unwrap();
        assert_eq!(report.changed, 1);
        assert_eq!(store.state().value, 4);

        let report = dispatcher.dispatch(&CounterAction::Unknown).unwrap();
        assert_eq!(report.changed, 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_detach() {
        let dispatcher = Dispatcher::new();
        let store = Store::new(Counter::default(), reducer).attach(&dispatcher);

        assert!(store.detach());
        assert!(!store.detach());
        dispatcher.dispatch(&CounterAction::Add(1)).unwrap();
        assert_eq!(store.snapshot(), Counter::default());
    }

    #[test]
    fn test_dropped_store_is_unregistered() {
        let dispatcher = Dispatcher::new();
        for _ in 0..100 {
            let store = Store::new(Counter::default(), reducer).attach(&dispatcher);
            drop(store);
        }
        assert_eq!(dispatcher.handler_count(), 0);

        let report = dispatcher.dispatch(&CounterAction::Add(1)).unwrap();
        assert_eq!(report.handlers, 0);
        assert_eq!(report.changed, 0);
    }

    #[test]
    fn test_store_stays_registered_while_a_clone_lives() {
        let dispatcher = Dispatcher::new();
        let store = Store::new(Counter::default(), reducer).attach(&dispatcher);
        let other = store.clone();
        drop(store);
        assert_eq!(dispatcher.handler_count(), 1);

        dispatcher.dispatch(&CounterAction::Add(2)).unwrap();
        assert_eq!(other.state().value, 2);

        drop(other);
        assert_eq!(dispatcher.handler_count(), 0);
    }

    #[test]
    fn test_detached_store_drops_quietly() {
        let dispatcher = Dispatcher::new();
        let store = Store::new(Counter::default(), reducer).attach(&dispatcher);
        let kept = Store::new(Counter::default(), reducer).attach(&dispatcher);
        assert!(store.detach());
        drop(store);
        assert_eq!(dispatcher.handler_count(), 1);

        dispatcher.dispatch(&CounterAction::Add(3)).unwrap();
        assert_eq!(kept.state().value, 3);
    }

    #[test]
    fn test_listener_dispatch_is_rejected() {
        let dispatcher = Dispatcher::new();
        let store = Store::new(Counter::default(), reducer).attach(&dispatcher);
        let nested = Rc::new(RefCell::new(None));

        let inner = dispatcher.clone();
        let slot = Rc::clone(&nested);
        store.add_listener(move |_| {
            *slot.borrow_mut() = Some(inner.dispatch(&CounterAction::Add(100)));
        });

        dispatcher.dispatch(&CounterAction::Add(1)).unwrap();
        assert!(matches!(
            nested.borrow_mut().take(),
            Some(Err(crate::DispatchError::AlreadyDispatching { .. }))
        ));
        assert_eq!(store.state().value, 1);
    }
}
