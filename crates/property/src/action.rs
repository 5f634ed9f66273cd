//! Async work gated on observable state.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::broadcast;

use crate::property::{MutableProperty, Observable, Property};

/// Capacity of the [`Action::values`] channel.
const VALUES_CAPACITY: usize = 16;

/// Why [`Action::apply`] produced no value.
#[derive(Debug, thiserror::Error)]
pub enum ActionError<E> {
    /// The state did not enable the action, or it was already running.
    #[error("action is disabled")]
    Disabled,

    /// The work itself failed.
    #[error("action failed: {0}")]
    Producer(#[source] E),
}

type Work<S, O, E> = Arc<dyn Fn(S) -> BoxFuture<'static, Result<O, E>> + Send + Sync>;
type Predicate<S> = Arc<dyn Fn(&S) -> bool + Send + Sync>;

/// Runs `work` on the current state, one execution at a time, when the
/// state enables it.
pub struct Action<S, O, E> {
    state: Property<S>,
    enabled_if: Predicate<S>,
    work: Work<S, O, E>,
    executing: MutableProperty<bool>,
    enabled: Property<bool>,
    values: broadcast::Sender<O>,
}

impl<S, O, E> Action<S, O, E>
where
    S: Clone + Send + Sync + 'static,
    O: Clone + Send + 'static,
    E: Send + 'static,
{
    pub fn new<P, G, W, Fut>(state: &P, enabled_if: G, work: W) -> Self
    where
        P: Observable<Value = S>,
        G: Fn(&S) -> bool + Send + Sync + 'static,
        W: Fn(S) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, E>> + Send + 'static,
    {
        let state = state.as_property();
        let enabled_if: Predicate<S> = Arc::new(enabled_if);
        let executing = MutableProperty::new(false);

        let enabled = {
            let enabled_if = Arc::clone(&enabled_if);
            Property::combine_latest(&state, &executing)
                .map(move |(state, running)| !*running && enabled_if(state))
        };

        let work: Work<S, O, E> = Arc::new(move |state| work(state).boxed());
        let (values, _) = broadcast::channel(VALUES_CAPACITY);

        Self {
            state,
            enabled_if,
            work,
            executing,
            enabled,
            values,
        }
    }

    /// Runs the work on the current state.
    ///
    /// Fails with [`ActionError::Disabled`] when the state does not enable
    /// the action or another execution is in flight.
    pub async fn apply(&self) -> Result<O, ActionError<E>> {
        let state = self.state.value();
        if !(self.enabled_if)(&state) {
            tracing::debug!("action disabled by state");
            return Err(ActionError::Disabled);
        }

        let started = self.executing.modify(|running| !std::mem::replace(running, true));
        if !started {
            tracing::debug!("action already executing");
            return Err(ActionError::Disabled);
        }
        let _running = Executing(&self.executing);

        match (self.work)(state).await {
            Ok(output) => {
                let _ = self.values.send(output.clone());
                Ok(output)
            }
            Err(error) => Err(ActionError::Producer(error)),
        }
    }

    /// `true` while the state enables the action and it is not running.
    pub fn is_enabled(&self) -> Property<bool> {
        self.enabled.clone()
    }

    pub fn is_executing(&self) -> Property<bool> {
        self.executing.as_property()
    }

    /// Successful outputs of every later execution.
    pub fn values(&self) -> broadcast::Receiver<O> {
        self.values.subscribe()
    }

    pub fn state(&self) -> &Property<S> {
        &self.state
    }
}

/// Clears the executing flag when an execution ends or is cancelled.
struct Executing<'a>(&'a MutableProperty<bool>);

impl Drop for Executing<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S, O, E> fmt::Debug for Action<S, O, E>
where
    S: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("enabled", &self.enabled.value())
            .field("executing", &self.executing.value())
            .finish_non_exhaustive()
    }
}
