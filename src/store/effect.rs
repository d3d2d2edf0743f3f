use std::fmt;

use futures::future::BoxFuture;

/// Identifies a kind of effect. At most one effect per id is in flight in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(pub &'static str);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Asynchronous work requested by a reducer.
///
/// Effects are plain values: the reducer describes them, the store runs them and
/// feeds the resulting action back in.
pub enum Effect<A> {
    /// Nothing to do.
    None,
    /// Run `future` and send its output back as an action. Starting a run
    /// supersedes any in-flight effect with the same id.
    Run {
        /// Kind of the effect, used for superseding and cancellation.
        id: EffectId,
        /// Work producing the follow-up action.
        future: BoxFuture<'static, A>,
    },
    /// Abort the in-flight effect with this id and discard its result.
    Cancel(EffectId),
}

impl<A> Effect<A> {
    /// Wraps `future` into a `Run` effect.
    pub fn run<F>(id: EffectId, future: F) -> Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        Effect::Run {
            id,
            future: Box::pin(future),
        }
    }

    /// Id of a `Run` or `Cancel` effect.
    pub fn id(&self) -> Option<EffectId> {
        match self {
            Effect::None => None,
            Effect::Run { id, .. } | Effect::Cancel(id) => Some(*id),
        }
    }

    /// True for [`Effect::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// The future of a `Run` effect, for driving a reducer without a store.
    pub fn into_task(self) -> Option<BoxFuture<'static, A>> {
        match self {
            Effect::Run { future, .. } => Some(future),
            Effect::None | Effect::Cancel(_) => None,
        }
    }
}

impl<A> fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => f.write_str("None"),
            Effect::Run { id, .. } => f.debug_struct("Run").field("id", id).finish_non_exhaustive(),
            Effect::Cancel(id) => f.debug_tuple("Cancel").field(id).finish(),
        }
    }
}
