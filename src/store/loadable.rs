use crate::clients::errors::Error;

/// Lifecycle of a single fetched value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Not requested yet.
    Idle,
    /// Request in flight.
    Loading,
    /// Request succeeded.
    Loaded(T),
    /// Request failed.
    Failed(Error),
}

// Idle regardless of whether `T: Default`
impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Idle
    }
}

impl<T> Loadable<T> {
    /// True while the request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    /// True once a result, success or failure, has been folded in.
    pub fn is_settled(&self) -> bool {
        matches!(self, Loadable::Loaded(_) | Loadable::Failed(_))
    }

    /// The loaded value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Loadable::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, Error>> for Loadable<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(err) => Loadable::Failed(err),
        }
    }
}
