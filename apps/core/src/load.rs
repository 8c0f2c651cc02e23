use crate::error::DataError;

/// Loading lifecycle of one remote resource, owned by the frontend's data boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// The fetch failed. `fallback` is shown instead of a blank view when a
    /// section has sample data to offer.
    Failed { message: String, fallback: Option<T> },
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn failed(error: &DataError, fallback: Option<T>) -> Self {
        Self::Failed {
            message: error.banner(),
            fallback,
        }
    }

    pub fn from_result(result: Result<T, DataError>, fallback: impl FnOnce() -> Option<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::failed(&error, fallback()),
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Data to render: the loaded value, or the fallback after a failure.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Failed { fallback, .. } => fallback.as_ref(),
            Self::Loading => None,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Failed { fallback: Some(_), .. })
    }
}

/// Where the data kept on screen after a failed fetch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The bundled sample document.
    Sample,
    /// Whatever was loaded before the failed refresh.
    Previous,
}

impl Fallback {
    /// Keeps `previous` when there is one, else builds the sample.
    pub fn choose<T>(previous: Option<T>, sample: impl FnOnce() -> T) -> (T, Self) {
        match previous {
            Some(value) => (value, Self::Previous),
            None => (sample(), Self::Sample),
        }
    }

    pub const fn notice(self) -> &'static str {
        match self {
            Self::Sample => "showing sample data",
            Self::Previous => "showing previous data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Fallback, LoadState};
    use crate::error::DataError;

    #[test]
    fn starts_loading_without_data() {
        let state = LoadState::<u32>::default();
        assert!(state.is_loading());
        assert_eq!(state.data(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_stops_loading_and_serves_fallback() {
        let state = LoadState::from_result(
            Err(DataError::Transport("connection refused".to_string())),
            || Some(vec![1, 2, 3]),
        );

        assert!(!state.is_loading());
        let message = state.error().unwrap_or_default();
        assert!(message.starts_with("Error Loading Data"));
        assert!(message.contains("connection refused"));
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));
        assert!(state.is_fallback());
    }

    #[test]
    fn failure_without_fallback_has_no_data() {
        let state: LoadState<u8> = LoadState::failed(&DataError::NotAnObject, None);
        assert_eq!(state.data(), None);
        assert!(!state.is_fallback());
        assert!(state.error().is_some());
    }

    #[test]
    fn ready_ignores_fallback_builder() {
        let state = LoadState::from_result(Ok(7), || -> Option<i32> {
            panic!("fallback must not be built on success")
        });
        assert_eq!(state, LoadState::Ready(7));
    }

    #[test]
    fn fallback_prefers_the_previous_value() {
        assert_eq!(Fallback::choose(Some(3), || 9), (3, Fallback::Previous));
        assert_eq!(Fallback::choose(None, || 9), (9, Fallback::Sample));
        assert_eq!(Fallback::Previous.notice(), "showing previous data");
    }
}
