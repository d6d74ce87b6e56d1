//! Base trait for reducer-owned state.

/// Marker trait for state objects driven by a [`Reducer`](super::Reducer).
///
/// `Default` is the initial state; reset transitions rebuild it from there.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
