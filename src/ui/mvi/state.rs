//! Marker trait for view state.

/// Everything a view needs to render itself.
///
/// `Default` is the state a view starts in and is what `std::mem::take`
/// leaves behind while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
