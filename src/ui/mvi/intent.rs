//! Marker trait for intents.

/// Something that happened to a view: a key press, a pasted string, or a
/// request reporting progress or completion.
///
/// Reducers turn intents into new states.
pub trait Intent: Send + 'static {}
