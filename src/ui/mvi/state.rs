//! Base trait for view state in the MVI layer.

/// Marker trait for view state records.
///
/// `Default` is the freshly mounted state; `PartialEq` lets tests and the
/// render loop detect whether a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
