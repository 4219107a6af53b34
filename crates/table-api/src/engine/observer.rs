use crate::sort::SortDirection;

/// Receives notifications fired synchronously by table interactions.
///
/// Every method defaults to a no-op; `()` is the silent observer.
pub trait TableObserver<R> {
	/// A header click produced a new sort state.
	fn on_sort_change(&mut self, _column: &str, _direction: SortDirection) {}

	/// The selected keys changed; `keys` is the full selection.
	fn on_selection_change(&mut self, _keys: &[&str]) {}

	/// A row of the current page was activated.
	fn on_row_click(&mut self, _record: &R) {}
}

impl<R> TableObserver<R> for () {}
