use thiserror::Error;

/// Error of [`counting_sort`](crate::Sort1Ext::counting_sort) and
/// [`counting_sort_by_key`](crate::Sort1Ext::counting_sort_by_key).
///
/// Returned before any output is produced, the input is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidRange {
	/// The range start exceeds its stop.
	#[error("range start exceeds range stop")]
	Reversed,
	/// The width of the range does not fit into `usize` or its buckets cannot be allocated.
	#[error("range width exceeds addressable memory")]
	TooWide,
	/// The key of the element at `index` lies outside of the half-open range.
	#[error("key of element at index {index} lies outside of range")]
	Element {
		/// Index of the first offending element.
		index: usize,
	},
}
