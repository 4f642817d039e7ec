//! Classic [counting sort], [heapsort], [quicksort], and [insertion sort] for non-contiguous
//! (sub)views into *n*-dimensional arrays of [`ndarray`] with arbitrary memory layout.
//!
//! # Example
//!
//! ```
//! use ndarray_classic_sort::{ndarray::arr2, Sort1Ext};
//!
//! // 2-dimensional array of 4 rows and 3 columns.
//! let mut v = arr2(&[[-5, 4, 2],   // row 0, axis 0
//!                    [ 8, 3, 8],   // row 1, axis 0
//!                    [38, 9, 3],   // row 2, axis 0
//!                    [ 4, 9, -1]]); // row 3, axis 0
//!
//! // Due to row-major memory layout, columns are non-contiguous.
//! let mut column = v.column_mut(2);
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // In-place sorts return the (sub)view for chaining.
//! assert!(column.heap_sort().is_sorted());
//!
//! assert!(v == arr2(&[[-5, 4, -1],
//!                     [ 8, 3,  2],
//!                     [38, 9,  3],
//!                     [ 4, 9,  8]]));
//!
//! // Counting sort leaves its input untouched and returns a new array.
//! let column = v.column(0).counting_sort(-5, 39).unwrap();
//! assert_eq!(column.to_vec(), [-5, 4, 8, 38]);
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view and *k* the width of the key range.
//!
//! | Resource | Complexity | Counting (stable)    | Heap (unstable)  | Quick (unstable) | Insertion (stable) |
//! |----------|------------|----------------------|------------------|------------------|--------------------|
//! | Time     | Best       | *O*(*n* + *k*)       | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*)           |
//! | Time     | Average    | *O*(*n* + *k*)       | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*^2)         |
//! | Time     | Worst      | *O*(*n* + *k*)       | *O*(*n* log *n*) | *O*(*n*^2)       | *O*(*n*^2)         |
//! | Space    | Worst      | *O*(*n* + *k*)       | *O*(1)           | *O*(log *n*)     | *O*(1)             |
//!
//! [counting sort]: https://en.wikipedia.org/wiki/Counting_sort
//! [heapsort]: https://en.wikipedia.org/wiki/Heapsort
//! [quicksort]: https://en.wikipedia.org/wiki/Quicksort
//! [insertion sort]: https://en.wikipedia.org/wiki/Insertion_sort
//!
//! # Features
//!
//!   * `alloc` for `counting_sort`/`counting_sort_by_key`. Enabled by `std`.
//!   * `std` for [`ndarray`]'s `std` feature. Enabled by `default`.
//!   * `tracing` for diagnostic events via [`tracing`](https://docs.rs/tracing), e.g., rejected
//!     counting ranges. No subscriber is installed.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

macro_rules! debug {
	($($arg:tt)+) => {
		#[cfg(feature = "tracing")]
		tracing::debug!($($arg)+);
	};
}

macro_rules! trace {
	($($arg:tt)+) => {
		#[cfg(feature = "tracing")]
		tracing::trace!($($arg)+);
	};
}

mod counting_sort;
mod error;
mod heap_sort;
mod insertion_sort;
mod key;
mod partition;
mod quick_sort;

#[cfg(feature = "alloc")]
use crate::counting_sort::counting_sort;

use crate::{
	heap_sort::heap_sort, insertion_sort::insertion_sort, partition::is_sorted,
	quick_sort::quick_sort,
};
#[cfg(feature = "alloc")]
use ndarray::Array1;
use ndarray::{ArrayBase, Data, DataMut, Ix1};

pub use crate::{error::InvalidRange, key::Key, partition::Pivot};
pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing classic sorting algorithms.
///
/// In-place sorts return `self` for chaining.
pub trait Sort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array into a new array by counting its elements in the half-open range
	/// `start..stop`.
	///
	/// This sort is stable (i.e., does not reorder equal elements), allocates, and is
	/// *O*(*n* + *k*) worst-case where *k* is the width of the range. The array itself is left
	/// untouched.
	///
	/// # Errors
	///
	/// Fails before producing any output with
	///
	///   * [`InvalidRange::Reversed`] if `start > stop`,
	///   * [`InvalidRange::TooWide`] if the buckets of the range cannot be allocated, or
	///   * [`InvalidRange::Element`] with the index of the first element outside of the range.
	///
	/// An empty range is valid for an empty array only.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, InvalidRange, Sort1Ext};
	///
	/// let v = arr1(&[4, 2, 2, 8, 3, 3, 1]);
	/// assert_eq!(v.counting_sort(0, 9), Ok(arr1(&[1, 2, 2, 3, 3, 4, 8])));
	///
	/// assert_eq!(arr1(&[5]).counting_sort(0, 3), Err(InvalidRange::Element { index: 0 }));
	/// assert_eq!(arr1(&[1]).counting_sort(3, 0), Err(InvalidRange::Reversed));
	/// assert_eq!(arr1::<i32>(&[]).counting_sort(10, 10), Ok(arr1(&[])));
	/// ```
	#[cfg(feature = "alloc")]
	fn counting_sort(&self, start: A, stop: A) -> Result<Array1<A>, InvalidRange>
	where
		A: Key;
	/// Sorts the array into a new array by counting the keys of its elements in the half-open
	/// range `start..stop`.
	///
	/// This sort is stable (i.e., does not reorder equal elements), allocates, and is
	/// *O*(*m* \* *n* + *k*) worst-case where the key function is *O*(*m*) and *k* is the width
	/// of the range. The key function is called exactly once per element.
	///
	/// # Errors
	///
	/// Same as [`counting_sort`](Sort1Ext::counting_sort) with respect to the keys.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let v = arr1(&[('d', 3), ('a', 1), ('c', 3), ('b', 1)]);
	///
	/// let sorted = v.counting_sort_by_key(0, 4, |&(_, key)| key).unwrap();
	/// assert_eq!(sorted, arr1(&[('a', 1), ('b', 1), ('d', 3), ('c', 3)]));
	/// ```
	#[cfg(feature = "alloc")]
	fn counting_sort_by_key<K, F>(
		&self,
		start: K,
		stop: K,
		f: F,
	) -> Result<Array1<A>, InvalidRange>
	where
		A: Clone,
		K: Key,
		F: FnMut(&A) -> K;

	/// Sorts the array in place using heapsort.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n* log *n*) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// v.heap_sort();
	/// assert!(v == arr1(&[1, 2, 3, 5, 8, 9]));
	/// ```
	fn heap_sort(&mut self) -> &mut Self
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place using quicksort with the last element of each (sub)view as pivot.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), *O*(*n* log *n*) on average, and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// Partitions with the Lomuto scheme. Already sorted, reverse sorted, and all-equal arrays are
	/// worst-case, see [`quick_sort_with`](Sort1Ext::quick_sort_with) for a more robust pivot.
	/// Recursion always descends into the shorter partition, so the stack depth is
	/// *O*(log *n*) even in the worst case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// v.quick_sort();
	/// assert!(v == arr1(&[1, 2, 3, 5, 8, 9]));
	///
	/// // worst case for the last element as pivot
	/// let mut v = arr1(&[1, 2, 3, 4, 5]);
	/// assert!(v.quick_sort().is_sorted());
	/// ```
	fn quick_sort(&mut self) -> &mut Self
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place using quicksort with the given [`Pivot`] strategy.
	///
	/// Same as [`quick_sort`](Sort1Ext::quick_sort) for [`Pivot::Last`].
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::Array1, Pivot, Sort1Ext};
	///
	/// let mut v = (0..1_000).rev().collect::<Array1<i32>>();
	///
	/// v.quick_sort_with(Pivot::MedianOfThree);
	/// assert!(v == (0..1_000).collect::<Array1<i32>>());
	/// ```
	fn quick_sort_with(&mut self, pivot: Pivot) -> &mut Self
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in place using insertion sort.
	///
	/// This sort is stable (i.e., does not reorder equal elements), in-place
	/// (i.e., does not allocate), *O*(*n*) for already sorted arrays, and *O*(*n*^2) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.insertion_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn insertion_sort(&mut self) -> &mut Self
	where
		A: Ord,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// Note that if `A` is only `PartialOrd`, but not `Ord`, the above definition implies that
	/// this function returns `false` if any two consecutive items are not comparable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
}

impl<A, S> Sort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[cfg(feature = "alloc")]
	#[inline]
	fn counting_sort(&self, start: A, stop: A) -> Result<Array1<A>, InvalidRange>
	where
		A: Key,
	{
		counting_sort(self.view(), start, stop, |&a| a)
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn counting_sort_by_key<K, F>(
		&self,
		start: K,
		stop: K,
		f: F,
	) -> Result<Array1<A>, InvalidRange>
	where
		A: Clone,
		K: Key,
		F: FnMut(&A) -> K,
	{
		counting_sort(self.view(), start, stop, f)
	}

	#[inline]
	fn heap_sort(&mut self) -> &mut Self
	where
		A: Ord,
		S: DataMut,
	{
		heap_sort(self.view_mut(), &mut A::lt);
		self
	}
	#[inline]
	fn quick_sort(&mut self) -> &mut Self
	where
		A: Ord,
		S: DataMut,
	{
		self.quick_sort_with(Pivot::Last)
	}
	#[inline]
	fn quick_sort_with(&mut self, pivot: Pivot) -> &mut Self
	where
		A: Ord,
		S: DataMut,
	{
		quick_sort(self.view_mut(), pivot, A::lt);
		self
	}
	#[inline]
	fn insertion_sort(&mut self) -> &mut Self
	where
		A: Ord,
		S: DataMut,
	{
		insertion_sort(self.view_mut(), &mut A::lt);
		self
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
}
