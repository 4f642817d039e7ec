//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use ndarray::{ArrayViewMut1, s};

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
pub fn heap_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	build_max_heap(v.view_mut(), is_less);

	// Pop maximal elements from the heap into the growing sorted suffix.
	for i in (1..v.len()).rev() {
		v.swap(0, i);
		sift_down(v.slice_mut(s![..i]), 0, is_less);
	}
}

/// Turns `v` into a binary max-heap in linear time.
pub fn build_max_heap<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Leaves are heaps already, start at the last parent.
	for node in (0..v.len() / 2).rev() {
		sift_down(v.view_mut(), node, is_less);
	}
}

/// Restores the invariant `parent >= child` at `node` of the heap `v`.
///
/// Both subtrees of `node` must already be heaps. The heap size is the length of `v`.
pub fn sift_down<T, F>(mut v: ArrayViewMut1<'_, T>, mut node: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		let left = 2 * node + 1;
		let right = left + 1;

		let mut largest = node;
		if left < v.len() && is_less(&v[largest], &v[left]) {
			largest = left;
		}
		if right < v.len() && is_less(&v[largest], &v[right]) {
			largest = right;
		}

		// Stop if the invariant holds at `node`.
		if largest == node {
			break;
		}

		v.swap(node, largest);
		node = largest;
	}
}
