use core::{
	cmp::Ordering::{self, Equal, Less},
	fmt, mem,
};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Pivot selection strategy of [`quick_sort_with`](crate::Sort1Ext::quick_sort_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pivot {
	/// Last element of each (sub)view.
	///
	/// Already sorted and reverse sorted input degrades to *O*(*n*^2) time.
	#[default]
	Last,
	/// Median of the first, middle, and last element of each (sub)view.
	///
	/// Sorts already sorted and reverse sorted input in *O*(*n* \* log(*n*)) time.
	MedianOfThree,
}

impl fmt::Display for Pivot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Last => "last",
			Self::MedianOfThree => "median-of-three",
		})
	}
}

/// Chooses the index of the pivot in the non-empty `v`.
pub fn choose_pivot<T, F>(v: ArrayView1<'_, T>, pivot: Pivot, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let last = v.len() - 1;
	match pivot {
		Pivot::Last => last,
		Pivot::MedianOfThree => {
			let (mut a, mut b, mut c) = (0, last / 2, last);
			// Sort the three indices by their elements, `b` ends up as median.
			if is_less(&v[b], &v[a]) {
				mem::swap(&mut a, &mut b);
			}
			if is_less(&v[c], &v[b]) {
				mem::swap(&mut b, &mut c);
			}
			if is_less(&v[b], &v[a]) {
				mem::swap(&mut a, &mut b);
			}
			b
		}
	}
}

/// Partitions the non-empty `v` into elements smaller than `v[pivot]`, followed by the pivot,
/// followed by elements greater than or equal to the pivot.
///
/// Returns the final index of the pivot. This is the Lomuto scheme, it does not preserve the order
/// of equal elements.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, pivot: usize, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let last = v.len() - 1;
	v.swap(pivot, last);

	// Elements in `..mid` are smaller than the pivot.
	let mut mid = 0;
	for i in 0..last {
		if is_less(&v[i], &v[last]) {
			v.swap(mid, i);
			mid += 1;
		}
	}

	v.swap(mid, last);
	mid
}

/// Checks whether every element of `v` compares less than or equal to its successor.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	(1..v.len()).all(|i| matches!(compare(&v[i - 1], &v[i]), Some(Less | Equal)))
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Pivot, choose_pivot, is_sorted, partition};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn partitioned(xs: Vec<u32>, pivot: usize) {
		if xs.is_empty() {
			return;
		}
		let pivot = pivot % xs.len();
		let value = xs[pivot];
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		let mid = partition(array.view_mut(), pivot, &mut u32::lt);
		assert_eq!(array[mid], value);
		assert!(array.iter().take(mid).all(|&x| x < value));
		assert!(array.iter().skip(mid).all(|&x| x >= value));
		let mut permuted = array.to_vec();
		permuted.sort_unstable();
		assert_eq!(permuted, sorted);
	}

	#[test]
	fn lomuto() {
		let mut array = arr1(&[5, 3, 8, 1, 9, 2]);
		assert_eq!(partition(array.view_mut(), 5, &mut i32::lt), 1);
		assert_eq!(array, arr1(&[1, 2, 8, 5, 9, 3]));
	}

	#[test]
	fn median_of_three() {
		let mut is_less = i32::lt;
		let array = arr1(&[1, 2, 3, 4, 5]);
		assert_eq!(choose_pivot(array.view(), Pivot::MedianOfThree, &mut is_less), 2);
		assert_eq!(choose_pivot(array.view(), Pivot::Last, &mut is_less), 4);
		let array = arr1(&[9, 0, 5]);
		assert_eq!(choose_pivot(array.view(), Pivot::MedianOfThree, &mut is_less), 2);
		let array = arr1(&[7]);
		assert_eq!(choose_pivot(array.view(), Pivot::MedianOfThree, &mut is_less), 0);
	}

	#[test]
	fn sorted() {
		let empty: [i32; 0] = [];
		assert!(is_sorted(arr1(&[1, 2, 2, 9]).view(), i32::partial_cmp));
		assert!(!is_sorted(arr1(&[1, 3, 2, 4]).view(), i32::partial_cmp));
		assert!(is_sorted(arr1(&empty).view(), i32::partial_cmp));
		assert!(!is_sorted(arr1(&[0.0, 1.0, f32::NAN]).view(), f32::partial_cmp));
	}
}
