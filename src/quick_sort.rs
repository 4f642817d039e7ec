use crate::partition::{Pivot, choose_pivot, partition};
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` using quicksort with Lomuto partitioning, which is *O*(*n* \* log(*n*)) on average and
/// *O*(*n*^2) worst-case.
///
/// Stack depth is *O*(log(*n*)) regardless of `pivot`.
pub fn quick_sort<T, F>(v: ArrayViewMut1<'_, T>, pivot: Pivot, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	trace!(len = v.len(), %pivot, "quicksort");
	recurse(v, pivot, &mut is_less);
}

/// Sorts `v` recursively.
fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, pivot: Pivot, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Views of zero or one element are sorted.
	while v.len() > 1 {
		let index = choose_pivot(v.view(), pivot, is_less);
		let mid = partition(v.view_mut(), index, is_less);

		// Split the view into `left`, `pivot`, and `right`.
		let (left, right) = v.split_at(Axis(0), mid);
		let (_, right) = right.split_at(Axis(0), 1);

		// Recurse into the shorter side only in order to bound the stack depth by
		// `floor(log2(len))`. Then just continue with the longer side (this is akin to tail
		// recursion).
		if left.len() < right.len() {
			recurse(left, pivot, is_less);
			v = right;
		} else {
			recurse(right, pivot, is_less);
			v = left;
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::quick_sort;
	use crate::partition::Pivot;
	use ndarray::{Array1, arr1, arr2};
	use quickcheck_macros::quickcheck;
	use rand::{Rng, SeedableRng, rngs::StdRng};

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		for pivot in [Pivot::Last, Pivot::MedianOfThree] {
			let mut array = Array1::from_vec(xs.clone());
			quick_sort(array.view_mut(), pivot, u32::lt);
			assert_eq!(array, sorted);
		}
	}

	#[test]
	fn scenario() {
		let mut array = arr1(&[5, 3, 8, 1, 9, 2]);
		quick_sort(array.view_mut(), Pivot::Last, i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 5, 8, 9]));
	}

	#[test]
	fn already_sorted() {
		let mut array = arr1(&[1, 2, 3, 4, 5]);
		quick_sort(array.view_mut(), Pivot::Last, i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 4, 5]));
	}

	#[test]
	fn worst_case_depth() {
		const LEN: u32 = 10_000;
		for pivot in [Pivot::Last, Pivot::MedianOfThree] {
			let mut ascending = (0..LEN).collect::<Array1<u32>>();
			quick_sort(ascending.view_mut(), pivot, u32::lt);
			assert_eq!(ascending, (0..LEN).collect::<Array1<u32>>());
			let mut descending = (0..LEN).rev().collect::<Array1<u32>>();
			quick_sort(descending.view_mut(), pivot, u32::lt);
			assert_eq!(descending, (0..LEN).collect::<Array1<u32>>());
			let mut equal = Array1::from_elem(LEN as usize, 7u32);
			quick_sort(equal.view_mut(), pivot, u32::lt);
			assert!(equal.iter().all(|&x| x == 7));
		}
	}

	#[test]
	fn random() {
		let mut rng = StdRng::seed_from_u64(0x5eed);
		for len in [2, 3, 10, 100, 1_000, 10_000] {
			let xs = (0..len)
				.map(|_| rng.random_range(-50i64..50))
				.collect::<Vec<i64>>();
			let mut sorted = xs.clone();
			sorted.sort_unstable();
			let mut array = Array1::from_vec(xs);
			quick_sort(array.view_mut(), Pivot::MedianOfThree, i64::lt);
			assert_eq!(array, Array1::from_vec(sorted));
		}
	}

	#[test]
	fn trivial() {
		let mut empty = Array1::<i32>::from_vec(vec![]);
		quick_sort(empty.view_mut(), Pivot::Last, i32::lt);
		assert!(empty.is_empty());
		let mut single = arr1(&[42]);
		quick_sort(single.view_mut(), Pivot::Last, i32::lt);
		assert_eq!(single, arr1(&[42]));
	}

	#[test]
	fn row() {
		let mut array = arr2(&[[3, 1, 2, -4], [0, 0, 0, 0]]);
		quick_sort(array.row_mut(0), Pivot::Last, i32::lt);
		assert_eq!(array, arr2(&[[-4, 1, 2, 3], [0, 0, 0, 0]]));
	}
}
