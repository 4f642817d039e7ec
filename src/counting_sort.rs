#![cfg(feature = "alloc")]

use crate::{error::InvalidRange, key::Key};
use ndarray::{Array1, ArrayView1};

#[cfg(not(feature = "std"))]
extern crate alloc as no_std_alloc;
#[cfg(not(feature = "std"))]
use no_std_alloc::{vec, vec::Vec};

/// Sorts `v` into a new array by counting keys in `start..stop`, which is *O*(*n* + *k*) for a
/// range of width *k*.
///
/// The sort is stable. The key function is called exactly once per element. Fails without output
/// if the range is reversed, too wide, or if any key lies outside of it.
pub fn counting_sort<A, K, F>(
	v: ArrayView1<'_, A>,
	start: K,
	stop: K,
	mut key: F,
) -> Result<Array1<A>, InvalidRange>
where
	A: Clone,
	K: Key,
	F: FnMut(&A) -> K,
{
	if start > stop {
		debug!("counting range start exceeds stop");
		return Err(InvalidRange::Reversed);
	}
	let Some(width) = stop.offset(start) else {
		debug!("counting range width exceeds usize");
		return Err(InvalidRange::TooWide);
	};
	let mut count = Vec::new();
	if count.try_reserve_exact(width).is_err() {
		debug!(width, "counting range width exceeds allocation");
		return Err(InvalidRange::TooWide);
	}
	count.resize(width, 0usize);

	// Bucket of every element, so the key function is not called a second time when placing.
	let mut offsets = Vec::with_capacity(v.len());
	for (index, a) in v.iter().enumerate() {
		let offset = match key(a).offset(start) {
			Some(offset) if offset < width => offset,
			_ => {
				debug!(index, "key outside of counting range");
				return Err(InvalidRange::Element { index });
			}
		};
		count[offset] += 1;
		offsets.push(offset);
	}

	// `count[k]` becomes the number of keys `<= start + k`, i.e., one past the end of bucket `k`.
	let mut total = 0;
	for count in &mut count {
		total += *count;
		*count = total;
	}

	// Walking backwards and filling each bucket from its end keeps equal keys in input order.
	let mut order = vec![0; v.len()];
	for (index, &offset) in offsets.iter().enumerate().rev() {
		count[offset] -= 1;
		order[count[offset]] = index;
	}

	Ok(order.into_iter().map(|index| v[index].clone()).collect())
}
