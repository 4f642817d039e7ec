/// Key of bounded range as required by counting sort.
///
/// A key is mapped to a bucket by its distance to the start of the range.
pub trait Key: Copy + Ord {
	/// Distance of `self` from `start` or `None` if `self < start` or if the distance does not fit
	/// into `usize`.
	fn offset(self, start: Self) -> Option<usize>;
}

macro_rules! impl_key {
	($($t:ty)*) => {$(
		impl Key for $t {
			#[inline]
			fn offset(self, start: Self) -> Option<usize> {
				usize::try_from(self as i128 - start as i128).ok()
			}
		}
	)*};
}

impl_key!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize);

impl Key for char {
	#[inline]
	fn offset(self, start: Self) -> Option<usize> {
		u32::from(self).offset(u32::from(start))
	}
}

impl Key for bool {
	#[inline]
	fn offset(self, start: Self) -> Option<usize> {
		u8::from(self).offset(u8::from(start))
	}
}
