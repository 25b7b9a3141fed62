//! Big-endian integer helpers.
//!
//! PNG stores every multi-byte integer as an unsigned big-endian value, so
//! that's all we bother with here.

/// Encodes a `u32` as the four big-endian bytes PNG uses.
#[inline]
#[must_use]
pub const fn write_u32_be(value: u32) -> [u8; 4] {
  value.to_be_bytes()
}

/// Decodes four big-endian bytes into a `u32`.
#[inline]
#[must_use]
pub const fn read_u32_be(bytes: [u8; 4]) -> u32 {
  u32::from_be_bytes(bytes)
}

/// Pulls a big-endian `u32` off the front of a slice.
///
/// Gives `None` if there's less than four bytes.
#[inline]
#[must_use]
pub fn try_pull_u32_be(bytes: &[u8]) -> Option<(u32, &[u8])> {
  match bytes {
    [a, b, c, d, rest @ ..] => Some((read_u32_be([*a, *b, *c, *d]), rest)),
    _ => None,
  }
}

/// A `u32` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u32` it has an
/// alignment of 1.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    read_u32_be(self.0)
  }
  /// Make a value from a native `u32`
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(write_u32_be(u))
  }
  /// The stored bytes, most significant first.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}
impl From<u32> for U32BE {
  #[inline]
  #[must_use]
  fn from(value: u32) -> Self {
    Self::from_u32(value)
  }
}
impl From<U32BE> for u32 {
  #[inline]
  #[must_use]
  fn from(value: U32BE) -> Self {
    value.to_u32()
  }
}
