use super::*;

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PngRawChunk<'b> {
  pub(crate) ty: PngChunkTy,
  pub(crate) data: &'b [u8],
  pub(crate) declared_crc: u32,
}
impl Debug for PngRawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("ty", &self.ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl<'b> PngRawChunk<'b> {
  /// The chunk type tag.
  #[inline]
  #[must_use]
  pub const fn ty(&self) -> PngChunkTy {
    self.ty
  }
  /// The chunk's data, not including the framing.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC value stored in the chunk.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// Computes what the CRC should be for the type and data.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    chunk_crc(self.ty, self.data)
  }
  /// If the declared CRC is the correct one.
  #[inline]
  #[must_use]
  pub fn crc_is_valid(&self) -> bool {
    self.declared_crc == self.compute_actual_crc()
  }
  /// Size of the chunk within the stream: length, type, data, and CRC.
  #[inline]
  #[must_use]
  pub const fn framed_len(&self) -> usize {
    CHUNK_OVERHEAD + self.data.len()
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// If the data runs out partway through a chunk the iterator just ends, it
/// never panics, no matter what bytes it's given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngRawChunkIter<'b>(pub(crate) &'b [u8]);
impl<'b> PngRawChunkIter<'b> {
  /// Pass the full PNG bytes, it will remove the PNG signature automatically.
  ///
  /// The signature isn't checked, use [`is_png_signature_correct`] for that.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    match bytes {
      [_, _, _, _, _, _, _, _, rest @ ..] => Self(rest),
      _ => Self(&[]),
    }
  }
  /// Pass bytes that start right at a chunk's length field.
  #[inline]
  #[must_use]
  pub const fn from_chunks(bytes: &'b [u8]) -> Self {
    Self(bytes)
  }
  /// The bytes that haven't been turned into chunks yet.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> &'b [u8] {
    self.0
  }
}
impl<'b> Iterator for PngRawChunkIter<'b> {
  type Item = PngRawChunk<'b>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let (chunk_len, rest) = try_pull_u32_be(self.0)?;
    let (ty, rest) = match rest {
      [a, b, c, d, rest @ ..] => (PngChunkTy([*a, *b, *c, *d]), rest),
      _ => return None,
    };
    let chunk_len = usize::try_from(chunk_len).ok()?;
    if rest.len() < chunk_len {
      return None;
    }
    let (data, rest) = rest.split_at(chunk_len);
    let (declared_crc, rest) = try_pull_u32_be(rest)?;
    self.0 = rest;
    Some(PngRawChunk { ty, data, declared_crc })
  }
}
