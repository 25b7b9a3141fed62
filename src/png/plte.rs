use super::*;

/// A view of the RGB triples in a `PLTE` chunk.
///
/// Alpha for these slots, when there is any, is in the `tRNS` chunk.
#[derive(Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub struct PLTE<'b>(&'b [[u8; 3]]);
impl<'b> TryFrom<PngRawChunk<'b>> for PLTE<'b> {
  type Error = PngRawChunk<'b>;
  /// Fails if the chunk isn't `PLTE` or its data isn't a whole number of
  /// RGB triples.
  #[inline]
  fn try_from(raw: PngRawChunk<'b>) -> Result<Self, Self::Error> {
    if raw.ty != PngChunkTy::PLTE {
      return Err(raw);
    }
    bytemuck::try_cast_slice::<u8, [u8; 3]>(raw.data).map(Self).map_err(|_| raw)
  }
}
impl Debug for PLTE<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PLTE")
      .field("len", &self.0.len())
      .field("first", &self.0.first())
      .field("last", &self.0.last())
      .finish()
  }
}
impl<'b> PLTE<'b> {
  /// One `[r, g, b]` per palette index.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &'b [[u8; 3]] {
    self.0
  }
}

/// The `PLTE` chunk data for some palette entries: red, green, and blue for
/// each entry, with alpha dropped.
#[inline]
#[must_use]
pub fn plte_payload(entries: &[PaletteEntry]) -> Vec<u8> {
  let rgb: Vec<[u8; 3]> = entries.iter().map(|e| [e.r, e.g, e.b]).collect();
  bytemuck::cast_slice::<[u8; 3], u8>(&rgb).to_vec()
}
