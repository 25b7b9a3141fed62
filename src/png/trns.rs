use super::*;

/// How many alpha values a `tRNS` chunk needs to describe these entries.
///
/// Indexes past the end of a `tRNS` chunk are fully opaque, so any run of
/// fully opaque entries at the end of the palette can be trimmed off. A
/// return of 0 means there's no transparency at all and the chunk can be left
/// out.
#[inline]
#[must_use]
pub fn trns_len(entries: &[PaletteEntry]) -> usize {
  entries.iter().rposition(|e| e.a != u8::MAX).map_or(0, |i| i + 1)
}

/// The `tRNS` chunk data for some palette entries: one alpha byte per entry,
/// trimmed to [`trns_len`].
#[inline]
#[must_use]
pub fn trns_payload(entries: &[PaletteEntry]) -> Vec<u8> {
  entries[..trns_len(entries)].iter().map(|e| e.a).collect()
}

/// Transparency for an indexed-color image.
///
/// Spec: [tRNS](https://www.w3.org/TR/png/#11tRNS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct tRNS<'b>(&'b [u8]);
impl<'b> TryFrom<PngRawChunk<'b>> for tRNS<'b> {
  type Error = PngRawChunk<'b>;
  #[inline]
  fn try_from(raw: PngRawChunk<'b>) -> Result<Self, Self::Error> {
    if raw.ty == PngChunkTy::tRNS {
      Ok(Self(raw.data))
    } else {
      Err(raw)
    }
  }
}
impl<'b> tRNS<'b> {
  /// The alpha values as stored, possibly fewer than the palette has.
  #[inline]
  #[must_use]
  pub const fn alphas(&self) -> &'b [u8] {
    self.0
  }
  /// The alpha for a palette index, defaulting to fully opaque.
  #[inline]
  #[must_use]
  pub fn alpha(&self, index: u8) -> u8 {
    self.0.get(usize::from(index)).copied().unwrap_or(u8::MAX)
  }
}
