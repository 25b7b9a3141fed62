use super::*;

/// Ready to send `PLTE` and `tRNS` chunks for one palette.
///
/// The chunks are framed and have their CRCs filled in. Build this once when
/// a configuration loads, then share it by reference for every image that
/// needs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteChunks {
  plte: Vec<u8>,
  trns: Option<Vec<u8>>,
  palette_len: usize,
  trns_len: usize,
}
impl PaletteChunks {
  /// Encodes the chunks for a palette.
  ///
  /// The `tRNS` chunk is only made if some entry isn't fully opaque.
  #[must_use]
  pub fn new(palette: &DensePalette) -> Self {
    let entries = palette.entries();
    let plte = encode_chunk(PngChunkTy::PLTE, &plte_payload(entries));
    let alphas = trns_payload(entries);
    let trns_len = alphas.len();
    let trns = if alphas.is_empty() { None } else { Some(encode_chunk(PngChunkTy::tRNS, &alphas)) };
    Self { plte, trns, palette_len: entries.len(), trns_len }
  }

  /// The framed `PLTE` chunk.
  #[inline]
  #[must_use]
  pub fn plte(&self) -> &[u8] {
    &self.plte
  }

  /// The framed `tRNS` chunk, if the palette has any transparency.
  #[inline]
  #[must_use]
  pub fn trns(&self) -> Option<&[u8]> {
    self.trns.as_deref()
  }

  /// Entries in the palette.
  #[inline]
  #[must_use]
  pub const fn palette_len(&self) -> usize {
    self.palette_len
  }

  /// Alpha values in the `tRNS` chunk, 0 when there's no such chunk.
  #[inline]
  #[must_use]
  pub const fn trns_len(&self) -> usize {
    self.trns_len
  }

  /// Total bytes of both chunks.
  #[inline]
  #[must_use]
  pub fn encoded_len(&self) -> usize {
    self.plte.len() + self.trns.as_ref().map_or(0, Vec::len)
  }

  /// Appends `PLTE` and then `tRNS` (if any) to the output.
  #[inline]
  pub fn write_to(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(&self.plte);
    if let Some(trns) = &self.trns {
      out.extend_from_slice(trns);
    }
  }
}
impl From<&DensePalette> for PaletteChunks {
  #[inline]
  #[must_use]
  fn from(palette: &DensePalette) -> Self {
    Self::new(palette)
  }
}
