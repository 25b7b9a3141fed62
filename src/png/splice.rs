use super::*;

/// The `IHDR` color type for indexed color.
pub const COLOR_TYPE_INDEXED: u8 = 3;

const IHDR_DATA_LEN: usize = 13;

/// Chunks that have to come after the palette.
const AFTER_PALETTE: [PngChunkTy; 5] =
  [PngChunkTy::PLTE, PngChunkTy::tRNS, PngChunkTy::bKGD, PngChunkTy::hIST, PngChunkTy::IDAT];

/// Replaces the palette of an indexed-color PNG.
///
/// Any `PLTE` and `tRNS` chunks already in the stream are dropped. The new
/// chunks go right before the first chunk that the PNG ordering rules say
/// must follow the palette, which is always after `IHDR` and before the
/// first `IDAT`. Every other chunk is copied over byte for byte, and anything
/// after `IEND` is dropped.
///
/// ## Failure
/// * [`SpliceError::NotPng`]: bad signature.
/// * [`SpliceError::MissingHeader`]: the first chunk isn't an `IHDR` with
///   valid indexed color bit depth.
/// * [`SpliceError::NotIndexed`]: the image isn't indexed color.
/// * [`SpliceError::PaletteTooLarge`]: the image's bit depth can't address
///   every palette entry.
/// * [`SpliceError::MissingImageData`]: there's no `IDAT` before `IEND`.
/// * [`SpliceError::Truncated`]: the stream ends before `IEND`.
pub fn splice_palette(png: &[u8], chunks: &PaletteChunks) -> Result<Vec<u8>, SpliceError> {
  if !is_png_signature_correct(png) {
    return Err(SpliceError::NotPng);
  }
  let mut it = PngRawChunkIter::new(png);
  let ihdr = it
    .next()
    .filter(|c| c.ty == PngChunkTy::IHDR && c.data.len() == IHDR_DATA_LEN)
    .ok_or(SpliceError::MissingHeader)?;
  check_indexed_header(ihdr.data, chunks.palette_len())?;

  let mut offset = PNG_SIGNATURE.len() + ihdr.framed_len();
  let mut out = Vec::with_capacity(png.len() + chunks.encoded_len());
  out.extend_from_slice(&png[..offset]);

  let mut inserted = false;
  let mut seen_idat = false;
  for chunk in it {
    let framed = &png[offset..offset + chunk.framed_len()];
    offset += chunk.framed_len();
    log::trace!("splice: {:?} ({} bytes)", chunk.ty, chunk.data.len());

    if !inserted && AFTER_PALETTE.contains(&chunk.ty) {
      chunks.write_to(&mut out);
      inserted = true;
    }
    match chunk.ty {
      PngChunkTy::PLTE | PngChunkTy::tRNS => continue,
      PngChunkTy::IDAT => seen_idat = true,
      PngChunkTy::IEND => {
        if !seen_idat {
          return Err(SpliceError::MissingImageData);
        }
        out.extend_from_slice(framed);
        return Ok(out);
      }
      _ => (),
    }
    out.extend_from_slice(framed);
  }
  Err(SpliceError::Truncated)
}

/// Checks the `IHDR` data describes an indexed-color image that can use a
/// palette of the given length.
fn check_indexed_header(ihdr: &[u8], palette_len: usize) -> Result<(), SpliceError> {
  let (bit_depth, color_type) = match ihdr {
    [_, _, _, _, _, _, _, _, bit_depth, color_type, ..] => (*bit_depth, *color_type),
    _ => return Err(SpliceError::MissingHeader),
  };
  if color_type != COLOR_TYPE_INDEXED {
    return Err(SpliceError::NotIndexed { color_type });
  }
  if !matches!(bit_depth, 1 | 2 | 4 | 8) {
    return Err(SpliceError::MissingHeader);
  }
  if palette_len > (1 << bit_depth) {
    return Err(SpliceError::PaletteTooLarge { entries: palette_len, bit_depth });
  }
  Ok(())
}
