use super::*;

/// Appends a framed chunk to `out`.
///
/// Writes the big-endian data length, the type, the data as given, then the
/// big-endian CRC of the type and data.
///
/// The data must be shorter than 2^31 bytes, which is the PNG limit for a
/// single chunk.
#[inline]
pub fn write_chunk(out: &mut Vec<u8>, ty: PngChunkTy, data: &[u8]) {
  debug_assert!(data.len() < (1 << 31));
  out.reserve(CHUNK_OVERHEAD + data.len());
  out.extend_from_slice(&write_u32_be(data.len() as u32));
  out.extend_from_slice(&ty.0);
  out.extend_from_slice(data);
  out.extend_from_slice(&write_u32_be(chunk_crc(ty, data)));
}

/// Makes a new framed chunk.
#[inline]
#[must_use]
pub fn encode_chunk(ty: PngChunkTy, data: &[u8]) -> Vec<u8> {
  let mut out = Vec::with_capacity(CHUNK_OVERHEAD + data.len());
  write_chunk(&mut out, ty, data);
  out
}
