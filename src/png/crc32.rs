//! The CRC-32 that PNG (and zlib) use.
//!
//! Reflected polynomial `0xEDB88320`, register starts as all ones and the
//! final value is complemented.

use super::PngChunkTy;

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c >>= 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// Runs more bytes through a CRC register.
///
/// The register must start at `u32::MAX`, and the final CRC is the register
/// XOR `u32::MAX`. Most of the time you want [`crc32`] or [`chunk_crc`]
/// instead.
#[inline]
#[must_use]
pub fn update_crc(mut crc: u32, iter: impl IntoIterator<Item = u8>) -> u32 {
  for byte in iter {
    let i = (crc ^ u32::from(byte)) as u8 as usize;
    crc = CRC_TABLE[i] ^ (crc >> 8);
  }
  crc
}

/// CRC of all the bytes from an iterator.
#[inline]
#[must_use]
pub fn png_crc(iter: impl IntoIterator<Item = u8>) -> u32 {
  update_crc(u32::MAX, iter) ^ u32::MAX
}

/// CRC of a byte slice.
#[inline]
#[must_use]
pub fn crc32(bytes: &[u8]) -> u32 {
  png_crc(bytes.iter().copied())
}

/// The CRC a chunk should declare: the chunk type, then the chunk data.
///
/// The two parts don't need to be next to each other in memory.
#[inline]
#[must_use]
pub fn chunk_crc(ty: PngChunkTy, data: &[u8]) -> u32 {
  let crc = update_crc(u32::MAX, ty.0);
  update_crc(crc, data.iter().copied()) ^ u32::MAX
}
