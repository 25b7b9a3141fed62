//! PNG chunk encoding, reading, and splicing.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! A PNG is an 8 byte signature followed by a series of "chunks". Every chunk
//! has the same framing:
//!
//! ```text
//! u32be length | 4 byte type | length bytes of data | u32be CRC
//! ```
//!
//! The CRC covers the type and the data, but not the length.
//!
//! This module only deals with the two chunks that give an indexed-color
//! image its colors:
//! * **Palette** (`PLTE`): an RGB triple for each index.
//! * **Transparency** (`tRNS`): an alpha byte for each index. It can be
//!   shorter than the palette, any index past its end is fully opaque. If all
//!   indexes are opaque the chunk is left out entirely.
//!
//! [`PaletteChunks`] builds both from a [`DensePalette`], and
//! [`splice_palette`] puts them into an existing PNG stream in place of
//! whatever palette it had. Nothing here decompresses or even looks at the
//! image data.

use core::fmt::Debug;

use alloc::vec::Vec;

use crate::{int_endian::*, palette::PaletteEntry, DensePalette, SpliceError};

mod chunk_ty;
pub use chunk_ty::*;

mod crc32;
pub use crc32::*;

mod encode;
pub use encode::*;

mod raw_chunk;
pub use raw_chunk::*;

mod plte;
pub use plte::*;

mod trns;
pub use trns::*;

mod palette_chunks;
pub use palette_chunks::*;

mod splice;
pub use splice::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Bytes of framing around every chunk's data: length, type, and CRC.
pub const CHUNK_OVERHEAD: usize = 12;

/// Checks if the PNG's initial 8 bytes are correct.
#[inline]
#[must_use]
pub fn is_png_signature_correct(bytes: &[u8]) -> bool {
  bytes.starts_with(&PNG_SIGNATURE)
}

#[test]
fn test_png_signature() {
  assert_eq!(PNG_SIGNATURE, [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
  assert!(is_png_signature_correct(&PNG_SIGNATURE));
  assert!(!is_png_signature_correct(&PNG_SIGNATURE[..7]));
  assert!(!is_png_signature_correct(b"GIF89a\0\0\0"));
}
