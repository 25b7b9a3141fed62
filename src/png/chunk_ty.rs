use core::fmt::{Debug, Display, Write};

/// Checks two chunk tags for exact byte equality.
///
/// Works on plain arrays, so the bytes can come from anywhere in a stream
/// without any alignment concerns.
#[inline]
#[must_use]
pub const fn tag_equals(a: &[u8; 4], b: &[u8; 4]) -> bool {
  a[0] == b[0] && a[1] == b[1] && a[2] == b[2] && a[3] == b[3]
}

/// The four byte type tag of a PNG chunk.
///
/// The letter case of each byte carries meaning (critical vs ancillary, etc),
/// so tags are always compared exactly.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
impl PngChunkTy {
  /// Image header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Palette
  pub const PLTE: Self = Self(*b"PLTE");
  /// Image data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image end
  pub const IEND: Self = Self(*b"IEND");
  /// Transparency
  pub const tRNS: Self = Self(*b"tRNS");
  /// Background color, must come after any palette.
  pub const bKGD: Self = Self(*b"bKGD");
  /// Palette histogram, must come after the palette.
  pub const hIST: Self = Self(*b"hIST");

  /// Same as `==`, but usable in `const` context.
  #[inline]
  #[must_use]
  pub const fn tag_equals(self, other: Self) -> bool {
    tag_equals(&self.0, &other.0)
  }

  /// Critical chunks have an uppercase first letter.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    self.0[0] & 0x20 == 0
  }
}
impl Debug for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('"')?;
    Display::fmt(self, f)?;
    f.write_char('"')
  }
}
impl Display for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
impl From<[u8; 4]> for PngChunkTy {
  #[inline]
  #[must_use]
  fn from(array: [u8; 4]) -> Self {
    Self(array)
  }
}

#[test]
fn test_tag_equals() {
  assert!(tag_equals(b"PLTE", &[0x50, 0x4C, 0x54, 0x45]));
  assert!(tag_equals(b"tRNS", &crate::write_u32_be(0x7452_4E53)));
  assert!(!tag_equals(b"tRNS", b"TRNS"));
  assert!(PngChunkTy::IDAT.tag_equals(PngChunkTy(*b"IDAT")));
  assert!(!PngChunkTy::IEND.tag_equals(PngChunkTy::IHDR));
  assert!(PngChunkTy::PLTE.is_critical());
  assert!(!PngChunkTy::tRNS.is_critical());
  assert_eq!(alloc::format!("{:?}", PngChunkTy::tRNS), "\"tRNS\"");
}
