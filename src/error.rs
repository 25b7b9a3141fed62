//! Error types for palette building and PNG splicing.

use alloc::string::String;

use thiserror::Error;

/// A problem with the palette entries given to the
/// [`DensePalette`](crate::DensePalette) builder.
///
/// Entry numbers are 1-based positions in the entry list, so they can be
/// quoted back to whoever wrote the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
  /// A token isn't an integer in `0..=255`.
  #[error("entry {entry}: `{token}` is not a byte value (0 to 255)")]
  Parse {
    /// Which entry.
    entry: usize,
    /// The offending token.
    token: String,
  },

  /// An entry index isn't larger than the one before it.
  #[error("entry {entry}: index {index} must be greater than the previous index {previous}")]
  Order {
    /// Which entry.
    entry: usize,
    /// The index that was given.
    index: u8,
    /// The index of the entry before it.
    previous: u8,
  },

  /// More entries than a palette has slots.
  #[error("{count} palette entries given, at most 256 are allowed")]
  Limit {
    /// How many entries were given.
    count: usize,
  },

  /// An entry doesn't have red, green, and blue after its index.
  #[error("entry {entry}: expected `INDEX R G B [A]`, found only {found} color value(s)")]
  MissingData {
    /// Which entry.
    entry: usize,
    /// How many color tokens followed the index.
    found: usize,
  },

  /// There were no entries at all.
  #[error("no palette entries given")]
  NoEntries,
}

/// A problem found while splicing palette chunks into a PNG stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpliceError {
  /// The data doesn't start with the PNG signature.
  #[error("data is not a PNG stream")]
  NotPng,

  /// The first chunk isn't a well formed `IHDR`.
  #[error("PNG stream does not start with a valid IHDR chunk")]
  MissingHeader,

  /// The image isn't indexed color, so a palette means nothing to it.
  #[error("PNG color type {color_type} is not indexed color")]
  NotIndexed {
    /// The `IHDR` color type byte.
    color_type: u8,
  },

  /// The palette has more entries than the image's bit depth can address.
  #[error("{entries} palette entries do not fit a {bit_depth}-bit indexed image")]
  PaletteTooLarge {
    /// Palette length.
    entries: usize,
    /// The `IHDR` bit depth.
    bit_depth: u8,
  },

  /// `IEND` came before any `IDAT`.
  #[error("PNG stream has no IDAT chunk")]
  MissingImageData,

  /// The stream ended before `IEND`.
  #[error("PNG stream is truncated")]
  Truncated,
}
