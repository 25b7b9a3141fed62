//! Builds dense palettes out of sparse, text based entries.
//!
//! Each entry is a line of whitespace separated byte values: `INDEX R G B
//! [A]`. Alpha is fully opaque when left out. Entries must be given in
//! increasing index order, and every index that isn't given gets the color
//! linearly interpolated from the entries on either side of it. Filled in
//! slots are always fully opaque, only given entries carry transparency.
//!
//! ```
//! use pngpal::DensePalette;
//! let palette: DensePalette = "0 0 0 0, 4 255 255 255".parse().unwrap();
//! assert_eq!(palette.len(), 5);
//! assert_eq!(palette.entries()[2].r, 128);
//! ```
//!
//! Index values (and the channels) can be written in decimal, in hex with a
//! `0x` prefix, or in octal with a leading `0`.

use alloc::{string::ToString, vec::Vec};
use core::str::FromStr;

use pixel_formats::r8g8b8a8_Srgb;

pub use crate::error::PaletteError;

/// One palette slot.
pub type PaletteEntry = r8g8b8a8_Srgb;

/// The most entries a PNG palette can have.
pub const MAX_PALETTE_ENTRIES: usize = 256;

/// The value slot 0 has when the first entry doesn't set it. This is
/// transparent, so such a palette always needs a `tRNS` chunk.
const IMPLICIT_ZERO: PaletteEntry = r8g8b8a8_Srgb { r: 0, g: 0, b: 0, a: 0 };

/// Parses a byte value with C style base detection.
///
/// * `0x` or `0X` prefix: hexadecimal
/// * leading `0` (with more digits after it): octal
/// * otherwise decimal
///
/// A leading `+` is allowed, but anything negative or above 255 is `None`.
#[must_use]
pub fn parse_byte(token: &str) -> Option<u8> {
  let digits = token.strip_prefix('+').unwrap_or(token);
  let (radix, digits) =
    if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
      (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
      (8, &digits[1..])
    } else {
      (10, digits)
    };
  // `from_str_radix` would accept a second sign.
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
    return None;
  }
  u8::from_str_radix(digits, radix).ok()
}

#[inline]
fn byte_token(entry: usize, token: &str) -> Result<u8, PaletteError> {
  parse_byte(token).ok_or_else(|| PaletteError::Parse { entry, token: token.to_string() })
}

/// Rounds half up, done in integers so that every platform agrees.
///
/// `step` is how far past `from` we are, out of `span` total steps.
#[inline]
#[must_use]
fn lerp_channel(from: u8, to: u8, step: u32, span: u32) -> u8 {
  debug_assert!(step <= span && span > 0);
  let scaled = u32::from(from) * (span - step) + u32::from(to) * step;
  ((2 * scaled + span) / (2 * span)) as u8
}

/// Only the color is blended, a gap slot is opaque.
#[inline]
#[must_use]
fn lerp_entry(from: PaletteEntry, to: PaletteEntry, step: u32, span: u32) -> PaletteEntry {
  r8g8b8a8_Srgb {
    r: lerp_channel(from.r, to.r, step, span),
    g: lerp_channel(from.g, to.g, step, span),
    b: lerp_channel(from.b, to.b, step, span),
    a: u8::MAX,
  }
}

/// A palette with every slot filled in, from index 0 up to the last index
/// that was specified.
///
/// Once built it never changes, so it can be shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensePalette {
  entries: Vec<PaletteEntry>,
}
impl DensePalette {
  /// Builds a palette from one entry per string.
  ///
  /// Blank strings are skipped. The first entry can use index 0 to override
  /// the default slot 0 value of all zeroes, otherwise indexes must strictly
  /// increase.
  ///
  /// ## Failure
  /// * More than 256 strings: [`PaletteError::Limit`], checked before any
  ///   parsing.
  /// * A token that isn't a byte: [`PaletteError::Parse`]
  /// * An index that doesn't increase: [`PaletteError::Order`]
  /// * Less than three color values: [`PaletteError::MissingData`]
  /// * Nothing but blank strings: [`PaletteError::NoEntries`]
  pub fn from_entries<'s, I>(entries: I) -> Result<Self, PaletteError>
  where
    I: IntoIterator<Item = &'s str>,
  {
    let entries: Vec<&str> = entries.into_iter().filter(|e| !e.trim().is_empty()).collect();
    if entries.len() > MAX_PALETTE_ENTRIES {
      return Err(PaletteError::Limit { count: entries.len() });
    }
    if entries.is_empty() {
      return Err(PaletteError::NoEntries);
    }

    let mut out: Vec<PaletteEntry> = Vec::with_capacity(MAX_PALETTE_ENTRIES);
    out.push(IMPLICIT_ZERO);
    let mut previous_index: u8 = 0;
    for (n, text) in entries.iter().enumerate() {
      let entry = n + 1;
      let mut tokens = text.split_whitespace();
      // entries are non-blank, so there's always an index token.
      let index = byte_token(entry, tokens.next().unwrap_or_default())?;
      if index <= previous_index && !(n == 0 && index == 0) {
        return Err(PaletteError::Order { entry, index, previous: previous_index });
      }

      let mut channels = [0_u8, 0, 0, u8::MAX];
      let mut found = 0;
      for token in tokens {
        if found == channels.len() {
          return Err(PaletteError::Parse { entry, token: token.to_string() });
        }
        channels[found] = byte_token(entry, token)?;
        found += 1;
      }
      if found < 3 {
        return Err(PaletteError::MissingData { entry, found });
      }
      let [r, g, b, a] = channels;
      let new_entry = r8g8b8a8_Srgb { r, g, b, a };

      let from = out[usize::from(previous_index)];
      let span = u32::from(index - previous_index);
      for step in 1..span {
        out.push(lerp_entry(from, new_entry, step, span));
      }
      if index == 0 {
        out[0] = new_entry;
      } else {
        out.push(new_entry);
      }
      debug_assert_eq!(out.len(), usize::from(index) + 1);
      previous_index = index;
    }

    let palette = Self { entries: out };
    log::debug!(
      "built palette: {} entries from {} specified, {} with transparency",
      palette.len(),
      entries.len(),
      palette.trns_len()
    );
    Ok(palette)
  }

  /// Builds a palette from a single comma separated list of entries, such as
  /// `"0 0 0 0, 4 255 255 255"`.
  #[inline]
  pub fn from_entry_list(list: &str) -> Result<Self, PaletteError> {
    Self::from_entries(list.split(','))
  }

  /// All the slots, starting from index 0.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[PaletteEntry] {
    &self.entries
  }

  /// Number of slots, which is one more than the highest specified index.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Always `false`, a built palette has at least slot 0.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    false
  }

  /// Gets the slot at an index, if the palette is that long.
  #[inline]
  #[must_use]
  pub fn get(&self, index: u8) -> Option<PaletteEntry> {
    self.entries.get(usize::from(index)).copied()
  }

  /// How many alpha values a `tRNS` chunk needs for this palette.
  ///
  /// See [`trns_len`](crate::png::trns_len).
  #[inline]
  #[must_use]
  pub fn trns_len(&self) -> usize {
    crate::png::trns_len(&self.entries)
  }
}
impl FromStr for DensePalette {
  type Err = PaletteError;
  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_entry_list(s)
  }
}
