//! Loads the per-path configuration of a palette-patching tile server.
//!
//! The format is one `Key value` pair per line. Keys don't care about case,
//! blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # Colors for the elevation tiles
//! RegExp ^/elevation/tile/
//! Indirect On
//! Palette On
//! Entry 0 0 0 0 0
//! Entry 1 0 64 0, 128 200 200 100, 255 255 255 255
//! ```
//!
//! * `Palette [On|Off]`: palette synthesis, on when the value is left out.
//! * `Entry`: one or more comma separated `INDEX R G B [A]` entries. Can
//!   repeat, the entries of every line are used in file order.
//! * `RegExp`: a pattern the request URI must match. Can repeat, any match is
//!   enough. With no patterns every URI matches.
//! * `Indirect On|Off`: only handle sub-requests.
//! * `Only On|Off`: reject bodies that aren't PNG instead of passing them on.

use std::{
  borrow::Cow,
  path::{Path, PathBuf},
  string::String,
  vec::Vec,
};

use regex::Regex;
use thiserror::Error;

use crate::{
  png::{splice_palette, PaletteChunks},
  DensePalette, PaletteError, SpliceError,
};

/// A problem loading a configuration. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The file couldn't be read.
  #[error("can't read {}: {source}", .path.display())]
  Io {
    /// The file that was being read.
    path: PathBuf,
    /// What went wrong.
    source: std::io::Error,
  },

  /// A `RegExp` value didn't compile.
  #[error("line {line}: bad regular expression: {source}")]
  Regex {
    /// Line of the `RegExp` key.
    line: usize,
    /// What went wrong.
    source: regex::Error,
  },

  /// A flag was something other than `On` or `Off`.
  #[error("line {line}: `{key}` must be On or Off, not `{value}`")]
  Flag {
    /// Line of the flag.
    line: usize,
    /// The key as written.
    key: String,
    /// The value as written.
    value: String,
  },

  /// A key that needs a value didn't have one.
  #[error("line {line}: `{key}` needs a value")]
  MissingValue {
    /// Line of the key.
    line: usize,
    /// The key as written.
    key: String,
  },

  /// The palette entries are no good.
  #[error("palette: {0}")]
  Palette(#[from] PaletteError),
}

fn parse_flag(line: usize, key: &str, value: &str) -> Result<bool, ConfigError> {
  if value.eq_ignore_ascii_case("on") {
    Ok(true)
  } else if value.eq_ignore_ascii_case("off") {
    Ok(false)
  } else {
    Err(ConfigError::Flag { line, key: key.into(), value: value.into() })
  }
}

fn required<'t>(line: usize, key: &str, value: &'t str) -> Result<&'t str, ConfigError> {
  if value.is_empty() {
    Err(ConfigError::MissingValue { line, key: key.into() })
  } else {
    Ok(value)
  }
}

/// Everything needed to decide if a response gets a new palette, and the
/// palette chunks themselves.
///
/// Built once when the configuration loads and only read after that, so
/// wrap it in an `Arc` (or just borrow it) to share it between requests.
#[derive(Debug, Clone, Default)]
pub struct PngConf {
  regexps: Vec<Regex>,
  indirect: bool,
  only: bool,
  chunks: Option<PaletteChunks>,
}
impl PngConf {
  /// Parses configuration text.
  ///
  /// Any error fails the whole configuration, there's never a partial
  /// palette.
  pub fn parse(text: &str) -> Result<Self, ConfigError> {
    let mut conf = Self::default();
    let mut palette = false;
    let mut entries: Vec<&str> = Vec::new();

    for (n, line) in text.lines().enumerate() {
      let line_number = n + 1;
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }
      let (key, value) = match line.split_once(char::is_whitespace) {
        Some((key, value)) => (key, value.trim()),
        None => (line, ""),
      };

      if key.eq_ignore_ascii_case("Palette") {
        // a bare `Palette` turns it on
        palette = value.is_empty() || parse_flag(line_number, key, value)?;
      } else if key.eq_ignore_ascii_case("Entry") {
        entries.extend(required(line_number, key, value)?.split(','));
      } else if key.eq_ignore_ascii_case("RegExp") {
        let re = Regex::new(required(line_number, key, value)?)
          .map_err(|source| ConfigError::Regex { line: line_number, source })?;
        conf.regexps.push(re);
      } else if key.eq_ignore_ascii_case("Indirect") {
        conf.indirect = parse_flag(line_number, key, required(line_number, key, value)?)?;
      } else if key.eq_ignore_ascii_case("Only") {
        conf.only = parse_flag(line_number, key, required(line_number, key, value)?)?;
      } else {
        log::warn!("line {line_number}: ignoring unknown key `{key}`");
      }
    }

    if palette {
      let dense = DensePalette::from_entries(entries)?;
      conf.chunks = Some(PaletteChunks::new(&dense));
    } else if !entries.is_empty() {
      log::warn!("`Entry` lines without a `Palette` line are ignored");
    }
    Ok(conf)
  }

  /// Reads and parses a configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
      .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let conf = Self::parse(&text)?;
    log::debug!(
      "loaded {}: {} pattern(s), palette {}",
      path.display(),
      conf.regexps.len(),
      if conf.chunks.is_some() { "on" } else { "off" }
    );
    Ok(conf)
  }

  /// The palette chunks, if `Palette` was set.
  #[inline]
  #[must_use]
  pub fn chunks(&self) -> Option<&PaletteChunks> {
    self.chunks.as_ref()
  }

  /// The URI patterns.
  #[inline]
  #[must_use]
  pub fn regexps(&self) -> &[Regex] {
    &self.regexps
  }

  /// If only sub-requests are handled.
  #[inline]
  #[must_use]
  pub const fn indirect(&self) -> bool {
    self.indirect
  }

  /// If non-PNG bodies are rejected.
  #[inline]
  #[must_use]
  pub const fn only(&self) -> bool {
    self.only
  }

  /// If a request for this URI should be handled at all.
  #[must_use]
  pub fn applies_to(&self, uri: &str, is_subrequest: bool) -> bool {
    if self.indirect && !is_subrequest {
      return false;
    }
    self.regexps.is_empty() || self.regexps.iter().any(|re| re.is_match(uri))
  }

  /// Puts the configured palette into a response body.
  ///
  /// The body comes back untouched when there's no palette configured, when
  /// it's a PNG that isn't indexed color, or when it isn't a PNG at all and
  /// `Only` is off.
  pub fn patch<'b>(&self, body: &'b [u8]) -> Result<Cow<'b, [u8]>, SpliceError> {
    let Some(chunks) = &self.chunks else {
      return Ok(Cow::Borrowed(body));
    };
    match splice_palette(body, chunks) {
      Ok(patched) => Ok(Cow::Owned(patched)),
      Err(SpliceError::NotPng) if self.only => {
        log::warn!("blocking a {} byte body that is not PNG", body.len());
        Err(SpliceError::NotPng)
      }
      Err(SpliceError::NotPng) => {
        log::debug!("passing through a {} byte body that is not PNG", body.len());
        Ok(Cow::Borrowed(body))
      }
      Err(SpliceError::NotIndexed { color_type }) => {
        log::debug!("passing through a PNG with color type {color_type}");
        Ok(Cow::Borrowed(body))
      }
      Err(e) => Err(e),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::string::ToString;

  const SAMPLE: &str = "\
# sample
RegExp ^/tiles/a/
regexp ^/tiles/b/
Indirect On
Only off
Palette On
Entry 0 0 0 0 0
Entry 1 10 10 10, 3 30 30 30
Mystery 42
";

  #[test]
  fn test_parse_sample() {
    let conf = PngConf::parse(SAMPLE).unwrap();
    assert_eq!(conf.regexps().len(), 2);
    assert!(conf.indirect());
    assert!(!conf.only());
    let chunks = conf.chunks().unwrap();
    assert_eq!(chunks.palette_len(), 4);
    assert_eq!(chunks.trns_len(), 1);
  }

  #[test]
  fn test_applies_to() {
    let conf = PngConf::parse(SAMPLE).unwrap();
    assert!(conf.applies_to("/tiles/a/0/0/0.png", true));
    assert!(conf.applies_to("/tiles/b/1", true));
    assert!(!conf.applies_to("/tiles/a/0/0/0.png", false));
    assert!(!conf.applies_to("/other", true));

    let open = PngConf::parse("Palette On\nEntry 0 1 2 3").unwrap();
    assert!(open.applies_to("/anything", false));
  }

  #[test]
  fn test_no_palette() {
    let conf = PngConf::parse("RegExp .\nEntry 0 1 2 3\n").unwrap();
    assert!(conf.chunks().is_none());
    assert_eq!(conf.patch(b"whatever").unwrap(), Cow::Borrowed(&b"whatever"[..]));
  }

  #[test]
  fn test_palette_flag() {
    let conf = PngConf::parse("Palette Off\nEntry 0 1 2 3").unwrap();
    assert!(conf.chunks().is_none());
    let conf = PngConf::parse("Palette\nEntry 0 1 2 3").unwrap();
    assert_eq!(conf.chunks().unwrap().palette_len(), 1);
    let conf = PngConf::parse("Palette On\nPalette off\nEntry 0 1 2 3").unwrap();
    assert!(conf.chunks().is_none());
    assert!(matches!(
      PngConf::parse("Palette yes\nEntry 0 1 2 3"),
      Err(ConfigError::Flag { line: 1, ref key, .. }) if key == "Palette"
    ));
  }

  #[test]
  fn test_config_errors() {
    assert!(matches!(
      PngConf::parse("RegExp ("),
      Err(ConfigError::Regex { line: 1, .. })
    ));
    assert!(matches!(
      PngConf::parse("\nIndirect maybe"),
      Err(ConfigError::Flag { line: 2, ref value, .. }) if value == "maybe"
    ));
    assert!(matches!(
      PngConf::parse("Only"),
      Err(ConfigError::MissingValue { line: 1, ref key }) if key == "Only"
    ));
    assert!(matches!(
      PngConf::parse("Palette On\nEntry 4 1 2 3, 2 1 2 3"),
      Err(ConfigError::Palette(PaletteError::Order { entry: 2, index: 2, previous: 4 }))
    ));
    assert!(matches!(
      PngConf::parse("Palette On"),
      Err(ConfigError::Palette(PaletteError::NoEntries))
    ));
    let e = PngConf::parse("Palette On\nEntry 1 2").unwrap_err();
    assert_eq!(
      e.to_string(),
      "palette: entry 1: expected `INDEX R G B [A]`, found only 1 color value(s)"
    );
  }

  #[test]
  fn test_patch_pass_through_rules() {
    let conf = PngConf::parse("Palette On\nEntry 0 1 2 3").unwrap();
    assert_eq!(conf.patch(b"GIF89a").unwrap(), Cow::Borrowed(&b"GIF89a"[..]));
    let strict = PngConf::parse("Only On\nPalette On\nEntry 0 1 2 3").unwrap();
    assert_eq!(strict.patch(b"GIF89a"), Err(SpliceError::NotPng));
  }
}
