#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for building PNG palette data from a short text description.
//!
//! You write sparse palette entries such as `0 0 0 0, 255 255 255 255`, and
//! the crate fills in the gaps by linear interpolation, then encodes the
//! result as ready-to-send `PLTE` and `tRNS` chunks. Those chunks can be
//! spliced into an existing indexed-color PNG without touching its image
//! data.
//!
//! * [`palette`] turns entry text into a [`DensePalette`].
//! * [`png`] has the CRC, chunk encoding, chunk reading, and splicing.
//! * `config` (with the `std` feature) loads the key/value configuration
//!   files that tile servers use to describe a palette per served path.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

pub mod int_endian;
pub use int_endian::*;

pub mod palette;
pub use palette::{DensePalette, PaletteEntry};

pub mod png;

#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub mod config;
#[cfg(feature = "std")]
pub use config::{ConfigError, PngConf};
