use std::borrow::Cow;

use pngpal::{
  png::{write_chunk, PngChunkTy, PngRawChunkIter, PNG_SIGNATURE},
  ConfigError, PngConf,
};

fn temp_config(name: &str, text: &str) -> std::path::PathBuf {
  let path = std::env::temp_dir().join(format!("pngpal-{}-{name}.conf", std::process::id()));
  std::fs::write(&path, text).unwrap();
  path
}

fn tiny_png(color_type: u8) -> Vec<u8> {
  let mut png = PNG_SIGNATURE.to_vec();
  write_chunk(&mut png, PngChunkTy::IHDR, &[0, 0, 0, 1, 0, 0, 0, 1, 8, color_type, 0, 0, 0]);
  write_chunk(&mut png, PngChunkTy::IDAT, &[1, 2, 3]);
  write_chunk(&mut png, PngChunkTy::IEND, &[]);
  png
}

#[test]
fn test_load_and_patch() {
  let path = temp_config(
    "load",
    "# elevation\nRegExp ^/elev/\nPalette On\nEntry 0 0 0 0 0\nEntry 1 0 64 0, 128 200 200 100\n",
  );
  let conf = PngConf::load(&path).unwrap();
  std::fs::remove_file(&path).ok();

  assert!(conf.applies_to("/elev/3/2/1", false));
  assert!(!conf.applies_to("/other/3/2/1", false));
  let chunks = conf.chunks().unwrap();
  assert_eq!(chunks.palette_len(), 129);
  // slot 128 has alpha 100, the gap before it is opaque
  assert_eq!(chunks.trns_len(), 129);

  let png = tiny_png(3);
  let patched = conf.patch(&png).unwrap();
  assert!(matches!(patched, Cow::Owned(_)));
  let tys: Vec<PngChunkTy> = PngRawChunkIter::new(&patched).map(|c| c.ty()).collect();
  assert_eq!(
    tys,
    [PngChunkTy::IHDR, PngChunkTy::PLTE, PngChunkTy::tRNS, PngChunkTy::IDAT, PngChunkTy::IEND]
  );
}

#[test]
fn test_truecolor_passes_through() {
  let conf = PngConf::parse("Palette On\nEntry 0 1 2 3\n").unwrap();
  let png = tiny_png(2);
  assert_eq!(conf.patch(&png).unwrap(), Cow::Borrowed(&png[..]));
}

#[test]
fn test_missing_file() {
  let path = std::env::temp_dir().join("pngpal-this-file-does-not-exist.conf");
  assert!(matches!(PngConf::load(&path), Err(ConfigError::Io { .. })));
}

#[test]
fn test_bad_file_installs_nothing() {
  let path = temp_config("bad", "Palette On\nEntry 2 1 1 1\nEntry 1 1 1 1\n");
  let result = PngConf::load(&path);
  std::fs::remove_file(&path).ok();
  let e = result.unwrap_err();
  assert_eq!(e.to_string(), "palette: entry 2: index 1 must be greater than the previous index 2");
}
