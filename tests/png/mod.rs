use pngpal::{
  png::{
    crc32, encode_chunk, is_png_signature_correct, splice_palette, tRNS, write_chunk,
    PaletteChunks, PngChunkTy, PngRawChunkIter, PLTE, PNG_SIGNATURE,
  },
  read_u32_be, DensePalette, PaletteError,
};

/// A 2x1 8-bit indexed PNG with an old two entry palette and a tRNS.
fn indexed_png() -> Vec<u8> {
  let mut png = PNG_SIGNATURE.to_vec();
  write_chunk(&mut png, PngChunkTy::IHDR, &[0, 0, 0, 2, 0, 0, 0, 1, 8, 3, 0, 0, 0]);
  write_chunk(&mut png, PngChunkTy(*b"sRGB"), &[0]);
  write_chunk(&mut png, PngChunkTy::PLTE, &[255, 0, 0, 0, 0, 255]);
  write_chunk(&mut png, PngChunkTy::tRNS, &[7]);
  write_chunk(&mut png, PngChunkTy(*b"tEXt"), b"Comment\0old");
  write_chunk(&mut png, PngChunkTy::IDAT, &[0x78, 0x9C, 0x63, 0x60, 0x60, 0x04, 0x00]);
  write_chunk(&mut png, PngChunkTy::IEND, &[]);
  png
}

#[test]
fn test_RawPngChunkIter_no_panics() {
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for chunk in PngRawChunkIter::new(&v) {
      let _ = chunk.crc_is_valid();
    }
    for _ in PngRawChunkIter::from_chunks(&v) {
      //
    }
  }
}

#[test]
fn test_chunk_round_trip_recovers_type_and_data() {
  for (ty, data) in [
    (PngChunkTy::PLTE, &[10_u8, 20, 30][..]),
    (PngChunkTy::tRNS, &[0][..]),
    (PngChunkTy::IEND, &[][..]),
  ] {
    let bytes = encode_chunk(ty, data);
    assert_eq!(read_u32_be(bytes[..4].try_into().unwrap()) as usize, data.len());
    let chunk = PngRawChunkIter::from_chunks(&bytes).next().unwrap();
    assert_eq!(chunk.ty(), ty);
    assert_eq!(chunk.data(), data);
    assert_eq!(chunk.declared_crc(), chunk.compute_actual_crc());
    assert_eq!(chunk.declared_crc(), crc32(&bytes[4..bytes.len() - 4]));
  }
}

#[test]
fn test_transparent_first_slot_trims_to_one() {
  let palette = DensePalette::from_entry_list("0 10 20 30 0, 8 10 20 30 255").unwrap();
  assert_eq!(palette.len(), 9);
  let chunks = PaletteChunks::new(&palette);
  assert_eq!(chunks.trns_len(), 1);
  let trns = PngRawChunkIter::from_chunks(chunks.trns().unwrap()).next().unwrap();
  assert!(trns.crc_is_valid());
  let trns = tRNS::try_from(trns).unwrap();
  assert_eq!(trns.alphas(), &[0]);
  assert_eq!(trns.alpha(4), 255);
  assert_eq!(trns.alpha(8), 255);
}

#[test]
fn test_rejected_palettes_make_no_chunks() {
  assert!(matches!(
    DensePalette::from_entry_list("4 1 2 3, 2 1 2 3"),
    Err(PaletteError::Order { .. })
  ));
  let many: Vec<String> = (0..257).map(|i| format!("{} 0 0 0", i % 256)).collect();
  assert!(matches!(
    DensePalette::from_entries(many.iter().map(String::as_str)),
    Err(PaletteError::Limit { count: 257 })
  ));
}

#[test]
fn test_splice_into_indexed_png() {
  let png = indexed_png();
  let palette = DensePalette::from_entry_list("0 0 0 0 0, 255 255 255 255").unwrap();
  let chunks = PaletteChunks::new(&palette);
  let out = splice_palette(&png, &chunks).unwrap();
  assert!(is_png_signature_correct(&out));

  let found: Vec<_> = PngRawChunkIter::new(&out).collect();
  assert!(found.iter().all(|c| c.crc_is_valid()));
  let tys: Vec<PngChunkTy> = found.iter().map(|c| c.ty()).collect();
  assert_eq!(
    tys,
    [
      PngChunkTy::IHDR,
      PngChunkTy(*b"sRGB"),
      PngChunkTy::PLTE,
      PngChunkTy::tRNS,
      PngChunkTy(*b"tEXt"),
      PngChunkTy::IDAT,
      PngChunkTy::IEND,
    ]
  );

  let plte = PLTE::try_from(found[2]).unwrap();
  assert_eq!(plte.entries().len(), 256);
  assert_eq!(plte.entries()[0], [0, 0, 0]);
  assert_eq!(plte.entries()[255], [255, 255, 255]);
  let trns = tRNS::try_from(found[3]).unwrap();
  // gap slots are opaque, so only slot 0 is listed
  assert_eq!(trns.alphas(), &[0]);
  assert_eq!(found[5].data(), &[0x78, 0x9C, 0x63, 0x60, 0x60, 0x04, 0x00]);

  // splicing again replaces rather than adds
  let again = splice_palette(&out, &chunks).unwrap();
  assert_eq!(again, out);
}
