//! File-level decode and write through real temporary files.

use std::fs;

use enough::Unstoppable;
use tempfile::TempDir;
use zenppm::*;

#[test]
fn write_then_decode_ppm() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.ppm");

    let pixels: Vec<u8> = (0..2 * 3 * 3).map(|i| (i * 13) as u8).collect();
    let img = Image::from_pixels(2, 3, 255, pixels.clone()).unwrap();
    write_ppm(&img, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P6\n2 3\n255\n"));
    assert_eq!(bytes.len(), 11 + pixels.len());

    let decoded = decode_ppm(&path).unwrap();
    assert!(decoded.is_complete());
    let back = decoded.image();
    assert_eq!(back.pixels(), &pixels[..]);
    assert_eq!(back.source_path(), Some(path.as_path()));
}

#[test]
fn write_pgm_exact_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chan.pgm");

    write_pgm(&[1, 2, 3, 4], 2, 2, 200, &path).unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"P5\n2 2\n200\n\x01\x02\x03\x04");
}

#[test]
fn ascii_file_rewritten_as_binary() {
    let dir = TempDir::new().unwrap();
    let ascii = dir.path().join("ascii.ppm");
    let binary = dir.path().join("binary.ppm");

    fs::write(&ascii, b"P3\n# hand written\n2 1\n255\n255 0 0  0 0 255\n").unwrap();
    let img = decode_ppm(&ascii).unwrap().into_image();
    write_ppm(&img, &binary).unwrap();

    assert_eq!(
        fs::read(&binary).unwrap(),
        b"P6\n2 1\n255\n\xff\x00\x00\x00\x00\xff"
    );
    let reread = decode_ppm(&binary).unwrap().into_image();
    assert_eq!(reread.pixels(), img.pixels());
    assert_eq!(reread.format(), FormatTag::P6);
}

#[test]
fn channel_to_pgm_file() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src.ppm");
    let dst = dir.path().join("green.pgm");

    fs::write(&src, b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06").unwrap();
    let img = decode_ppm(&src).unwrap().into_image();
    let green = img.extract_channel(1).unwrap();
    write_pgm(&green, img.width(), img.height(), img.max_val(), &dst).unwrap();

    assert_eq!(fs::read(&dst).unwrap(), b"P5\n2 1\n255\n\x02\x05");
}

#[test]
fn empty_image_file_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.ppm");

    write_ppm(&Image::new(256, 256).unwrap(), &path).unwrap();
    let header = b"P6\n256 256\n255\n";
    let len = fs::metadata(&path).unwrap().len() as usize;
    assert_eq!(len, header.len() + 256 * 256 * 3);
}

#[test]
fn truncated_file_decodes_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.ppm");
    fs::write(&path, b"P6\n3 1\n255\n\x10\x20\x30\x40").unwrap();

    let out = decode_ppm(&path).unwrap();
    assert_eq!(
        out.warning(),
        Some(&DecodeWarning::ShortRead {
            expected: 9,
            actual: 4
        })
    );
    assert_eq!(out.image().pixels(), &[0x10, 0x20, 0x30, 0x40, 0, 0, 0, 0, 0]);
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.ppm");
    match decode_ppm(&path) {
        Err(PpmError::Io { path: p, source }) => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("out.ppm");
    let img = Image::new(1, 1).unwrap();
    assert!(matches!(write_ppm(&img, &path), Err(PpmError::Io { .. })));
    assert!(matches!(
        write_pgm(&[0], 1, 1, 255, &path),
        Err(PpmError::Io { .. })
    ));
}

#[test]
fn header_error_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.ppm");
    fs::write(&path, b"P6\n1 1\n256\n\x00\x00\x00").unwrap();
    assert!(matches!(
        decode_ppm(&path),
        Err(PpmError::MaxValOutOfRange(256))
    ));
}

#[test]
fn info_and_encode_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("info.ppm");

    EncodeRequest::ppm()
        .with_max_val(63)
        .encode_to_file(&[5, 6, 7], 1, 1, PixelLayout::Rgb8, &path, Unstoppable)
        .unwrap();

    let info = ImageInfo::from_path(&path).unwrap();
    assert_eq!((info.width, info.height, info.max_val), (1, 1, 63));
    assert_eq!(info.format, FormatTag::P6);
}

#[test]
fn strict_file_decode() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("p5.pgm");
    fs::write(&path, b"P5\n1 1\n255\n\x00").unwrap();

    let result = DecodeRequest::new()
        .with_strictness(Strictness::Strict)
        .decode_file(&path, Unstoppable);
    assert!(matches!(result, Err(PpmError::UnsupportedFormat(_))));
}

#[test]
fn file_and_memory_decode_compare_equal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("same.ppm");
    let data = b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06";
    fs::write(&path, data).unwrap();

    let from_file = decode_ppm(&path).unwrap().into_image();
    let from_memory = decode(data, Unstoppable).unwrap().into_image();
    assert_eq!(from_file.source_path(), Some(path.as_path()));
    assert_eq!(from_memory.source_path(), None);
    assert_eq!(from_file, from_memory);
}
