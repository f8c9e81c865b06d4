//! End-to-end scenarios through the public API.

use limg::{
    decode, encode, load, save, Dimensions, EditController, EditOutcome, ErrorKind, Format,
    ImageModel, PointerEvent, DisplayMapping, HEADER_LEN,
};

/// Header for a 4×3 bitonal image, then 12 pixel bytes.
const SMALL_IMAGE: [u8; 17] = [
    0x00, 0x00, 0x04, 0x00, 0x03, //
    0, 0, 0, 0, //
    0, 0, 1, 0, //
    0, 0, 0, 0,
];

fn editing() -> EditController {
    let mut controller = EditController::new();
    controller.enter_edit_mode();
    controller
}

#[test]
fn test_decode_small_image() {
    let image = decode(&SMALL_IMAGE).unwrap();
    assert_eq!((image.width(), image.height()), (4, 3));
    assert_eq!(image.format(), Format::Bitonal);
    assert_eq!(
        image.to_grid(),
        vec![vec![0, 0, 0, 0], vec![0, 0, 1, 0], vec![0, 0, 0, 0]]
    );
    assert_eq!(encode(&image), SMALL_IMAGE);
}

#[test]
fn test_paint_then_encode_matches_file_layout() {
    let mut image = ImageModel::new_blank(4, 3, Format::Bitonal).unwrap();
    image.paint(1, 2).unwrap();
    assert_eq!(encode(&image), SMALL_IMAGE);
}

#[test]
fn test_decode_rejects_unknown_tag() {
    let mut bytes = SMALL_IMAGE;
    bytes[0] = 1;
    assert_eq!(decode(&bytes).unwrap_err().kind(), ErrorKind::MalformedHeader);
}

#[test]
fn test_decode_rejects_short_streams() {
    for len in 0..HEADER_LEN {
        let err = decode(&SMALL_IMAGE[..len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedHeader, "len {len}");
    }
    let err = decode(&SMALL_IMAGE[..16]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedData);
    assert_eq!(
        err.to_string(),
        "truncated pixel data: expected 12 bytes, found 11"
    );
}

#[test]
fn test_decode_rejects_out_of_domain_pixel() {
    let mut bytes = SMALL_IMAGE;
    bytes[HEADER_LEN + 5] = 2;
    let err = decode(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPixelValue);
    assert_eq!(err.to_string(), "pixel value 2 is not valid for the bitonal format");
}

#[test]
fn test_dimension_bounds() {
    assert!(Dimensions::new(65_535, 65_535).is_ok());
    assert!(ImageModel::new_blank(65_535, 1, Format::Bitonal).is_ok());
    for (w, h) in [(0, 1), (1, 0), (65_536, 1), (1, 65_536)] {
        let err = ImageModel::new_blank(w, h, Format::Bitonal).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDimension, "{w}x{h}");
    }
}

#[test]
fn test_pointer_painting_on_300_unit_display() {
    // 300 / 3 = 100 display units per pixel, image starts 9 units in.
    let mapping = DisplayMapping::new(300, 9);
    let mut image = ImageModel::new_blank(4, 3, Format::Bitonal).unwrap();
    let controller = editing();

    let outcome = controller
        .handle(Some(&mut image), PointerEvent::new(9 + 250, 9 + 150), mapping)
        .unwrap();
    assert_eq!(outcome, EditOutcome::Painted { row: 1, col: 2 });
    assert_eq!(encode(&image), SMALL_IMAGE);

    // Painting the same pixel again changes nothing.
    controller
        .handle(Some(&mut image), PointerEvent::new(9 + 299, 9 + 199), mapping)
        .unwrap();
    assert_eq!(encode(&image), SMALL_IMAGE);

    // Past the right edge of the image.
    let outcome = controller
        .handle_pointer_event(Some(&mut image), 9 + 400, 9 + 10, 300, 9)
        .unwrap();
    assert_eq!(outcome, EditOutcome::OutsideImage);
    assert_eq!(encode(&image), SMALL_IMAGE);
}

#[test]
fn test_view_only_controller_leaves_image_untouched() {
    let mut image = ImageModel::new_blank(4, 3, Format::Bitonal).unwrap();
    let outcome = EditController::new()
        .handle_pointer_event(Some(&mut image), 20, 20, 300, 9)
        .unwrap();
    assert_eq!(outcome, EditOutcome::Ignored);
    assert_eq!(image, ImageModel::new_blank(4, 3, Format::Bitonal).unwrap());
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("small.{}", limg::FILE_EXTENSION));

    let image = decode(&SMALL_IMAGE).unwrap();
    save(&image, &path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), SMALL_IMAGE);
    assert_eq!(load(&path).unwrap(), image);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("missing.limg")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}
