use image::{DynamicImage, GenericImageView};
use placeholder_sprites::{
    chunks::{iter_chunks, parse_signature, Chunk, RawChunk},
    encode,
    sprites::{Frame, SheetLayout, CATALOG},
    ColorType, Pixel,
};

fn standard_decode(bytes: &[u8]) -> DynamicImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png).unwrap()
}

fn chunks(bytes: &[u8]) -> Vec<RawChunk<'_>> {
    let (rest, _) = parse_signature(bytes).unwrap();
    iter_chunks(rest).collect::<anyhow::Result<_>>().unwrap()
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn to_pixels(image: &DynamicImage) -> Vec<Vec<Pixel>> {
    (0..image.height())
        .map(|y| {
            (0..image.width())
                .map(|x| {
                    let [r, g, b, a] = image.get_pixel(x, y).0;
                    match image.color() {
                        image::ColorType::Rgb8 => Pixel::rgb(r, g, b),
                        _ => Pixel::rgba(r, g, b, a),
                    }
                })
                .collect()
        })
        .collect()
}

#[test]
fn two_by_two_red() {
    let red = Pixel::rgb(255, 0, 0);
    let rows = vec![vec![red; 2]; 2];
    let bytes = encode(2, 2, ColorType::Rgb, &rows).unwrap();

    let chunks = chunks(&bytes);
    let Chunk::IHDR(header) = chunks[0].parse().unwrap() else {
        panic!("first chunk is not IHDR");
    };
    assert_eq!((header.width, header.height), (2, 2));
    assert_eq!((header.bit_depth, header.color_type), (8, 2));
    insta::assert_snapshot!(hex(&bytes[8..33]), @"0000000d4948445200000002000000020802000000fdd49a73");

    let decoded = standard_decode(&bytes);
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    assert_eq!(to_pixels(&decoded), rows);
}

#[test]
fn single_pixel_both_color_types() {
    let rgb = [[Pixel::rgb(12, 34, 56)]];
    let decoded = standard_decode(&encode(1, 1, ColorType::Rgb, &rgb).unwrap());
    assert_eq!((decoded.width(), decoded.height()), (1, 1));
    assert_eq!(to_pixels(&decoded), [[Pixel::rgb(12, 34, 56)]]);

    let rgba = [[Pixel::rgba(12, 34, 56, 78)]];
    let bytes = encode(1, 1, ColorType::Rgba, &rgba).unwrap();
    insta::assert_snapshot!(hex(&bytes[8..33]), @"0000000d49484452000000010000000108060000001f15c489");
    let decoded = standard_decode(&bytes);
    assert_eq!(decoded.color(), image::ColorType::Rgba8);
    assert_eq!(to_pixels(&decoded), [[Pixel::rgba(12, 34, 56, 78)]]);
}

#[test]
fn ends_with_empty_iend() {
    let bytes = encode(3, 3, ColorType::Rgb, &vec![vec![Pixel::BLACK; 3]; 3]).unwrap();
    insta::assert_snapshot!(hex(&bytes[bytes.len() - 12..]), @"0000000049454e44ae426082");
}

#[test]
fn every_crc_verifies_and_corruption_is_caught() {
    let rows: Vec<Vec<Pixel>> = (0..8u8)
        .map(|y| (0..8u8).map(|x| Pixel::rgba(x * 30, y * 30, 0, 255)).collect())
        .collect();
    let mut bytes = encode(8, 8, ColorType::Rgba, &rows).unwrap();
    assert!(chunks(&bytes).iter().all(RawChunk::crc_matches));

    // last byte of the IDAT payload, just before its CRC
    let idat_crc_start = bytes.len() - 12 - 4;
    bytes[idat_crc_start - 1] ^= 0x40;
    let verdicts: Vec<_> = chunks(&bytes)
        .iter()
        .map(|c| (c.type_name().into_owned(), c.crc_matches()))
        .collect();
    assert_eq!(
        verdicts,
        [
            ("IHDR".to_owned(), true),
            ("IDAT".to_owned(), false),
            ("IEND".to_owned(), true)
        ]
    );
}

#[test]
fn gradient_survives_standard_decoder() {
    let rows: Vec<Vec<Pixel>> = (0..17u32)
        .map(|y| {
            (0..23u32)
                .map(|x| Pixel::rgba((x * 11) as u8, (y * 15) as u8, ((x + y) * 5) as u8, (x * y) as u8))
                .collect()
        })
        .collect();
    let bytes = encode(23, 17, ColorType::Rgba, &rows).unwrap();
    assert_eq!(to_pixels(&standard_decode(&bytes)), rows);
    assert_eq!(placeholder_sprites::decode(&bytes).unwrap().into_pixels(), rows);
}

#[test]
fn encoding_is_idempotent() {
    let rows = vec![vec![Pixel::rgb(1, 2, 3), Pixel::rgb(4, 5, 6)]; 5];
    assert_eq!(
        encode(2, 5, ColorType::Rgb, &rows).unwrap(),
        encode(2, 5, ColorType::Rgb, &rows).unwrap()
    );
}

#[test]
fn grid_composition_corners() {
    let (a, b, c, d) = (
        Pixel::rgb(255, 0, 0),
        Pixel::rgb(0, 255, 0),
        Pixel::rgb(0, 0, 255),
        Pixel::rgb(255, 255, 0),
    );
    let frame = Frame::grid(4, 4, 2, 2, &[a, b, c, d], Pixel::BLACK).unwrap();
    let bytes = encode(4, 4, ColorType::Rgb, frame.rows()).unwrap();
    let decoded = standard_decode(&bytes);
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(3, 0).0, [0, 255, 0, 255]);
    assert_eq!(decoded.get_pixel(0, 3).0, [0, 0, 255, 255]);
    assert_eq!(decoded.get_pixel(3, 3).0, [255, 255, 0, 255]);
}

#[test]
fn transparent_padding_reaches_the_file() {
    let image = SheetLayout::new(2, 2, 2, 1)
        .compose(&[Frame::solid(2, 2, Pixel::rgb(9, 9, 9))], ColorType::Rgba)
        .unwrap();
    let decoded = standard_decode(&image.encode());
    assert_eq!(decoded.get_pixel(1, 1).0, [9, 9, 9, 255]);
    assert_eq!(decoded.get_pixel(2, 0).0, [0, 0, 0, 0]);
}

#[test]
fn catalog_sheets_decode() {
    for sprite in CATALOG {
        let image = sprite.render().unwrap();
        let decoded = standard_decode(&image.encode());
        assert_eq!(
            (decoded.width(), decoded.height()),
            (sprite.layout.width(), sprite.layout.height()),
            "{}",
            sprite.name
        );
        assert_eq!(to_pixels(&decoded), image.rows(), "{}", sprite.name);
    }
}
