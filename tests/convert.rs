use panorama_converter::convert::{convert, ConversionOptions};
use panorama_converter::resource::data_uri;
use panorama_converter::resource::panorama::memory::InMemoryPanoramaLoader;
use panorama_converter::{CubeFace, OutputFormat};

fn png_bytes(image: &image::RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_with_encoder(image::codecs::png::PngEncoder::new(std::io::Cursor::new(
            &mut bytes,
        )))
        .unwrap();
    bytes
}

fn decode_face(uri: &str) -> image::RgbaImage {
    let (_, bytes) = data_uri::parse(uri).unwrap();
    image::load_from_memory(&bytes).unwrap().to_rgba8()
}

#[test]
fn a_solid_red_panorama_yields_six_solid_faces() {
    let red = [255u8, 0, 0, 255];
    let panorama = image::RgbaImage::from_pixel(16, 8, image::Rgba(red));
    let loader = InMemoryPanoramaLoader {
        bytes: png_bytes(&panorama),
    };

    let options = ConversionOptions {
        face_size: 4,
        high_quality: false,
        output_format: OutputFormat::Png,
        ..ConversionOptions::default()
    };

    let images = convert(&loader, &options).unwrap();

    for face in CubeFace::RENDER_ORDER {
        let decoded = decode_face(images.get(face));
        assert_eq!(decoded.dimensions(), (4, 4));

        for pixel in decoded.pixels() {
            for channel in 0..4 {
                let difference = (pixel.0[channel] as i16 - red[channel] as i16).abs();
                assert!(
                    difference <= 1,
                    "{face} face channel {channel} off by {difference}"
                );
            }
        }
    }
}

#[test]
fn converting_the_same_source_twice_is_pixel_identical() {
    let panorama = image::RgbaImage::from_fn(32, 16, |x, y| {
        image::Rgba([(x * 8 % 256) as u8, (y * 16 % 256) as u8, 31, 255])
    });
    let loader = InMemoryPanoramaLoader {
        bytes: png_bytes(&panorama),
    };

    let options = ConversionOptions {
        face_size: 8,
        output_format: OutputFormat::Png,
        ..ConversionOptions::default()
    };

    let first = convert(&loader, &options).unwrap();
    let second = convert(&loader, &options).unwrap();

    for face in CubeFace::RENDER_ORDER {
        assert_eq!(first.get(face), second.get(face));
    }
}

#[test]
fn jpeg_output_decodes_at_the_requested_face_size() {
    let panorama = image::RgbaImage::from_pixel(64, 32, image::Rgba([40, 90, 160, 255]));
    let loader = InMemoryPanoramaLoader {
        bytes: png_bytes(&panorama),
    };

    let options = ConversionOptions {
        face_size: 16,
        ..ConversionOptions::default()
    };

    let images = convert(&loader, &options).unwrap();

    for face in CubeFace::RENDER_ORDER {
        assert!(images.get(face).starts_with("data:image/jpeg;base64,"));
        let decoded = decode_face(images.get(face));
        assert_eq!(decoded.dimensions(), (16, 16));
    }
}

#[test]
fn both_filters_agree_on_a_uniform_panorama() {
    let color = [17u8, 200, 64, 255];
    let panorama = image::RgbaImage::from_pixel(32, 16, image::Rgba(color));
    let loader = InMemoryPanoramaLoader {
        bytes: png_bytes(&panorama),
    };

    for high_quality in [false, true] {
        let options = ConversionOptions {
            face_size: 8,
            high_quality,
            output_format: OutputFormat::Png,
            ..ConversionOptions::default()
        };

        let images = convert(&loader, &options).unwrap();
        for face in CubeFace::RENDER_ORDER {
            let decoded = decode_face(images.get(face));
            for pixel in decoded.pixels() {
                for channel in 0..4 {
                    let difference = (pixel.0[channel] as i16 - color[channel] as i16).abs();
                    assert!(
                        difference <= 1,
                        "{face} face (high_quality={high_quality}) channel {channel} off by {difference}"
                    );
                }
            }
        }
    }
}
