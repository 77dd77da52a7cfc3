//! PNG image format support

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use salseg_core::{Channels, Raster};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palette and sub-byte images are expanded and 16-bit samples reduced to
/// 8 bits. Gray(+alpha) becomes a gray raster, RGB(A) an RGB raster; alpha
/// is dropped.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth {:?}",
            info.bit_depth
        )));
    }

    let (channels, stride) = match info.color_type {
        ColorType::Grayscale => (Channels::Gray, 1),
        ColorType::GrayscaleAlpha => (Channels::Gray, 2),
        ColorType::Rgb => (Channels::Rgb, 3),
        ColorType::Rgba => (Channels::Rgb, 4),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type after expansion: {:?}",
                other
            )));
        }
    };

    let (width, height) = (info.width, info.height);
    let keep = channels.count();
    let mut data = Vec::with_capacity(width as usize * height as usize * keep);
    for y in 0..height as usize {
        let row = &buf[y * info.line_size..y * info.line_size + width as usize * stride];
        for px in row.chunks_exact(stride) {
            data.extend_from_slice(&px[..keep]);
        }
    }

    Ok(Raster::from_data(width, height, channels, data)?)
}

/// Write a PNG image
///
/// Gray rasters are written as 8-bit grayscale, RGB rasters as 8-bit RGB.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let color_type = match raster.channels() {
        Channels::Gray => ColorType::Grayscale,
        Channels::Rgb => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, raster.width(), raster.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(raster.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use salseg_core::RasterMut;
    use std::io::Cursor;

    #[test]
    fn test_png_gray_through_buffer() {
        let mut raster = RasterMut::new(10, 10, Channels::Gray).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                raster.set_pixel(x, y, ((x + y) * 10) as u8).unwrap();
            }
        }
        let raster: Raster = raster.into();

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();
        let decoded = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(decoded.dimensions(), (10, 10));
        assert_eq!(decoded.channels(), Channels::Gray);
        assert_eq!(decoded.data(), raster.data());
    }

    #[test]
    fn test_png_rgb_through_buffer() {
        let mut raster = RasterMut::new(5, 5, Channels::Rgb).unwrap();
        raster.set_rgb(0, 0, [255, 0, 0]).unwrap();
        raster.set_rgb(1, 1, [0, 255, 0]).unwrap();
        raster.set_rgb(2, 2, [0, 0, 255]).unwrap();
        let raster: Raster = raster.into();

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();
        let decoded = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(decoded.get_rgb(0, 0), Some([255, 0, 0]));
        assert_eq!(decoded.get_rgb(1, 1), Some([0, 255, 0]));
        assert_eq!(decoded.get_rgb(2, 2), Some([0, 0, 255]));
    }
}
