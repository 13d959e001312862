//! Image output.
//!
//! The canonical interface is a plain-PPM (P3) text stream: one header,
//! then one `R G B` line per pixel, top row first. PNG export goes
//! through the `image` crate. Save routines log success at info level and
//! failures at warn level rather than panicking.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use image::RgbImage;
use log::{info, warn};

/// Write an image as plain PPM text to the given writer.
///
/// Emits the `P3` header with dimensions and the 255 maximum, then one
/// `"<R> <G> <B>"` line per pixel, rows top-to-bottom and left-to-right.
pub fn write_ppm<W: Write>(image: &RgbImage, out: &mut W) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width(), image.height())?;
    writeln!(out, "255")?;
    for pixel in image.pixels() {
        writeln!(out, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
    }
    Ok(())
}

/// Save an image as a plain-PPM text file.
pub fn save_image_as_ppm(image: &RgbImage, output_path: &str) {
    let result = File::create(output_path)
        .and_then(|file| write_ppm(image, &mut BufWriter::new(file)));
    match result {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image as {}: {}", output_path, e),
    }
}

/// Save an image as PNG.
///
/// The pixels are already gamma-corrected and quantized by the renderer,
/// so the bytes are written as-is.
pub fn save_image_as_png(image: &RgbImage, output_path: &str) {
    match image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image as {}: {}", output_path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn ppm_header_and_pixel_layout() {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(0, 0, Rgb([255, 0, 0]));
        image.put_pixel(1, 0, Rgb([0, 255, 0]));
        image.put_pixel(0, 1, Rgb([0, 0, 255]));
        image.put_pixel(1, 1, Rgb([1, 2, 3]));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "P3\n2 2\n255\n255 0 0\n0 255 0\n0 0 255\n1 2 3\n"
        );
    }

    #[test]
    fn ppm_emits_one_line_per_pixel() {
        let image = RgbImage::new(3, 4);
        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        // 3 header lines + width * height pixel lines.
        assert_eq!(text.lines().count(), 3 + 12);
        assert!(text.lines().skip(3).all(|line| line == "0 0 0"));
    }
}
