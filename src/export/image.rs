use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{Rgba, RgbaImage};

/// Offscreen capture options. The preview is re-rendered at `scale` times its
/// on-screen size before encoding.
#[derive(Clone, Copy, Debug)]
pub struct ImageOptions {
    pub scale: u32,
    pub transparent_background: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        ImageOptions {
            scale: 2,
            transparent_background: false,
        }
    }
}

pub fn image_export_path(now_millis: i64) -> PathBuf {
    super::output_dir().join(format!("poem-{now_millis}.png"))
}

/// Encodes a 0RGB pixel buffer (the renderer's native format) as a PNG file.
/// With `transparent_background`, pixels matching `background` become fully
/// transparent.
pub fn encode_png(
    pixels: &[u32],
    width: u32,
    height: u32,
    background: Option<u32>,
    path: &Path,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        pixels.len() == (width as usize) * (height as usize),
        "pixel buffer size mismatch"
    );
    let mut img = RgbaImage::new(width, height);
    for (i, pixel) in pixels.iter().enumerate() {
        let x = (i as u32) % width;
        let y = (i as u32) / width;
        let r = ((pixel >> 16) & 0xFF) as u8;
        let g = ((pixel >> 8) & 0xFF) as u8;
        let b = (pixel & 0xFF) as u8;
        let a = if background == Some(pixel & 0x00FF_FFFF) {
            0
        } else {
            0xFF
        };
        img.put_pixel(x, y, Rgba([r, g, b, a]));
    }
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_png_writes_a_decodable_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("poem.png");
        let pixels = vec![0xF8F9FA_u32; 4 * 3];
        encode_png(&pixels, 4, 3, None, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([0xF8, 0xF9, 0xFA, 0xFF]));
    }

    #[test]
    fn transparent_background_clears_matching_pixels() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("poem.png");
        let pixels = vec![0xFFFFFF, 0x2C3E50, 0xFFFFFF, 0x2C3E50];
        encode_png(&pixels, 2, 2, Some(0xFFFFFF), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
        assert_eq!(decoded.get_pixel(1, 0).0[3], 0xFF);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("poem.png");
        assert!(encode_png(&[0; 3], 2, 2, None, &path).is_err());
    }
}
