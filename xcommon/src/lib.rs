use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

pub use image::ImageFormat;

/// Source pixels for a set of scaled outputs.
///
/// The image is decoded once and every output starts from a
/// [`Scaler::duplicate`] of it.
#[derive(Clone)]
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?
            .with_guessed_format()?
            .decode()
            .with_context(|| format!("failed to decode `{}`", path.display()))?;
        Ok(Self::new(img))
    }

    pub fn new(img: DynamicImage) -> Self {
        Self {
            img: DynamicImage::ImageRgba8(img.to_rgba8()),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    /// Restricts the image to the given rectangle.
    pub fn crop(&mut self, x: u32, y: u32, width: u32, height: u32) -> Result<()> {
        let (w, h) = self.dimensions();
        anyhow::ensure!(
            width > 0 && height > 0,
            "selection {}x{} is empty",
            width,
            height
        );
        anyhow::ensure!(
            x.checked_add(width).map_or(false, |r| r <= w)
                && y.checked_add(height).map_or(false, |b| b <= h),
            "selection {}x{}+{}+{} exceeds image bounds {}x{}",
            width,
            height,
            x,
            y,
            w,
            h
        );
        self.img = self.img.crop_imm(x, y, width, height);
        Ok(())
    }

    /// Drops the alpha and/or color channels when no pixel uses them.
    pub fn optimize(&mut self) {
        let rgba = self.img.to_rgba8();
        let is_grayscale = rgba.pixels().all(|p| p[0] == p[1] && p[1] == p[2]);
        let is_opaque = rgba.pixels().all(|p| p[3] == 255);
        log::debug!(
            "optimize: grayscale = {}, opaque = {}",
            is_grayscale,
            is_opaque
        );
        self.img = match (is_grayscale, is_opaque) {
            (true, true) => DynamicImage::ImageLuma8(self.img.to_luma8()),
            (true, false) => DynamicImage::ImageLumaA8(self.img.to_luma_alpha8()),
            (false, true) => DynamicImage::ImageRgb8(self.img.to_rgb8()),
            (false, false) => DynamicImage::ImageRgba8(rgba),
        };
    }

    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Resamples to exactly `width` x `height` using cubic interpolation.
    pub fn scale(&mut self, width: u32, height: u32) -> Result<()> {
        anyhow::ensure!(
            width > 0 && height > 0,
            "cannot scale to {}x{}",
            width,
            height
        );
        self.img = self.img.resize_exact(width, height, FilterType::CatmullRom);
        Ok(())
    }

    /// Encodes the image to `path`.
    ///
    /// Jpeg has no alpha channel and gif is encoded from rgba frames, so
    /// the pixels are converted before handing them to the encoder.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ImageFormat) -> Result<()> {
        let path = path.as_ref();
        let img = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(self.img.to_rgb8()),
            ImageFormat::Gif => DynamicImage::ImageRgba8(self.img.to_rgba8()),
            _ => self.img.clone(),
        };
        img.save_with_format(path, format)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgba, RgbaImage};

    fn solid(width: u32, height: u32, pixel: [u8; 4]) -> Scaler {
        Scaler::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba(pixel),
        )))
    }

    #[test]
    fn crop_inside_bounds() {
        let mut scaler = solid(64, 32, [255, 0, 0, 255]);
        scaler.crop(8, 4, 16, 20).unwrap();
        assert_eq!(scaler.dimensions(), (16, 20));
    }

    #[test]
    fn crop_outside_bounds() {
        let mut scaler = solid(64, 32, [255, 0, 0, 255]);
        assert!(scaler.crop(60, 0, 16, 16).is_err());
        assert!(scaler.crop(0, 0, 0, 16).is_err());
        assert!(scaler.crop(u32::MAX, 0, 2, 2).is_err());
        assert_eq!(scaler.dimensions(), (64, 32));
    }

    #[test]
    fn optimize_color_type() {
        let mut gray = solid(4, 4, [7, 7, 7, 255]);
        gray.optimize();
        assert_eq!(gray.img.color(), ColorType::L8);

        let mut gray_alpha = solid(4, 4, [7, 7, 7, 10]);
        gray_alpha.optimize();
        assert_eq!(gray_alpha.img.color(), ColorType::La8);

        let mut rgb = solid(4, 4, [1, 2, 3, 255]);
        rgb.optimize();
        assert_eq!(rgb.img.color(), ColorType::Rgb8);

        let mut rgba = solid(4, 4, [1, 2, 3, 4]);
        rgba.optimize();
        assert_eq!(rgba.img.color(), ColorType::Rgba8);
    }

    #[test]
    fn duplicate_is_independent() {
        let source = solid(48, 48, [0, 0, 255, 255]);
        let mut copy = source.duplicate();
        copy.scale(96, 24).unwrap();
        assert_eq!(copy.dimensions(), (96, 24));
        assert_eq!(source.dimensions(), (48, 48));
    }

    #[test]
    fn scale_to_zero() {
        let mut scaler = solid(48, 48, [0, 0, 255, 255]);
        assert!(scaler.scale(0, 10).is_err());
    }
}
