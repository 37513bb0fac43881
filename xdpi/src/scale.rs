//! Per bucket output sizes.
//!
//! The target width is expressed in the reference density. Every bucket
//! is derived from it by `source / reference * bucket * (target / source)`,
//! rounded to the nearest pixel.

use crate::{Density, Format};
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScaleRequest {
    pub reference: Density,
    pub target_width: u32,
    pub format: Format,
    pub basename: String,
    pub res_dir: PathBuf,
}

impl ScaleRequest {
    pub fn res_dir(&self) -> &Path {
        &self.res_dir
    }

    pub fn bucket_dir(&self, density: Density) -> PathBuf {
        self.res_dir.join(density.dir_name())
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.basename, self.format.extension())
    }

    pub fn bucket_file(&self, density: Density) -> PathBuf {
        self.bucket_dir(density).join(self.file_name())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BucketSize {
    pub width: u32,
    pub height: u32,
    source_width: u32,
}

impl BucketSize {
    /// The output is wider than the image it is scaled from.
    pub fn is_upscale(&self) -> bool {
        self.width > self.source_width
    }

    pub fn upscale_factor(&self) -> f64 {
        self.width as f64 / self.source_width as f64
    }
}

impl std::fmt::Display for BucketSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resize requested by the user, relative to the source width.
pub fn resize_ratio(target_width: u32, source_width: u32) -> f64 {
    target_width as f64 / source_width as f64
}

pub fn bucket_size(
    source: (u32, u32),
    target_width: u32,
    reference: Density,
    bucket: Density,
) -> Result<BucketSize> {
    let (source_width, source_height) = source;
    anyhow::ensure!(source_width > 0, "source image has zero width");
    let resize_ratio = resize_ratio(target_width, source_width);
    let scale =
        |len: u32| (len as f64 / reference.ratio() * bucket.ratio() * resize_ratio).round();
    let width = scale(source_width);
    let height = scale(source_height);
    anyhow::ensure!(
        width >= 1.0 && height >= 1.0,
        "{} would be scaled to {}x{}",
        bucket.dir_name(),
        width,
        height
    );
    anyhow::ensure!(
        width <= u32::MAX as f64 && height <= u32::MAX as f64,
        "{} would be scaled beyond {}px",
        bucket.dir_name(),
        u32::MAX
    );
    Ok(BucketSize {
        width: width as u32,
        height: height as u32,
        source_width,
    })
}

/// Computes the sizes of all buckets, in [`Density::ALL`] order.
pub fn plan(source: (u32, u32), request: &ScaleRequest) -> Result<Vec<(Density, BucketSize)>> {
    Density::ALL
        .iter()
        .map(|&density| -> Result<_> {
            let size = bucket_size(source, request.target_width, request.reference, density)?;
            Ok((density, size))
        })
        .collect()
}
