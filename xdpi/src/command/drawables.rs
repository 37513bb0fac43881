use crate::scale::{self, BucketSize};
use crate::task::TaskRunner;
use crate::{Density, DrawableEnv, Warnings};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct Output {
    pub density: Density,
    pub path: PathBuf,
    pub size: BucketSize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub outputs: Vec<Output>,
    pub warnings: Warnings,
}

/// Returns the directory of a bucket, creating it only when the `res`
/// folder already exists.
pub fn bucket_dir(res: &Path, density: Density) -> Result<PathBuf> {
    let dir = res.join(density.dir_name());
    if res.exists() && !dir.exists() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create `{}`", dir.display()))?;
    }
    Ok(dir)
}

/// Writes a scaled copy of the source into every density bucket.
pub fn write(env: &DrawableEnv) -> Result<Report> {
    let source = env.source()?;
    let request = env.request();
    let reference_ratio = request.reference.ratio();
    let sizes = scale::plan(source.dimensions(), request)?;
    let mut runner = TaskRunner::new(sizes.len(), env.verbose());
    let mut report = Report::default();

    for (density, size) in sizes {
        runner.start_task(density.dir_name());
        let mut img = source.duplicate();
        let resize_ratio = scale::resize_ratio(request.target_width, img.width());
        log::info!(
            "{} : {:.6}, {:.6}, {:.6}",
            density.dir_name(),
            reference_ratio,
            density.ratio(),
            resize_ratio
        );
        if size.is_upscale() {
            report.warnings.upscaled(density, size.upscale_factor());
        }
        img.scale(size.width, size.height)?;

        let dir = bucket_dir(request.res_dir(), density)?;
        let path = dir.join(request.file_name());
        img.save(&path, request.format.image_format())?;

        runner.end_task(&size.to_string());
        report.outputs.push(Output {
            density,
            path,
            size,
        });
    }

    report.warnings.notify();
    Ok(report)
}
