use crate::{scale, Density, DrawableEnv};
use anyhow::Result;
use console::style;

mod drawables;

pub use drawables::{bucket_dir, write, Output, Report};

pub fn densities() {
    for density in Density::ALL {
        println!(
            "{:10}{:20}{}",
            density.label(),
            density.dir_name(),
            density.ratio()
        );
    }
}

/// Prints the size of every bucket without writing anything.
pub fn plan(env: &DrawableEnv) -> Result<Vec<(Density, scale::BucketSize)>> {
    let source = env.source()?;
    let request = env.request();
    let sizes = scale::plan(source.dimensions(), request)?;
    for (density, size) in &sizes {
        let upscale = if size.is_upscale() {
            style(format!("upscaled by {:.2}", size.upscale_factor()))
                .yellow()
                .to_string()
        } else {
            String::new()
        };
        println!(
            "{:50}{:12}{}",
            request.bucket_file(*density).display(),
            size.to_string(),
            upscale
        );
    }
    Ok(sizes)
}
