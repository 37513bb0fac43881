use anyhow::Result;
use xcommon::ImageFormat;

pub mod command;
mod config;
pub mod scale;
mod task;
pub mod warnings;

pub use crate::config::{Config, DrawableArgs, DrawableEnv};
pub use crate::scale::{BucketSize, ScaleRequest};
pub use crate::warnings::Warnings;

/// Android resource density bucket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Density {
    Ldpi,
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// All buckets, from lowest to highest density.
    pub const ALL: [Density; 6] = [
        Self::Ldpi,
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    /// Scale relative to mdpi.
    pub fn ratio(self) -> f64 {
        match self {
            Self::Ldpi => 0.75,
            Self::Mdpi => 1.0,
            Self::Hdpi => 1.5,
            Self::Xhdpi => 2.0,
            Self::Xxhdpi => 3.0,
            Self::Xxxhdpi => 4.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ldpi => "ldpi",
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Name of the resource directory, ie `drawable-xhdpi`.
    pub fn dir_name(self) -> String {
        format!("drawable-{}", self.label())
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Density {
    type Err = anyhow::Error;

    fn from_str(density: &str) -> Result<Self> {
        let label = density.strip_prefix("drawable-").unwrap_or(density);
        Ok(match label {
            "ldpi" => Self::Ldpi,
            "mdpi" => Self::Mdpi,
            "hdpi" => Self::Hdpi,
            "xhdpi" => Self::Xhdpi,
            "xxhdpi" => Self::Xxhdpi,
            "xxxhdpi" => Self::Xxxhdpi,
            _ => anyhow::bail!("unsupported density {}", density),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Gif,
    Png,
    Jpg,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Gif => ImageFormat::Gif,
            Self::Png => ImageFormat::Png,
            Self::Jpg => ImageFormat::Jpeg,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(format: &str) -> Result<Self> {
        Ok(match format {
            "gif" => Self::Gif,
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpg,
            _ => anyhow::bail!("unsupported format {}", format),
        })
    }
}

/// Rectangle of the source image to export, written `x,y,width,height`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Selection {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl std::str::FromStr for Selection {
    type Err = anyhow::Error;

    fn from_str(selection: &str) -> Result<Self> {
        let parts = selection
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|err| anyhow::anyhow!("invalid selection {}: {}", selection, err))?;
        match parts[..] {
            [x, y, width, height] => Ok(Self {
                x,
                y,
                width,
                height,
            }),
            _ => anyhow::bail!("expected selection as x,y,width,height, got {}", selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_distinct_buckets() {
        let labels = Density::ALL
            .iter()
            .map(|d| d.label())
            .collect::<HashSet<_>>();
        assert_eq!(labels.len(), 6);
        let ratios = Density::ALL.iter().map(|d| d.ratio()).collect::<Vec<_>>();
        assert_eq!(ratios, [0.75, 1.0, 1.5, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn parse_density() {
        for density in Density::ALL {
            assert_eq!(density.label().parse::<Density>().unwrap(), density);
            assert_eq!(density.dir_name().parse::<Density>().unwrap(), density);
        }
        assert!("xxxxhdpi".parse::<Density>().is_err());
        assert!("drawable-".parse::<Density>().is_err());
        assert_eq!(Density::Xxhdpi.dir_name(), "drawable-xxhdpi");
    }

    #[test]
    fn parse_format() {
        assert_eq!("gif".parse::<Format>().unwrap(), Format::Gif);
        assert_eq!("png".parse::<Format>().unwrap(), Format::Png);
        assert_eq!("jpg".parse::<Format>().unwrap(), Format::Jpg);
        assert_eq!("jpeg".parse::<Format>().unwrap(), Format::Jpg);
        assert!("bmp".parse::<Format>().is_err());
        assert_eq!(Format::Jpg.to_string(), "jpg");
        assert_eq!(Format::Jpg.image_format(), ImageFormat::Jpeg);
    }

    #[test]
    fn parse_selection() {
        let selection: Selection = "1, 2,30,40".parse().unwrap();
        assert_eq!(
            selection,
            Selection {
                x: 1,
                y: 2,
                width: 30,
                height: 40
            }
        );
        assert_eq!(selection.to_string(), "1,2,30,40");
        assert!("1,2,3".parse::<Selection>().is_err());
        assert!("1,2,3,-4".parse::<Selection>().is_err());
    }
}
