use crate::{Density, Format, ScaleRequest, Selection};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use xcommon::Scaler;

pub const DEFAULT_CONFIG: &str = "xdpi.yaml";
pub const DEFAULT_BASENAME: &str = "icon";
pub const DEFAULT_WIDTH: u32 = 48;
pub const DEFAULT_DENSITY: Density = Density::Mdpi;
pub const DEFAULT_FORMAT: Format = Format::Png;

/// Defaults read from `xdpi.yaml`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub res: Option<PathBuf>,
    pub name: Option<String>,
    pub width: Option<u32>,
    pub density: Option<Density>,
    pub format: Option<Format>,
    pub selection: Option<Selection>,
    pub optimize: Option<bool>,
}

impl Config {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents).with_context(|| format!("invalid config `{}`", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawConfig {
            input: Option<PathBuf>,
            res: Option<PathBuf>,
            name: Option<String>,
            width: Option<u32>,
            density: Option<String>,
            format: Option<String>,
            selection: Option<String>,
            optimize: Option<bool>,
        }

        if contents.trim().is_empty() {
            return Ok(Default::default());
        }
        let config: RawConfig = serde_yaml::from_str(contents)?;
        Ok(Self {
            input: config.input,
            res: config.res,
            name: config.name,
            width: config.width,
            density: config.density.as_deref().map(str::parse::<Density>).transpose()?,
            format: config.format.as_deref().map(str::parse::<Format>).transpose()?,
            selection: config.selection.as_deref().map(str::parse::<Selection>).transpose()?,
            optimize: config.optimize,
        })
    }
}

#[derive(Parser, Debug)]
pub struct DrawableArgs {
    /// Source image
    #[clap(long, short)]
    input: Option<PathBuf>,
    /// Project `res` folder. Defaults to the current directory
    #[clap(long, short)]
    res: Option<PathBuf>,
    /// Base name of the written drawables, ie `icon`
    #[clap(long, short)]
    name: Option<String>,
    /// Width of the drawable in the reference density
    #[clap(long, short)]
    width: Option<u32>,
    /// Reference density of the width. Can be one of `ldpi`, `mdpi`,
    /// `hdpi`, `xhdpi`, `xxhdpi` or `xxxhdpi`.
    #[clap(long, short)]
    density: Option<Density>,
    /// Output format. Can be one of `gif`, `png` or `jpg`.
    #[clap(long, short)]
    format: Option<Format>,
    /// Only export the `x,y,width,height` rectangle of the source image
    #[clap(long, short)]
    selection: Option<Selection>,
    /// Reduce the color type of the source before scaling
    #[clap(long, overrides_with = "no_optimize")]
    optimize: bool,
    /// Keep the color type of the source, even if the config enables `optimize`
    #[clap(long, overrides_with = "optimize")]
    no_optimize: bool,
    /// Path to the config file. Defaults to `xdpi.yaml`
    #[clap(long, short)]
    config: Option<PathBuf>,
    /// Use verbose output
    #[clap(long, short)]
    verbose: bool,
}

impl DrawableArgs {
    pub fn config_path(&self) -> &Path {
        self.config
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG))
    }

    fn optimize(&self) -> Option<bool> {
        match (self.optimize, self.no_optimize) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Fully resolved parameters of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawableEnv {
    input: PathBuf,
    selection: Option<Selection>,
    optimize: bool,
    verbose: bool,
    request: ScaleRequest,
}

impl DrawableEnv {
    pub fn new(args: DrawableArgs) -> Result<Self> {
        let config = Config::parse(args.config_path())?;
        let cwd = std::env::current_dir()?;
        Self::from_parts(args, config, &cwd)
    }

    /// Command line values win over config values, which win over the
    /// built in defaults.
    pub fn from_parts(args: DrawableArgs, config: Config, cwd: &Path) -> Result<Self> {
        let optimize = args.optimize().or(config.optimize).unwrap_or(false);
        let input = args
            .input
            .or(config.input)
            .context("no input image given, pass `--input` or set `input` in the config")?;
        let request = ScaleRequest {
            reference: args.density.or(config.density).unwrap_or(DEFAULT_DENSITY),
            target_width: args.width.or(config.width).unwrap_or(DEFAULT_WIDTH),
            format: args.format.or(config.format).unwrap_or(DEFAULT_FORMAT),
            basename: args
                .name
                .or(config.name)
                .unwrap_or_else(|| DEFAULT_BASENAME.to_string()),
            res_dir: args
                .res
                .or(config.res)
                .unwrap_or_else(|| cwd.to_path_buf()),
        };
        anyhow::ensure!(!request.basename.is_empty(), "image basename is empty");
        Ok(Self {
            input,
            selection: args.selection.or(config.selection),
            optimize,
            verbose: args.verbose,
            request,
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn optimize(&self) -> bool {
        self.optimize
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn request(&self) -> &ScaleRequest {
        &self.request
    }

    /// Decodes the input and restricts it to the selection.
    pub fn source(&self) -> Result<Scaler> {
        let mut scaler = Scaler::open(&self.input)?;
        if let Some(selection) = self.selection {
            scaler
                .crop(selection.x, selection.y, selection.width, selection.height)
                .with_context(|| format!("invalid selection {}", selection))?;
        }
        if self.optimize {
            scaler.optimize();
        }
        Ok(scaler)
    }
}
