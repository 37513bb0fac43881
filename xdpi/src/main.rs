use anyhow::Result;
use clap::{Parser, Subcommand};
use xdpi::{command, DrawableArgs, DrawableEnv};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("XDPI_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    args.command.run()
}

#[derive(Subcommand)]
enum Commands {
    /// List the density buckets and their ratios
    Densities,
    /// Show the size of every drawable without writing it
    Plan {
        #[clap(flatten)]
        args: DrawableArgs,
    },
    /// Write the drawables for all density buckets
    Write {
        #[clap(flatten)]
        args: DrawableArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Self::Densities => command::densities(),
            Self::Plan { args } => {
                let env = DrawableEnv::new(args)?;
                command::plan(&env)?;
            }
            Self::Write { args } => {
                let env = DrawableEnv::new(args)?;
                command::write(&env)?;
            }
        }
        Ok(())
    }
}
