use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::io::{self, SitePaths};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a tree of Markdown files")]
struct Cli {
    /// Config file (defaults to sitegen.toml in the current directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of assets copied verbatim
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory, cleared before each build
    #[arg(long)]
    public: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file, if any, and applies flag overrides on top.
    fn site_paths(&self) -> Result<SitePaths> {
        let config_path = self.config.clone().unwrap_or_else(Config::config_path);
        log::info!("Config path: {}", config_path.display());

        let config = match Config::load_from_path(&config_path)
            .with_context(|| format!("Failed to load config '{}'", config_path.display()))?
        {
            Some(config) => config.resolve(config_dir(&config_path)),
            None if self.config.is_some() => {
                bail!("Config file '{}' not found", config_path.display())
            }
            None => {
                log::info!("No config file found, using defaults");
                Config::default()
            }
        };

        Ok(self.apply_overrides(config))
    }

    fn apply_overrides(&self, config: Config) -> SitePaths {
        SitePaths {
            content_dir: self.content.clone().unwrap_or(config.content_dir),
            static_dir: self.static_dir.clone().unwrap_or(config.static_dir),
            public_dir: self.public.clone().unwrap_or(config.public_dir),
            template: self.template.clone().unwrap_or(config.template),
        }
    }
}

fn config_dir(config_path: &Path) -> &Path {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let paths = cli.site_paths()?;

    let report = io::build_site(&paths).with_context(|| {
        format!(
            "Failed to build site from '{}' into '{}'",
            paths.content_dir.display(),
            paths.public_dir.display()
        )
    })?;

    if !report.is_success() {
        bail!(
            "{} of {} pages failed to build",
            report.failures.len(),
            report.failures.len() + report.pages.len()
        );
    }

    log::info!("Site written to {}", paths.public_dir.display());
    Ok(())
}
