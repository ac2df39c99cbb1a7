use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::RenderConfig;
use std::path::{Path, PathBuf};

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render the Cornell box with direct light sampling.
#[derive(Debug, Parser)]
#[command(name = "lumen", version)]
pub struct Args {
    /// JSON render configuration; command line flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Samples per pixel
    #[arg(short, long)]
    pub samples: Option<u32>,

    /// Maximum bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for the per-pixel random generators
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Output PNG path
    #[arg(short, long, default_value = "cornell.png")]
    pub output: PathBuf,

    /// Logging level, RUST_LOG takes precedence per module
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Resolve the final render configuration from the file and flags.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }

        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::info!("Loaded render config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::parse_from(["lumen"]);
        let config = args.render_config().unwrap();

        assert_eq!(config, RenderConfig::default());
        assert_eq!(args.output, PathBuf::from("cornell.png"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "lumen", "--width", "320", "--height", "240", "-s", "8", "--max-depth", "5", "--seed",
            "99", "-j", "2",
        ]);
        let config = args.render_config().unwrap();

        assert_eq!((config.width, config.height), (320, 240));
        assert_eq!(config.samples_per_pixel, 8);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.seed, 99);
        assert_eq!(config.threads, Some(2));
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("lumen-cli-test-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "width": 100, "height": 50, "samples_per_pixel": 3 }"#).unwrap();

        let args = Args::parse_from([
            "lumen".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "--height".to_string(),
            "75".to_string(),
        ]);
        let config = args.render_config().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.width, 100);
        assert_eq!(config.height, 75);
        assert_eq!(config.samples_per_pixel, 3);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let args = Args::parse_from(["lumen", "--config", "/nonexistent/lumen.json"]);
        let err = args.render_config().unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
