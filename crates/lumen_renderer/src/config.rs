//! Render configuration and errors.

use crate::Color;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised before rendering starts.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Radiance returned when a ray doesn't hit anything
    pub background: Color,
    /// Base seed for the per-pixel random generators
    pub seed: u64,
    /// Worker threads; `None` lets rayon decide
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            samples_per_pixel: 100,
            max_depth: 50,
            background: Color::ZERO,
            seed: 0,
            threads: None,
        }
    }
}

impl RenderConfig {
    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check the configuration can produce an image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(RenderError::InvalidConfig(
                "threads must be at least 1 when set".to_string(),
            ));
        }
        if !self.background.is_finite() {
            return Err(RenderError::InvalidConfig(format!(
                "background must be finite, got {}",
                self.background
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RenderConfig = serde_json::from_str(
            r#"{ "width": 320, "samples_per_pixel": 16, "background": [0.1, 0.2, 0.3] }"#,
        )
        .unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 600);
        assert_eq!(config.samples_per_pixel, 16);
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.background, Color::new(0.1, 0.2, 0.3));
        assert_eq!(config.threads, None);
    }

    #[test]
    fn test_rejects_empty_image() {
        let config = RenderConfig {
            height: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, RenderError::InvalidConfig(_)));
        assert!(err.to_string().contains("600x0"));
    }

    #[test]
    fn test_rejects_zero_samples_and_threads() {
        let no_samples = RenderConfig {
            samples_per_pixel: 0,
            ..Default::default()
        };
        assert!(no_samples.validate().is_err());

        let no_threads = RenderConfig {
            threads: Some(0),
            ..Default::default()
        };
        assert!(no_threads.validate().is_err());
    }

    #[test]
    fn test_zero_depth_is_allowed() {
        let config = RenderConfig {
            max_depth: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
