//! CLI command implementations.

pub mod analyze;
pub mod types;

use std::path::{Path, PathBuf};

use tablescope::{ColorPolicy, EngineConfig};

/// Configuration sources shared by the commands. Flags override the file.
#[derive(Debug, Default)]
pub struct ConfigArgs {
    pub config: Option<PathBuf>,
    pub confidence: Option<f64>,
    pub max_sample: Option<usize>,
    pub seed: Option<u64>,
}

impl ConfigArgs {
    pub fn resolve(&self) -> Result<EngineConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
                serde_json::from_str(&text)
                    .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?
            }
            None => EngineConfig::default(),
        };

        if let Some(confidence) = self.confidence {
            config.inference.confidence_threshold = confidence;
        }
        if let Some(max_sample) = self.max_sample {
            config.inference.max_sample = max_sample;
            config.inference.min_sample = config.inference.min_sample.min(max_sample);
        }
        if let Some(seed) = self.seed {
            config.recommender.color_policy = ColorPolicy::Seeded { seed };
        }

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}

/// Read an upload and return its bytes with the filename used for format detection.
pub fn read_upload(path: &Path) -> Result<(Vec<u8>, String), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok((bytes, filename))
}
