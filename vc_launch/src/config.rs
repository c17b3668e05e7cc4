//! Fixed file paths and synthesis text baked into every launch.
//!
//! The defaults match the AISHELL-3 FastSpeech2 + Parallel WaveGAN layout.
//! A JSON overrides file may replace any subset of them; absent fields keep
//! their default values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Flag values that do not come from the positional parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SynthesisDefaults {
    /// Acoustic model feature statistics
    pub fastspeech2_stat: String,

    /// Vocoder configuration file
    pub pwg_config: String,

    /// Vocoder checkpoint
    pub pwg_ckpt: String,

    /// Vocoder feature statistics
    pub pwg_stat: String,

    /// Text synthesized in every cloned voice
    pub text: String,

    /// Phone-to-id mapping file
    pub phones_dict: String,
}

impl Default for SynthesisDefaults {
    fn default() -> Self {
        Self {
            fastspeech2_stat: "dump/train/speech_stats.npy".to_string(),
            pwg_config: "pwg_aishell3_ckpt_0.5/default.yaml".to_string(),
            pwg_ckpt: "pwg_aishell3_ckpt_0.5/snapshot_iter_1000000.pdz".to_string(),
            pwg_stat: "pwg_aishell3_ckpt_0.5/feats_stats.npy".to_string(),
            text: "凯莫瑞安联合体的经济崩溃迫在眉睫".to_string(),
            phones_dict: "dump/phone_id_map.txt".to_string(),
        }
    }
}

impl SynthesisDefaults {
    /// Load overrides from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read defaults file: {:?}", path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse defaults file: {:?}", path))
    }
}
