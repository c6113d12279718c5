use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub oembed: OembedConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Summarization backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL every `/summarize/*` endpoint hangs off.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout for `/summarize/text` in seconds (default: 120).
    #[serde(default = "default_text_timeout")]
    pub text_timeout_seconds: u64,
    /// Timeout for `/summarize/pdf` in seconds (default: 180).
    #[serde(default = "default_media_timeout")]
    pub pdf_timeout_seconds: u64,
    /// Timeout for `/summarize/youtube` in seconds (default: 180).
    #[serde(default = "default_media_timeout")]
    pub youtube_timeout_seconds: u64,
    /// TCP connect timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Ask the backend for per-interval mood analysis on YouTube requests.
    #[serde(default)]
    pub analyze_mood: bool,
}

/// oEmbed title lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OembedConfig {
    #[serde(default = "default_oembed_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_oembed_timeout")]
    pub timeout_seconds: u64,
}

/// Where downloaded summaries are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Target directory. Falls back to the platform download dir, then `.`.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_text_timeout() -> u64 {
    120
}

fn default_media_timeout() -> u64 {
    180
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_oembed_endpoint() -> String {
    "https://www.youtube.com/oembed".to_string()
}

fn default_oembed_timeout() -> u64 {
    10
}

fn default_file_name() -> String {
    "summary.txt".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            text_timeout_seconds: default_text_timeout(),
            pdf_timeout_seconds: default_media_timeout(),
            youtube_timeout_seconds: default_media_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            analyze_mood: false,
        }
    }
}

impl BackendConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for OembedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_oembed_endpoint(),
            timeout_seconds: default_oembed_timeout(),
        }
    }
}

impl OembedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            file_name: default_file_name(),
        }
    }
}

impl OutputConfig {
    /// Resolve the directory summaries are downloaded into.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
