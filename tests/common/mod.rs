//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use std::path::PathBuf;
use summarizer::api::SummaryClient;
use summarizer::config::{BackendConfig, OembedConfig};
use summarizer::youtube::OembedClient;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL nothing is listening on.
pub fn dead_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Write `content` as `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write a file of `len` bytes starting with a PDF header.
pub fn temp_pdf(dir: &TempDir, name: &str, len: usize) -> PathBuf {
    let path = dir.path().join(name);
    let mut data = b"%PDF-1.4\n".to_vec();
    data.resize(len.max(data.len()), b'x');
    std::fs::write(&path, data).expect("Failed to write pdf");
    path
}

/// Client with short timeouts pointed at `base_url`.
pub fn client(base_url: &str) -> SummaryClient {
    SummaryClient::new(BackendConfig {
        base_url: base_url.to_string(),
        text_timeout_seconds: 5,
        pdf_timeout_seconds: 5,
        youtube_timeout_seconds: 5,
        connect_timeout_seconds: 2,
        analyze_mood: false,
    })
    .expect("Failed to build client")
}

pub fn oembed(endpoint: &str) -> OembedClient {
    OembedClient::new(&OembedConfig {
        endpoint: endpoint.to_string(),
        timeout_seconds: 2,
    })
    .expect("Failed to build oEmbed client")
}
