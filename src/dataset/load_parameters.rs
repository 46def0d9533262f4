// src/dataset/load_parameters.rs

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::config::{ConfigError, JumpParameters};

/// 読み込める設定ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.yaml`/`.yml` は YAML、それ以外は JSON として読む
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

/// 設定ファイルからジャンプのパラメータを読み込む
pub fn load_jump_parameters(path: &Path) -> Result<JumpParameters, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let format = ConfigFormat::from_path(path);
    debug!(path = %path.display(), ?format, "reading jump configuration");

    let params: JumpParameters = match format {
        ConfigFormat::Json => serde_json::from_reader(reader).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        ConfigFormat::Yaml => serde_yaml::from_reader(reader).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
    };
    Ok(params)
}
