use color_eyre::Result;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::fs;
use std::{env, path::PathBuf};
use tracing::error;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
    /// How long a toast stays visible before auto-hiding, in milliseconds.
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,
    /// Simulated submission latency, in milliseconds.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Delay before focusing the first modal input after opening, so the
    /// open transition settles first.
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u64,
}

fn default_toast_ttl_ms() -> u64 {
    4000
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_focus_delay_ms() -> u64 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            config_dir: PathBuf::new(),
            toast_ttl_ms: default_toast_ttl_ms(),
            submit_delay_ms: default_submit_delay_ms(),
            focus_delay_ms: default_focus_delay_ms(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        let data_dir = get_data_dir();
        let config_dir = get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("config_dir", config_dir.to_str().unwrap_or_default())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            error!("No configuration file found. Application may not behave as expected");
        }

        let cfg: Self = builder.build()?.try_deserialize()?;

        Ok(cfg)
    }

    pub fn toast_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.config.toast_ttl_ms)
    }

    pub fn submit_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.config.submit_delay_ms)
    }

    pub fn focus_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.config.focus_delay_ms)
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "chicken105", env!("CARGO_PKG_NAME"))
}

pub fn ensure_data_and_config_dirs_exist() -> std::io::Result<()> {
    let data_dir = get_data_dir();
    let config_dir = get_config_dir();

    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_timings() {
        let cfg = Config::default();
        assert_eq!(cfg.toast_ttl(), std::time::Duration::from_millis(4000));
        assert_eq!(cfg.submit_delay(), std::time::Duration::from_millis(1500));
        assert_eq!(cfg.focus_delay(), std::time::Duration::from_millis(100));
    }
}
