use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

mod app;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use crate::app::App;

const DB_PATH_ENV: &str = "PIECEWORK_DB_PATH";
const DB_FILE_NAME: &str = "piecework.sqlite";

fn main() {
    init_tracing();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("記件"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus may already have installed a subscriber; keep whichever came first.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "piecework", "piecework")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

fn db_path_from_env(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub fn default_db_path() -> Result<PathBuf> {
    if let Some(path) = db_path_from_env(std::env::var(DB_PATH_ENV).ok()) {
        return Ok(path);
    }
    Ok(project_dirs()?.data_local_dir().join(DB_FILE_NAME))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
