mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use vidmeta_common::paths::normalize_extension;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    prepare_config(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./vidmeta.toml", "~/.config/vidmeta/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Expand `~` in a path. Paths that are not valid UTF-8 are returned as is.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}

fn prepare_config(config: &mut Config) {
    config.extensions = config
        .extensions
        .iter()
        .filter_map(|e| normalize_extension(e))
        .collect();

    for dir in config.directories.iter_mut() {
        *dir = expand_path(dir);
    }

    if let Some(ref mut output) = config.output {
        *output = expand_path(output);
    }

    if let Some(ref mut ffprobe) = config.tools.ffprobe_path {
        *ffprobe = expand_path(ffprobe);
    }
}

/// Validate configuration
///
/// Directories are not checked here; the scanner skips missing roots.
fn validate_config(config: &Config) -> Result<()> {
    if config.extensions.is_empty() {
        anyhow::bail!("`extensions` must list at least one file extension");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vidmeta.toml");
        fs::write(&path, "").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.directories.is_empty());
        assert!(config.output.is_none());
        assert!(config.extensions.contains(&"mkv".to_string()));
        assert!(config.tools.ffprobe_path.is_none());
    }

    #[test]
    fn full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vidmeta.toml");
        fs::write(
            &path,
            r#"
directories = ["/mnt/media/movies", "/mnt/media/shows"]
output = "/tmp/reports/library.csv"
extensions = [".MKV", "mp4", " "]

[tools]
ffprobe_path = "/opt/ffmpeg/bin/ffprobe"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.directories,
            vec![
                PathBuf::from("/mnt/media/movies"),
                PathBuf::from("/mnt/media/shows")
            ]
        );
        assert_eq!(config.extensions, vec!["mkv".to_string(), "mp4".to_string()]);
        assert_eq!(
            config.tools.ffprobe_path,
            Some(PathBuf::from("/opt/ffmpeg/bin/ffprobe"))
        );
        assert_eq!(config.report_path(), PathBuf::from("/tmp/reports/library.csv"));
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vidmeta.toml");
        fs::write(&path, "extensions = []\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("extensions"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vidmeta.toml");
        fs::write(&path, "directories = \"not a list\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn missing_custom_path_is_an_error() {
        assert!(load_config_or_default(Some(Path::new("/nonexistent/vidmeta.toml"))).is_err());
    }

    #[test]
    fn tilde_expansion() {
        let expanded = expand_path(Path::new("~/Videos"));
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("Videos"));

        assert_eq!(expand_path(Path::new("/abs/path")), PathBuf::from("/abs/path"));
    }

    #[test]
    fn default_report_path_is_current_dir() {
        let config = Config::default();
        assert_eq!(config.report_path(), PathBuf::from("./video_metadata.xlsx"));
    }
}
