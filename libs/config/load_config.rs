use super::Config;
use std::path::Path;

pub fn load(config_path: &str) -> eyre::Result<Config> {
    let path = Path::new(config_path);
    if !path.exists() {
        return Err(eyre::eyre!("Failed to read config file: {config_path}"));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("Failed to read config file '{config_path}': {e}"))?;
    let config: Config = toml::from_str(&content)
        .map_err(|e| eyre::eyre!("Invalid config file '{config_path}': {e}"))?;

    Ok(config)
}

pub fn save(config_path: &str, config: &Config) -> eyre::Result<()> {
    let toml_string =
        toml::to_string(config).map_err(|e| eyre::eyre!("Failed to serialize config: {e}"))?;

    std::fs::write(config_path, toml_string)
        .map_err(|e| eyre::eyre!("Failed to write config file '{config_path}': {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_fails_when_file_is_missing() {
        let result = load("/nonexistent/mentra/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn load_rejects_malformed_toml() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nlisten_addr = ")?;

        assert!(load(path.to_str().unwrap()).is_err());
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        let config: Config = toml::from_str(
            r#"
            [server]
            listen_addr = "127.0.0.1:9000"
            "#,
        )?;
        save(path_str, &config)?;

        let loaded = load(path_str)?;
        assert_eq!(loaded.server.get_listen_addr(), "127.0.0.1:9000");
        Ok(())
    }
}
