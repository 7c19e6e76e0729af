use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address the HTTP service binds to (default: 127.0.0.1:4117)
    listen_addr: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    /// Where the mentra database will be located (default: ~/.local/share/mentra)
    data_dir: Option<String>,

    /// Where uploaded proof documents are written (default: <data_dir>/uploads)
    upload_dir: Option<String>,
}

impl ServerConfig {
    /// Returns the configured listen address or the default one.
    pub fn get_listen_addr(&self) -> String {
        self.listen_addr
            .clone()
            .unwrap_or_else(|| "127.0.0.1:4117".to_owned())
    }
}

impl StorageConfig {
    /// Gets the database directory, tilde-expanded.
    pub fn get_data_dir(&self) -> PathBuf {
        let path_str = self.data_dir.as_deref().unwrap_or("~/.local/share/mentra");
        let expanded_path = shellexpand::tilde(path_str);
        PathBuf::from(expanded_path.as_ref())
    }

    /// Gets the upload directory; defaults to `uploads/` under the data directory.
    pub fn get_upload_dir(&self) -> PathBuf {
        match &self.upload_dir {
            Some(path_str) => {
                let expanded_path = shellexpand::tilde(path_str);
                PathBuf::from(expanded_path.as_ref())
            }
            None => self.get_data_dir().join("uploads"),
        }
    }
}
