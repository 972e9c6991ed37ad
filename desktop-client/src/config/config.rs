use common::config::{ConfigManager, FileContentConfigProvider, Validate};
use serde::{Deserialize, Serialize};

use super::{ReplayConfig, SosLobbyConfig};

const CONFIG_FILE_NAME: &str = "sos_game_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<Config, FileContentConfigProvider> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub sos: SosLobbyConfig,
    pub replays: ReplayConfig,
    pub last_replay_path: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.sos.validate()?;
        self.replays.validate()?;
        Ok(())
    }
}
