mod config;
mod replay_config;
mod sos_lobby_config;

pub use config::{Config, get_config_manager};
pub use replay_config::ReplayConfig;
pub use sos_lobby_config::{ControllerConfig, SosLobbyConfig};
