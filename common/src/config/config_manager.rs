use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfig, TConfigContentProvider = FileContentConfigProvider>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigContentProvider: ConfigContentProvider,
{
    config_content_provider: TConfigContentProvider,
    config_serializer: YamlConfigSerializer,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<TConfig, FileContentConfigProvider>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TConfig, TConfigContentProvider> ConfigManager<TConfig, TConfigContentProvider>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigContentProvider: ConfigContentProvider,
{
    pub fn new(config_content_provider: TConfigContentProvider) -> Self {
        Self {
            config_content_provider,
            config_serializer: YamlConfigSerializer::new(),
            config: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(content) = self.config_content_provider.get_config_content()? {
            let config: TConfig = self.config_serializer.deserialize(&content)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}
