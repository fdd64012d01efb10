use crate::theme::ThemeVariant;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;

const DEFAULT_SERVER_URL: &str = "localhost:8080";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemeVariant,
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // This will create a default config if it doesn't exist
        let config_path = "config.toml";
        let figment = Figment::new().merge(Toml::file(config_path));

        match figment.extract() {
            Ok(settings) => Ok(settings),
            Err(_) => {
                let default_settings = Settings::default();
                default_settings.save().unwrap_or_default();
                Ok(default_settings)
            }
        }
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        let toml_string =
            toml::to_string_pretty(self).expect("Failed to serialize settings to TOML");
        fs::write("config.toml", toml_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, "localhost:8080");
        assert_eq!(settings.theme, ThemeVariant::EverforestDark);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings {
            theme: ThemeVariant::EverforestLight,
            server_url: "https://api.example.com".to_string(),
        };
        let encoded = toml::to_string_pretty(&settings).unwrap();
        let decoded: Settings = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded.server_url, settings.server_url);
        assert_eq!(decoded.theme, settings.theme);
    }
}
