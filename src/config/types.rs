use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the evaluation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// URL the expression is POSTed to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Presentation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme; absent means dark.
    #[serde(default)]
    pub theme: Theme,
}

/// Color theme preference, persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme; used by the toggle command.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn default_base_url() -> String {
    "https://api.mathjs.org/v4/".to_string()
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_dark_theme_and_mathjs() {
        let config = Config::default();
        assert_eq!(config.ui.theme, Theme::Dark);
        assert_eq!(config.evaluator.base_url, "https://api.mathjs.org/v4/");
    }

    #[test]
    fn theme_toggles_both_ways() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn theme_serializes_lowercase() {
        let config = Config {
            ui: UiConfig { theme: Theme::Light },
            ..Config::default()
        };
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("theme = \"light\""));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.theme, Theme::Dark);
        assert!(!config.evaluator.base_url.is_empty());
    }
}
