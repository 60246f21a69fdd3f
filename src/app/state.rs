use crate::engine::config::SnippetDefaults;
use crate::snippet::SnippetConfig;

/// Editable rows of the configurator panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Position,
    Theme,
    Screenshot,
    Annotations,
    ConsoleLogs,
    NetworkLogs,
    Quality,
    Delay,
    Format,
}

impl ConfigField {
    pub const ALL: [ConfigField; 9] = [
        ConfigField::Position,
        ConfigField::Theme,
        ConfigField::Screenshot,
        ConfigField::Annotations,
        ConfigField::ConsoleLogs,
        ConfigField::NetworkLogs,
        ConfigField::Quality,
        ConfigField::Delay,
        ConfigField::Format,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConfigField::Position => "Position",
            ConfigField::Theme => "Theme",
            ConfigField::Screenshot => "Screenshots",
            ConfigField::Annotations => "Annotations",
            ConfigField::ConsoleLogs => "Console logs",
            ConfigField::NetworkLogs => "Network logs",
            ConfigField::Quality => "Quality",
            ConfigField::Delay => "Capture delay",
            ConfigField::Format => "Image format",
        }
    }

    pub fn value(self, config: &SnippetConfig) -> String {
        fn on_off(flag: bool) -> String {
            let text = if flag { "on" } else { "off" };
            text.to_string()
        }

        match self {
            ConfigField::Position => config.position.to_string(),
            ConfigField::Theme => config.theme.to_string(),
            ConfigField::Screenshot => on_off(config.features.screenshot),
            ConfigField::Annotations => on_off(config.features.annotations),
            ConfigField::ConsoleLogs => on_off(config.features.console_logs),
            ConfigField::NetworkLogs => on_off(config.features.network_logs),
            ConfigField::Quality => format!("{:.1}", config.screenshot.quality),
            ConfigField::Delay => format!("{} ms", config.screenshot.delay_ms),
            ConfigField::Format => config.screenshot.format.to_string(),
        }
    }

    /// Steps the field's value forward or backward. Flags toggle either way.
    pub fn adjust(self, config: &mut SnippetConfig, forward: bool, defaults: &SnippetDefaults) {
        let features = &mut config.features;
        let shot = &mut config.screenshot;
        match self {
            ConfigField::Position => {
                config.position = if forward {
                    config.position.next()
                } else {
                    config.position.prev()
                }
            }
            ConfigField::Theme => {
                config.theme = if forward {
                    config.theme.next()
                } else {
                    config.theme.prev()
                }
            }
            ConfigField::Screenshot => features.screenshot = !features.screenshot,
            ConfigField::Annotations => features.annotations = !features.annotations,
            ConfigField::ConsoleLogs => features.console_logs = !features.console_logs,
            ConfigField::NetworkLogs => features.network_logs = !features.network_logs,
            ConfigField::Quality => {
                let step = defaults.quality_step;
                shot.adjust_quality(if forward { step } else { -step });
            }
            ConfigField::Delay => {
                let step = defaults.delay_step_ms as i64;
                shot.adjust_delay(if forward { step } else { -step });
            }
            ConfigField::Format => {
                shot.format = if forward {
                    shot.format.next()
                } else {
                    shot.format.prev()
                }
            }
        }
    }
}

/// Cursor over the configurator rows
#[derive(Debug, Clone, Default)]
pub struct ConfiguratorState {
    selected: usize,
}

impl ConfiguratorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_field(&self) -> ConfigField {
        ConfigField::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ConfigField::ALL.len();
    }

    pub fn select_prev(&mut self) {
        let len = ConfigField::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Label/value pairs for every row
    pub fn rows(&self, config: &SnippetConfig) -> Vec<(&'static str, String)> {
        ConfigField::ALL
            .iter()
            .map(|field| (field.label(), field.value(config)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippet::{ScreenshotFormat, WidgetPosition, WidgetTheme};

    #[test]
    fn test_selection_wraps() {
        let mut state = ConfiguratorState::new();
        state.select_prev();
        assert_eq!(state.selected_field(), ConfigField::Format);
        state.select_next();
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.selected_field(), ConfigField::Position);
    }

    #[test]
    fn test_adjust_position_both_ways() {
        let defaults = SnippetDefaults::default();
        let mut config = SnippetConfig::default();
        ConfigField::Position.adjust(&mut config, true, &defaults);
        assert_eq!(config.position, WidgetPosition::BottomLeft);
        ConfigField::Position.adjust(&mut config, false, &defaults);
        ConfigField::Position.adjust(&mut config, false, &defaults);
        assert_eq!(config.position, WidgetPosition::TopLeft);
    }

    #[test]
    fn test_adjust_theme_and_format() {
        let defaults = SnippetDefaults::default();
        let mut config = SnippetConfig::default();
        ConfigField::Theme.adjust(&mut config, true, &defaults);
        assert_eq!(config.theme, WidgetTheme::Light);
        ConfigField::Format.adjust(&mut config, false, &defaults);
        assert_eq!(config.screenshot.format, ScreenshotFormat::Webp);
    }

    #[test]
    fn test_flags_toggle_regardless_of_direction() {
        let defaults = SnippetDefaults::default();
        let mut config = SnippetConfig::default();
        ConfigField::ConsoleLogs.adjust(&mut config, false, &defaults);
        assert!(config.features.console_logs);
        ConfigField::ConsoleLogs.adjust(&mut config, true, &defaults);
        assert!(!config.features.console_logs);
    }

    #[test]
    fn test_quality_and_delay_use_steps() {
        let defaults = SnippetDefaults::default();
        let mut config = SnippetConfig::default();
        ConfigField::Quality.adjust(&mut config, false, &defaults);
        assert_eq!(ConfigField::Quality.value(&config), "0.7");
        ConfigField::Delay.adjust(&mut config, true, &defaults);
        assert_eq!(ConfigField::Delay.value(&config), "250 ms");
    }

    #[test]
    fn test_rows_cover_every_field() {
        let rows = ConfiguratorState::new().rows(&SnippetConfig::default());
        assert_eq!(rows.len(), ConfigField::ALL.len());
        assert_eq!(rows[0], ("Position", "bottom-right".to_string()));
        assert_eq!(rows[2], ("Screenshots", "on".to_string()));
    }
}
