use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ListSettings {
    pub inventory: PageSizeSettings,
    pub items: PageSizeSettings,
    /// Вложенные таблицы карточки товара (движения, счета)
    pub detail: PageSizeSettings,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeSettings {
    pub page_size: usize,
}

/// Default configuration embedded in the binary
pub const DEFAULT_SETTINGS: &str = r#"
[inventory]
page_size = 10

[items]
page_size = 10

[detail]
page_size = 5
"#;

impl ListSettings {
    /// Parse settings from TOML. Zero page sizes are rejected.
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let settings: ListSettings = toml::from_str(contents)?;
        for (section, value) in [
            ("inventory", settings.inventory),
            ("items", settings.items),
            ("detail", settings.detail),
        ] {
            if value.page_size == 0 {
                anyhow::bail!("[{}] page_size must be greater than zero", section);
            }
        }
        Ok(settings)
    }

    /// Load settings from an optional override
    ///
    /// Without a valid override the embedded `DEFAULT_SETTINGS` are parsed;
    /// `Default` is used only if even those fail.
    pub fn load(override_toml: Option<&str>) -> Self {
        Self::load_with(override_toml, DEFAULT_SETTINGS)
    }

    fn load_with(override_toml: Option<&str>, embedded: &str) -> Self {
        if let Some(contents) = override_toml {
            match Self::from_toml(contents) {
                Ok(settings) => {
                    log::info!("Using list settings override");
                    return settings;
                }
                Err(e) => log::warn!("Invalid list settings override, using defaults: {}", e),
            }
        }

        // Fall back to default config
        log::debug!("Using default embedded list settings");
        match Self::from_toml(embedded) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Embedded list settings are invalid: {}", e);
                Self::default()
            }
        }
    }
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            inventory: PageSizeSettings { page_size: 10 },
            items: PageSizeSettings { page_size: 10 },
            detail: PageSizeSettings { page_size: 5 },
        }
    }
}
