#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub client: crate::service::client::Configuration,
    #[serde(default)]
    pub flash: crate::controller::flash::Configuration,
}

impl Configuration {
    /// Reads the optional toml file at `path`, then the `MAILMERGE__*` environment variables.
    pub fn from_path(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("MAILMERGE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::Configuration;
    use std::io::Write;

    #[test]
    fn should_use_defaults_without_file() {
        let config = Configuration::from_path("/this/path/does/not/exist.toml").unwrap();
        assert_eq!(config.client.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.client.timeout, 5000);
        assert_eq!(config.flash.dismiss_delay, 5000);
        assert_eq!(config.flash.fade_duration, 300);
    }

    #[test]
    fn should_read_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[client]\nbase_url = \"http://mailer.local:8080\"\n\n[flash]\ndismiss_delay = 2000"
        )
        .unwrap();
        let config = Configuration::from_path(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.client.base_url, "http://mailer.local:8080");
        assert_eq!(config.client.timeout, 5000);
        assert_eq!(config.flash.dismiss_delay, 2000);
        assert_eq!(config.flash.fade_duration, 300);
    }
}
