use std::path::Path;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::api::ApiConfig;
use super::logging::LoggingConfig;

/// Environment variables with this prefix override file settings,
/// nested keys separated by `__` (e.g. `PLAYGROUND_API__BASE_URL`).
pub const ENV_PREFIX: &str = "PLAYGROUND_";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: where the backend lives and how we log.
#[derive(Deserialize, Serialize, Debug, Clone, Default, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Builds the layered figment: defaults, then the YAML file, then the environment.
/// A missing file is not an error, the defaults simply stay in place.
pub fn layered_figment(path: &Path) -> Figment {
    Figment::from(Serialized::defaults(Config::ConfigV1(ConfigV1::default())))
        .merge(Yaml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load config from the YAML file at `path`.
pub fn load_config(path: &Path) -> Result<ConfigV1, figment::Error> {
    from_figment(layered_figment(path))
}

/// Extracts and unwraps the versioned config from an already assembled figment.
pub fn from_figment(layers: Figment) -> Result<ConfigV1, figment::Error> {
    match layers.extract::<Config>()? {
        Config::ConfigV1(c) => Ok(c),
    }
    // handle configuration migration between versions here when necessary
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() -> Result<(), serde_json::Error> {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CONFIG: &str = r#"
version: "1.0.0"
api:
  base_url: "http://playground.test:8080"
logging:
  level: "debug"
  format: "json"
"#;

    #[test]
    fn parses_versioned_yaml() {
        let config = from_figment(Figment::new().merge(Yaml::string(TEST_CONFIG)))
            .expect("Failed to parse test config YAML");
        assert_eq!(config.api.base_url, "http://playground.test:8080");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.service_name, "playground-client");
    }

    #[test]
    fn rejects_unknown_version() {
        let yaml = "version: \"9.9.9\"\napi:\n  base_url: http://x\n";
        let result = from_figment(Figment::new().merge(Yaml::string(yaml)));
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = load_config(Path::new("absent.yaml"))?;
            assert_eq!(config.api.base_url, "http://localhost:3000");
            assert_eq!(config.logging.level, "warn");
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults_partially() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("partial.yaml", "api:\n  base_url: \"http://other:1234\"\n")?;

            let config = load_config(Path::new("partial.yaml"))?;
            assert_eq!(config.api.base_url, "http://other:1234");
            assert_eq!(config.logging.format, "console");
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                "version: \"1.0.0\"\napi:\n  base_url: \"http://from-file:1\"\n",
            )?;
            jail.set_env("PLAYGROUND_API__BASE_URL", "http://from-env:2");
            jail.set_env("PLAYGROUND_LOGGING__LEVEL", "debug");

            let config = load_config(Path::new("config.yaml"))?;
            assert_eq!(config.api.base_url, "http://from-env:2");
            assert_eq!(config.logging.level, "debug");
            Ok(())
        });
    }
}
