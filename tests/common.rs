#![allow(dead_code)]

use figment::{
    providers::{Format, Yaml},
    Figment,
};
use playground_client::api::create_api;
use playground_client::config::{from_figment, ConfigV1};
use playground_client::shell::{Renderer, Shell};

const TEST_CONFIG: &str = r#"
version: "1.0.0"
api:
  base_url: "http://replaced-by-test:0"
logging:
  level: "debug"
  format: "json"
"#;

/// Parses the test config and points it at the given mock server.
pub fn load_test_config(base_url: &str) -> ConfigV1 {
    let mut config = from_figment(Figment::new().merge(Yaml::string(TEST_CONFIG)))
        .expect("Failed to parse test config YAML");
    config.api.base_url = base_url.to_string();
    config
}

pub fn build_shell(base_url: &str) -> Shell {
    let config = load_test_config(base_url);
    Shell::new(create_api(&config.api), Renderer::new(false))
}

/// Feeds `script` to the shell line by line and returns everything it printed.
pub async fn run_script(shell: &mut Shell, script: &str) -> String {
    let mut out = Vec::new();
    shell
        .run(script.as_bytes(), &mut out)
        .await
        .expect("shell I/O failed");
    String::from_utf8(out).expect("shell printed invalid UTF-8")
}
