//! Config struct definition and default implementation.

use serde::Deserialize;

/// Default template path, relative to the working directory.
pub const DEFAULT_TEMPLATE_FILE: &str = ".env.template";

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = ".env";

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".envgen.yaml";

/// Configuration for envgen.
///
/// This struct represents the contents of `.envgen.yaml`. Every field is
/// optional; command-line flags take precedence over values read here.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the template file (default: ".env.template").
    #[serde(default = "default_template")]
    pub template: String,

    /// Path to the generated file (default: ".env").
    #[serde(default = "default_output")]
    pub output: String,

    /// AWS region. When unset the AWS default chain applies (`AWS_REGION`,
    /// profile, instance metadata).
    #[serde(default)]
    pub region: Option<String>,

    /// Parameter path prefixes fetched in bulk before processing.
    #[serde(default)]
    pub prefetch: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            output: default_output(),
            region: None,
            prefetch: Vec::new(),
        }
    }
}

fn default_template() -> String {
    DEFAULT_TEMPLATE_FILE.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}
