use crate::engine::{Strategy, DEFAULT_UNREACHABLE};
use crate::report::{RenderOptions, DEFAULT_SEPARATOR};
use crate::tokenize::DelimiterSet;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Extra field delimiters. Whitespace always separates fields.
    #[serde(default = "default_delimiters")]
    pub delimiters: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_unreachable")]
    pub unreachable: String,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            unreachable: default_unreachable(),
            color: true,
        }
    }
}

fn default_delimiters() -> String { ":".to_string() }
fn default_separator() -> String { DEFAULT_SEPARATOR.to_string() }
fn default_unreachable() -> String { DEFAULT_UNREACHABLE.to_string() }
const fn default_true() -> bool { true }

/// On-disk layout of `shortpath.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShortpathToml {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub delimiters: DelimiterSet,
    pub strategy: Strategy,
    pub render: RenderOptions,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        ShortpathToml::default().into()
    }
}

impl From<ShortpathToml> for Config {
    fn from(toml: ShortpathToml) -> Self {
        Self {
            delimiters: DelimiterSet::with_chars(&toml.input.delimiters),
            strategy: toml.engine.strategy,
            render: RenderOptions {
                separator: toml.output.separator,
                unreachable: toml.output.unreachable,
            },
            color: toml.output.color,
        }
    }
}
