use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.specdoc.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpecdocConfig {
    pub input: String,
    pub output: String,
    pub target: TargetKind,
    pub keywords: KeywordConfig,
    pub limits: LimitConfig,
    pub markdown: MarkdownConfig,
    pub mermaid: MermaidConfig,
}

impl Default for SpecdocConfig {
    fn default() -> Self {
        Self {
            input: "api.yaml".to_string(),
            output: "docs/generated".to_string(),
            target: TargetKind::All,
            keywords: KeywordConfig::default(),
            limits: LimitConfig::default(),
            markdown: MarkdownConfig::default(),
            mermaid: MermaidConfig::default(),
        }
    }
}

/// Which generators to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Markdown,
    Mermaid,
    All,
}

/// Keyword extraction options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// How many ranked keywords to keep per endpoint.
    pub top_k: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self { top_k: 6 }
    }
}

/// Input bounds, so pathological uploads cannot drive unbounded work.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    pub max_upload_bytes: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Markdown summary options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Embed the flow diagram at the end of the summary.
    pub embed_diagram: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            embed_diagram: true,
        }
    }
}

/// Flow diagram options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MermaidConfig {
    pub direction: FlowDirection,
}

/// Orientation of the rendered flowchart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    #[default]
    Lr,
    Td,
}

impl FlowDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowDirection::Lr => "LR",
            FlowDirection::Td => "TD",
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".specdoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SpecdocConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: SpecdocConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# specdoc configuration
input: api.yaml
output: docs/generated
target: all           # markdown | mermaid | all

keywords:
  top_k: 6            # ranked keywords kept per endpoint

limits:
  max_upload_bytes: 5242880

markdown:
  embed_diagram: true # append the flow diagram to the summary

mermaid:
  direction: lr       # lr | td
"#
}
