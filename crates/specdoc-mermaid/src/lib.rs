//! Mermaid flow diagram synthesis over the normalized spec.

mod flow;

pub use flow::render_flow;

use specdoc_core::config::MermaidConfig;
use specdoc_core::model::ApiSpec;
use specdoc_core::{DocGenerator, GeneratedFile};

/// Mermaid flow diagram generator.
pub struct MermaidGenerator;

impl DocGenerator for MermaidGenerator {
    type Config = MermaidConfig;
    type Error = std::convert::Infallible;

    fn generate(
        &self,
        spec: &ApiSpec,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error> {
        Ok(vec![GeneratedFile {
            path: "flow.mmd".to_string(),
            content: flow::render_flow(spec, config.direction),
        }])
    }
}
