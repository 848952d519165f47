//! Markdown summary rendering.

pub mod emitters;

use minijinja::{Environment, context};
use thiserror::Error;

use specdoc_core::config::{FlowDirection, MarkdownConfig};
use specdoc_core::model::ApiSpec;
use specdoc_core::text;
use specdoc_core::{DocGenerator, GeneratedFile};

/// Errors produced while rendering the summary.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template render failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Render the full Markdown summary for a spec.
pub fn render_summary(spec: &ApiSpec, embed_diagram: bool) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("summary.md.j2", include_str!("../templates/summary.md.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("summary.md.j2").unwrap();

    let overview = text::summarize(&text::collect_descriptions(spec));
    let diagram =
        embed_diagram.then(|| specdoc_mermaid::render_flow(spec, FlowDirection::default()));

    let rendered = tmpl.render(context! {
        title => spec.info.title(),
        overview => overview,
        endpoints => emitters::endpoints::emit_endpoints_table(spec),
        parameters => emitters::parameters::emit_parameters_table(spec),
        auth => emitters::auth::emit_auth_section(spec),
        diagram => diagram,
    })?;
    Ok(rendered)
}

/// Markdown summary generator.
pub struct MarkdownGenerator;

impl DocGenerator for MarkdownGenerator {
    type Config = MarkdownConfig;
    type Error = RenderError;

    fn generate(
        &self,
        spec: &ApiSpec,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error> {
        let content = render_summary(spec, config.embed_diagram)?;
        Ok(vec![GeneratedFile {
            path: "summary.md".to_string(),
            content,
        }])
    }
}
