pub mod config;
pub mod decode;
pub mod digest;
pub mod error;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod search;
pub mod snippet;
pub mod store;
pub mod text;

/// A rendered documentation artifact with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for documentation generators that produce files from a normalized spec.
pub trait DocGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        spec: &model::ApiSpec,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
