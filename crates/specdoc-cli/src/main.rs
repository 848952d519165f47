use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use specdoc_core::config::{self, CONFIG_FILE_NAME, SpecdocConfig, TargetKind};
use specdoc_core::model::ApiSpec;
use specdoc_core::{DocGenerator, GeneratedFile, decode, digest, normalize, search};
use specdoc_markdown::MarkdownGenerator;
use specdoc_mermaid::MermaidGenerator;

#[derive(Parser)]
#[command(name = "specdoc", about = "API description documentation generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation artifacts from an API description
    Generate {
        /// Path to the spec file (OpenAPI, Postman, or endpoints schema; YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the normalized form of an API description
    Inspect {
        /// Path to the spec file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Search a spec for endpoints matching a keyword
    Search {
        /// Path to the spec file
        #[arg(short, long)]
        input: PathBuf,

        /// Keyword matched against paths, verbs, and operation details
        keyword: String,
    },

    /// Print the per-endpoint summary and keyword digest
    Digest {
        /// Path to the spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new specdoc configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input } => cmd_generate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Search { input, keyword } => cmd_search(input, &keyword),

        Commands::Digest { input } => cmd_digest(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "specdoc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<SpecdocConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Read and normalize a spec file in any supported format.
fn load_spec(path: &Path, cfg: &SpecdocConfig) -> Result<ApiSpec> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let document = decode::decode_document(&bytes, cfg.limits.max_upload_bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    Ok(normalize::normalize(&document))
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(input: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let spec = load_spec(&input, &cfg)?;

    let mut files = Vec::new();
    if matches!(cfg.target, TargetKind::Markdown | TargetKind::All) {
        files.extend(MarkdownGenerator.generate(&spec, &cfg.markdown)?);
    }
    if matches!(cfg.target, TargetKind::Mermaid | TargetKind::All) {
        files.extend(MermaidGenerator.generate(&spec, &cfg.mermaid)?);
    }

    let output_dir = PathBuf::from(&cfg.output);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    write_files(&output_dir, &files)?;

    eprintln!("Generated {} files in {}", files.len(), output_dir.display());
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let spec = load_spec(&input, &cfg)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&spec)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_search(input: PathBuf, keyword: &str) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let spec = load_spec(&input, &cfg)?;

    let hits = search::search(&spec, keyword)?;
    if hits.is_empty() {
        eprintln!("No matches for '{keyword}'");
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

fn cmd_digest(input: PathBuf) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let spec = load_spec(&input, &cfg)?;

    let digest = digest::build_digest(&spec, cfg.keywords.top_k);
    println!("{}", serde_json::to_string_pretty(&digest)?);
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
