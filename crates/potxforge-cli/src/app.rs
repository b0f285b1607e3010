//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use potxforge_core::migrate::document_version;
use potxforge_core::{TemplateConfig, CATALOG, CURRENT_VERSION};
use potxforge_pptx::bundle::{file_stem, BundleManifest, MANIFEST_PATH};
use potxforge_pptx::constants::CT_SLIDE_LAYOUT;
use potxforge_pptx::{Bundle, DocProps, MemoryArchive, PotxPackage};

use crate::settings::Settings;

/// Format of a configuration file written by `init`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ConfigFormat {
    /// JSON, the editor's export format
    #[default]
    Json,
    /// TOML, for hand editing
    Toml,
}

impl ConfigFormat {
    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "potxforge")]
#[command(author, version, about = "Brand themes to PowerPoint templates", long_about = None)]
struct Cli {
    /// Log debug detail to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (default: ./potxforge.toml when present)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .potx template from a configuration
    Export {
        /// Template configuration (JSON or TOML)
        config: PathBuf,

        /// Output .potx file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a distributable zip with the template, fonts and README
    Bundle {
        /// Template configuration (JSON or TOML)
        config: PathBuf,

        /// Directory holding uploaded font binaries
        #[arg(long)]
        fonts: Option<PathBuf>,

        /// Output .zip file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default configuration
    Init {
        /// Output file
        #[arg(default_value = "template.json")]
        output: PathBuf,

        /// Template name
        #[arg(long, default_value = "Untitled Template")]
        name: String,

        /// File format (default: from the extension)
        #[arg(short, long, value_enum)]
        format: Option<ConfigFormat>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Upgrade a configuration to the current schema version
    Migrate {
        /// Configuration to upgrade
        input: PathBuf,

        /// Output file (default: rewrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the slide layout catalog
    Layouts {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the parts of a generated template or bundle
    Inspect {
        /// .potx or bundle .zip
        input: PathBuf,
    },
}

/// Run the CLI application
///
/// Parses arguments, installs logging and dispatches to the command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::discover(Path::new("."))?,
    };

    match cli.command {
        Commands::Export { config, output } => {
            let path = export_command(&config, output.as_deref(), &settings)?;
            println!("Created: {}", path.display());
        }
        Commands::Bundle {
            config,
            fonts,
            output,
        } => {
            let path = bundle_command(&config, fonts.as_deref(), output.as_deref(), &settings)?;
            println!("Created: {}", path.display());
        }
        Commands::Init {
            output,
            name,
            format,
            force,
        } => {
            init_command(&output, &name, format, force)?;
            println!("Created: {}", output.display());
        }
        Commands::Migrate { input, output } => {
            let target = output.as_deref().unwrap_or(&input);
            let from = migrate_command(&input, target)?;
            if from == CURRENT_VERSION {
                println!("{} is already at schema v{}", input.display(), CURRENT_VERSION);
            } else {
                println!(
                    "Upgraded {} from schema v{} to v{}",
                    target.display(),
                    from,
                    CURRENT_VERSION
                );
            }
        }
        Commands::Layouts { json } => {
            print!("{}", layouts_command(json)?);
        }
        Commands::Inspect { input } => {
            let report = inspect_command(&input)?;
            print!("{}", report.render());
        }
    }

    Ok(())
}

/// Install the tracing subscriber on stderr.
///
/// `RUST_LOG` wins over `--verbose`. Records from the `log` facade used by
/// the libraries are bridged into tracing.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A second initialization (tests) is not an error worth reporting
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: &Path) -> Result<TemplateConfig> {
    if !path.exists() {
        anyhow::bail!("Configuration not found: {}", path.display());
    }
    TemplateConfig::from_file(path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))
}

fn package_builder(config: &TemplateConfig, settings: &Settings) -> PotxPackage {
    let author = if config.author.is_empty() {
        settings.export.author.clone().unwrap_or_default()
    } else {
        config.author.clone()
    };
    let mut builder = PotxPackage::new().with_props(DocProps::new(config.name.clone(), author));
    if let Some(application) = &settings.export.application {
        builder = builder.with_application(application.clone());
    }
    builder
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write: {}", path.display()))
}

/// Execute the export command; returns the written path
pub fn export_command(
    config_path: &Path,
    output: Option<&Path>,
    settings: &Settings,
) -> Result<PathBuf> {
    let config = load_config(config_path)?;
    let bytes = package_builder(&config, settings)
        .build(&config)
        .with_context(|| format!("Failed to generate template '{}'", config.name))?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => settings.output_path(&format!("{}.potx", file_stem(&config.name))),
    };
    write_output(&path, &bytes)?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

/// Execute the bundle command; returns the written path
pub fn bundle_command(
    config_path: &Path,
    fonts_dir: Option<&Path>,
    output: Option<&Path>,
    settings: &Settings,
) -> Result<PathBuf> {
    let config = load_config(config_path)?;
    let potx = package_builder(&config, settings)
        .build(&config)
        .with_context(|| format!("Failed to generate template '{}'", config.name))?;

    let mut bundle = Bundle::new(&config, potx);
    if let Some(dir) = fonts_dir {
        bundle = bundle
            .with_fonts_from(dir)
            .with_context(|| format!("Failed to collect fonts from {}", dir.display()))?;
    } else if config.uploaded_fonts().next().is_some() {
        tracing::warn!("Configuration has uploaded fonts but no --fonts directory was given");
    }
    let bytes = bundle.to_zip_bytes().context("Failed to write bundle")?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => settings.output_path(&format!("{}.zip", file_stem(&config.name))),
    };
    write_output(&path, &bytes)?;
    tracing::info!(
        "Wrote {} with {} font(s)",
        path.display(),
        bundle.fonts().len()
    );
    Ok(path)
}

/// Execute the init command
pub fn init_command(
    output: &Path,
    name: &str,
    format: Option<ConfigFormat>,
    force: bool,
) -> Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }
    let config = TemplateConfig::new(name);
    let content = match format.unwrap_or_else(|| ConfigFormat::from_path(output)) {
        ConfigFormat::Json => config.to_json_string()?,
        ConfigFormat::Toml => config.to_toml_string()?,
    };
    write_output(output, content.as_bytes())
}

/// Execute the migrate command; returns the version the input was at
pub fn migrate_command(input: &Path, output: &Path) -> Result<u64> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;
    let doc: Value = match ConfigFormat::from_path(input) {
        ConfigFormat::Toml => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML: {}", input.display()))?,
        ConfigFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON: {}", input.display()))?,
    };
    let from = document_version(&doc)?;
    let config = TemplateConfig::from_document(doc)
        .with_context(|| format!("Failed to upgrade: {}", input.display()))?;
    config
        .save(output)
        .with_context(|| format!("Failed to write: {}", output.display()))?;
    Ok(from)
}

/// Execute the layouts command; returns the listing
pub fn layouts_command(json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(&CATALOG[..])?;
        out.push('\n');
        return Ok(out);
    }
    let mut out = String::new();
    for (i, layout) in CATALOG.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}  {:<24} {:<30} {} placeholder(s)\n",
            i,
            layout.id,
            layout.name,
            layout.placeholders.len()
        ));
    }
    Ok(out)
}

/// What `inspect` found in a package or bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    /// Entry paths with their uncompressed sizes
    pub parts: Vec<(String, usize)>,
    /// `slideLayoutN.xml` entries
    pub layout_files: usize,
    /// Slide layout overrides in `[Content_Types].xml`
    pub declared_layouts: Option<usize>,
    /// Manifest, when the input is a bundle
    pub manifest: Option<BundleManifest>,
}

impl InspectReport {
    /// Whether declared and emitted layout counts agree
    pub fn is_consistent(&self) -> bool {
        self.declared_layouts
            .map_or(true, |declared| declared == self.layout_files)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (path, size) in &self.parts {
            out.push_str(&format!("{size:>10}  {path}\n"));
        }
        if let Some(declared) = self.declared_layouts {
            out.push_str(&format!(
                "\n{} slide layout(s), {} declared{}\n",
                self.layout_files,
                declared,
                if self.is_consistent() { "" } else { " (MISMATCH)" }
            ));
        }
        if let Some(manifest) = &self.manifest {
            out.push_str(&format!(
                "\nBundle of '{}' ({}), {} layout(s), {} font(s), generated by {} at {}\n",
                manifest.template,
                manifest.slide_size,
                manifest.layouts.len(),
                manifest.fonts.len(),
                manifest.generator,
                manifest.generated_at
            ));
        }
        out
    }
}

/// Execute the inspect command
pub fn inspect_command(input: &Path) -> Result<InspectReport> {
    let bytes =
        fs::read(input).with_context(|| format!("Failed to read: {}", input.display()))?;
    let archive = MemoryArchive::from_zip_bytes(&bytes)
        .with_context(|| format!("Not a zip package: {}", input.display()))?;

    let parts = archive
        .iter()
        .map(|(path, data)| (path.to_string(), data.len()))
        .collect();
    let layout_files = archive
        .paths()
        .filter(|p| p.starts_with("ppt/slideLayouts/slideLayout") && p.ends_with(".xml"))
        .count();
    let declared_layouts = archive
        .get_text("[Content_Types].xml")
        .map(|types| types.matches(CT_SLIDE_LAYOUT).count());
    let manifest = match archive.get_text(MANIFEST_PATH) {
        Some(json) => Some(BundleManifest::from_json(json).context("Invalid bundle manifest")?),
        None => None,
    };

    Ok(InspectReport {
        parts,
        layout_files,
        declared_layouts,
        manifest,
    })
}
