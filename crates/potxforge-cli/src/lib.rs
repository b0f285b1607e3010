//! potxforge CLI - Command-line interface library
//!
//! - Export: configuration to `.potx`
//! - Bundle: template, uploaded fonts, manifest and README in one zip
//! - Init / Migrate: write and upgrade configurations
//! - Layouts / Inspect: list the catalog, look inside packages
//!
//! # Binary Usage
//!
//! ```bash
//! potxforge init brand.toml --name "Acme Brand"
//! potxforge export brand.toml --output acme.potx
//! potxforge bundle brand.toml --fonts ./fonts
//! potxforge inspect acme.potx
//! ```

pub mod app;
pub mod settings;

// Re-export main entry point and types
pub use app::{
    bundle_command, export_command, init_command, inspect_command, layouts_command,
    migrate_command,
};
pub use app::{init_logging, run_cli, ConfigFormat, InspectReport};
pub use settings::Settings;
