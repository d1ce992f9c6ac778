use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::error::CatalogError;
use crate::manifest::ManifestBuilder;

mod settings;

pub fn run() -> Result<(), CatalogError> {
    let mut settings = settings::load_settings()?;

    // Positional overrides: [root_dir] [output_path]
    let mut args = env::args_os().skip(1);
    if let Some(root) = args.next() {
        settings.catalog.root_dir = PathBuf::from(root);
    }
    if let Some(output) = args.next() {
        settings.catalog.output_path = PathBuf::from(output);
    }

    let builder = ManifestBuilder::new(settings);
    let manifest = builder.build()?;
    if manifest.is_empty() {
        warn!(
            root = %builder.settings().catalog.root_dir.display(),
            "no releases with playable tracks found"
        );
    }
    builder.write(&manifest)?;

    println!(
        "Manifest generated with {} collections at {}",
        manifest.len(),
        builder.settings().catalog.output_path.display()
    );
    Ok(())
}
