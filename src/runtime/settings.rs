use tracing::debug;

use crate::config;
use crate::error::CatalogError;

pub fn load_settings() -> Result<config::Settings, CatalogError> {
    let settings = config::Settings::load()?;
    settings.validate().map_err(CatalogError::InvalidConfig)?;

    debug!(
        root = %settings.catalog.root_dir.display(),
        output = %settings.catalog.output_path.display(),
        base_url = %settings.catalog.base_url,
        "settings loaded"
    );
    Ok(settings)
}
