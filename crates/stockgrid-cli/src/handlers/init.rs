use crate::args::OutputFormat;
use crate::context::Overrides;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use std::path::Path;
use stockgrid_runtime::Config;

pub fn handle(
    data_dir: &Path,
    overrides: &Overrides,
    force: bool,
    format: OutputFormat,
) -> Result<()> {
    let config_path = Config::path_in(data_dir);

    let (config, written) = if config_path.exists() && !force {
        tracing::info!(path = %config_path.display(), "keeping existing config");
        (Config::load_from(&config_path)?, false)
    } else {
        let mut config = Config::default();
        overrides.apply(&mut config);
        config.validate()?;
        config.save_to(&config_path)?;
        tracing::info!(path = %config_path.display(), "config written");
        (config, true)
    };

    let view_model = presenters::present_init(&config_path, written, &config);
    ConsoleRenderer::new(format == OutputFormat::Json).render(view_model)
}
