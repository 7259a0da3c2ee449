use std::path::Path;
use stockgrid_runtime::Config;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, InitResultViewModel, StatusBadge,
};

pub fn present_init(
    config_path: &Path,
    written: bool,
    config: &Config,
) -> CommandResultViewModel<InitResultViewModel> {
    let content = InitResultViewModel {
        config_path: config_path.to_path_buf(),
        written,
        source: config.catalog.source.to_string(),
        inflation_rounds: config.inventory.inflation_rounds,
    };

    if written {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success("Configuration saved"))
            .with_suggestion(Guidance::new("Open the dashboard").with_command("stockgrid"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("Configuration already exists"))
            .with_suggestion(
                Guidance::new("Overwrite it with the current flags")
                    .with_command("stockgrid init --force"),
            )
    }
}
