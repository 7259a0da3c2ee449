use super::args::{Cli, Commands};
use super::handlers;
use crate::context::{ExecutionContext, Overrides};
use crate::logging;
use anyhow::Result;
use stockgrid_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let overrides = Overrides {
        source: cli.source,
        catalog: cli.catalog,
        base_url: cli.base_url,
        rounds: cli.rounds,
    };
    let format = cli.format;
    let command = cli.command.unwrap_or(Commands::Dashboard);

    if matches!(command, Commands::Dashboard) {
        logging::init_file(cli.log_level, &data_dir)?;
    } else {
        logging::init_stderr(cli.log_level)?;
    }

    let context = |data_dir| ExecutionContext::new(data_dir, &overrides, format);

    match command {
        Commands::Init { force } => handlers::init::handle(&data_dir, &overrides, force, format),

        Commands::Dashboard => handlers::dashboard::handle(&context(data_dir)?),

        Commands::Categories => handlers::categories::handle(&context(data_dir)?),

        Commands::Products {
            category,
            low_stock,
            limit,
            csv,
        } => handlers::products::handle(&context(data_dir)?, &category, low_stock, limit, csv),

        Commands::Layout {
            items,
            width,
            height,
            card_width,
            card_height,
            scroll_top,
        } => handlers::layout::handle(
            &context(data_dir)?,
            handlers::layout::LayoutRequest {
                items,
                width,
                height,
                card_width,
                card_height,
                scroll_top,
            },
        ),
    }
}
