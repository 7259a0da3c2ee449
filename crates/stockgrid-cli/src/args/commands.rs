use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive inventory dashboard (default)")]
    Dashboard,

    #[command(about = "Write config.toml into the data directory")]
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    #[command(about = "List catalog categories in catalog order")]
    Categories,

    #[command(about = "List the inflated products of a category with their simulated stock")]
    Products {
        category: String,

        /// Only products below the low-stock threshold
        #[arg(long)]
        low_stock: bool,

        #[arg(long)]
        limit: Option<usize>,

        /// Emit CSV instead of a table (ignored with --format json)
        #[arg(long)]
        csv: bool,
    },

    #[command(about = "Compute the grid layout for a viewport without fetching anything")]
    Layout {
        /// Number of cards in the grid
        #[arg(long)]
        items: usize,

        /// Viewport width (defaults to the terminal width)
        #[arg(long)]
        width: Option<f64>,

        /// Viewport height (defaults to the terminal height)
        #[arg(long)]
        height: Option<f64>,

        #[arg(long)]
        card_width: Option<f64>,

        #[arg(long)]
        card_height: Option<f64>,

        #[arg(long, default_value_t = 0.0)]
        scroll_top: f64,
    },
}
