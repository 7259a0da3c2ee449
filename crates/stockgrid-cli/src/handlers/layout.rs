use crate::context::ExecutionContext;
use crate::presentation::presenters::{self, LayoutFacts};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use stockgrid_engine::{cells_in_window, compute_geometry, max_scroll, overscan, visible_window};
use terminal_size::{Height, Width, terminal_size};

const FALLBACK_SIZE: (f64, f64) = (120.0, 40.0);

pub struct LayoutRequest {
    pub items: usize,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub card_width: Option<f64>,
    pub card_height: Option<f64>,
    pub scroll_top: f64,
}

fn terminal_dimensions() -> (f64, f64) {
    match terminal_size() {
        Some((Width(w), Height(h))) => (f64::from(w), f64::from(h)),
        None => FALLBACK_SIZE,
    }
}

pub fn handle(ctx: &ExecutionContext, request: LayoutRequest) -> Result<()> {
    let grid = &ctx.config().grid;
    let (term_width, term_height) = terminal_dimensions();
    let width = request.width.unwrap_or(term_width);
    let height = request.height.unwrap_or(term_height);
    let card_width = request.card_width.unwrap_or(grid.card_width);
    let card_height = request.card_height.unwrap_or(grid.card_height);

    let geometry = compute_geometry(width, height, request.items, card_width, card_height)?;
    let visible = visible_window(request.scroll_top, height, &geometry);
    let rendered = visible.map(|window| overscan(window, grid.overscan_rows, &geometry));
    let rendered_cells = rendered
        .map(|window| cells_in_window(window, &geometry).count())
        .unwrap_or(0);

    tracing::debug!(
        columns = geometry.column_count,
        rows = geometry.row_count,
        rendered_cells,
        "layout computed"
    );

    let view_model = presenters::present_layout(LayoutFacts {
        viewport_width: width,
        viewport_height: height,
        scroll_top: request.scroll_top,
        card_width,
        card_height,
        geometry,
        visible,
        rendered,
        max_scroll: max_scroll(height, &geometry),
        rendered_cells,
    });
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
