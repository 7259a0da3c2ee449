use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::ProductListViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use std::io;
use stockgrid_types::InflatedProduct;

pub fn handle(
    ctx: &ExecutionContext,
    category: &str,
    low_stock: bool,
    limit: Option<usize>,
    csv: bool,
) -> Result<()> {
    let mut session = ctx.open_session()?;
    session.select_category(category);
    super::settle(&mut session, ctx)?;

    let products = session.products();
    let rows: Vec<(&InflatedProduct, u32)> = if low_stock {
        session
            .low_stock()
            .iter()
            .filter_map(|item| {
                products
                    .iter()
                    .find(|product| product.id() == item.product.id())
                    .map(|product| (product, item.stock))
            })
            .collect()
    } else {
        products
            .iter()
            .map(|product| (product, session.stock_of(product.id())))
            .collect()
    };

    let view_model = presenters::present_products(category, products.len(), rows, low_stock, limit);

    if csv && !ctx.json_mode() {
        return write_csv(&view_model.content);
    }
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}

fn write_csv(list: &ProductListViewModel) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(["id", "title", "category", "price", "stock"])?;
    for card in &list.products {
        writer.write_record([
            card.id.to_string(),
            card.title.clone(),
            card.category.clone(),
            format!("{:.2}", card.price),
            card.stock.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
