use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let mut session = ctx.open_session()?;
    session.load_categories();
    super::settle(&mut session, ctx)?;

    let view_model = presenters::present_categories(session.source_id(), session.categories());
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
