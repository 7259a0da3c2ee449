pub mod categories;
pub mod dashboard;
pub mod init;
pub mod layout;
pub mod products;

use anyhow::{Result, bail};
use stockgrid_runtime::{CatalogState, InventorySession};

/// Block until the session settles and fail on a catalog error
pub(crate) fn settle(session: &mut InventorySession, ctx: &crate::context::ExecutionContext) -> Result<()> {
    let timeout = ctx.settle_timeout();
    if !session.wait_until_settled(timeout)? {
        bail!(
            "catalog '{}' did not answer within {}s",
            session.source_id(),
            timeout.as_secs()
        );
    }

    for state in [session.categories_state(), session.products_state()] {
        if let CatalogState::Error(message) = state {
            bail!("{} (run with --log-level debug for details)", message);
        }
    }
    Ok(())
}
