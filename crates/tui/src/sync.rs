//! Fetch-and-rerender cycles for the two read endpoints.
//!
//! A failed read never leaves the previous content on screen: the affected
//! region switches to its failed state and the error is handed back.

use crate::{
    client::{Client, ClientError},
    view::{self, Container, ExpenseCard, Page, StatsPanel},
};

pub async fn load_expenses(
    client: &Client,
    container: &mut Container<ExpenseCard>,
) -> Result<(), ClientError> {
    match client.get_expenses().await {
        Ok(expenses) => {
            view::render_expenses(&expenses, container);
            tracing::debug!("rendered {} expenses", expenses.len());
            Ok(())
        }
        Err(err) => {
            tracing::warn!("failed to load expenses: {err}");
            view::render_expenses_failure(&err.to_string(), container);
            Err(err)
        }
    }
}

pub async fn load_statistics(client: &Client, panel: &mut StatsPanel) -> Result<(), ClientError> {
    match client.get_statistics().await {
        Ok(stats) => {
            view::render_statistics(&stats, panel);
            tracing::debug!("rendered statistics for {} categories", stats.categories.len());
            Ok(())
        }
        Err(err) => {
            tracing::warn!("failed to load statistics: {err}");
            view::render_statistics_failure(&err.to_string(), panel);
            Err(err)
        }
    }
}

/// Runs the expense list sync, then the statistics sync.
///
/// Errors are already rendered and logged by each sync, so they are not
/// propagated further.
pub async fn refresh(client: &Client, page: &mut Page) {
    let _ = load_expenses(client, &mut page.expenses_container).await;
    let _ = load_statistics(client, &mut page.stats).await;
}
