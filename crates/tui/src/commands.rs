//! User-triggered commands against the expense collection.
//!
//! Every UI event that talks to the backend ends up in [`dispatch`]. A
//! successful write is followed by a full refresh (expense list first, then
//! statistics); a failed one leaves the page as it was so the user can retry.

use api_types::expense::ExpenseNew;

use crate::{
    client::Client,
    sync,
    view::{ExpenseForm, Page},
};

pub const VALIDATION_ALERT: &str = "Please fill in Amount, Category, and Date.";
pub const ADD_FAILED_ALERT: &str = "Failed to add expense.";
pub const DELETE_FAILED_ALERT: &str = "Failed to delete expense.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this expense?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Granted,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Submit the add form.
    AddExpense,
    /// Delete one expense, once the user answered the confirmation prompt.
    DeleteExpense { id: i64, confirmation: Confirmation },
    /// Re-run both syncs without writing anything.
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and the page was refreshed.
    Synced,
    /// Nothing was sent, e.g. a declined confirmation.
    Cancelled,
    /// Blocking message for the user. The page is unchanged.
    Alert(&'static str),
}

pub async fn dispatch(command: Command, client: &Client, page: &mut Page) -> Outcome {
    match command {
        Command::AddExpense => add_expense(client, page).await,
        Command::DeleteExpense { id, confirmation } => {
            delete_expense(client, page, id, confirmation).await
        }
        Command::Refresh => {
            sync::refresh(client, page).await;
            Outcome::Synced
        }
    }
}

pub async fn add_expense(client: &Client, page: &mut Page) -> Outcome {
    let Some(payload) = validated_payload(&page.form) else {
        tracing::debug!("add expense rejected: missing required field");
        return Outcome::Alert(VALIDATION_ALERT);
    };

    if let Err(err) = client.add_expense(&payload).await {
        tracing::warn!("failed to add expense: {err}");
        return Outcome::Alert(ADD_FAILED_ALERT);
    }
    tracing::info!(
        "added expense: {} in {} on {}",
        payload.amount,
        payload.category,
        payload.date
    );

    // Category and date stay filled in for quick repeated entries.
    page.form.amount.clear();
    page.form.description.clear();

    sync::refresh(client, page).await;
    Outcome::Synced
}

pub async fn delete_expense(
    client: &Client,
    page: &mut Page,
    id: i64,
    confirmation: Confirmation,
) -> Outcome {
    if confirmation == Confirmation::Declined {
        tracing::debug!("delete of expense {id} declined");
        return Outcome::Cancelled;
    }

    if let Err(err) = client.delete_expense(id).await {
        tracing::warn!("failed to delete expense {id}: {err}");
        return Outcome::Alert(DELETE_FAILED_ALERT);
    }
    tracing::info!("deleted expense {id}");

    sync::refresh(client, page).await;
    Outcome::Synced
}

fn validated_payload(form: &ExpenseForm) -> Option<ExpenseNew> {
    if form.amount.is_empty() || form.category.is_empty() || form.date.is_empty() {
        return None;
    }

    Some(ExpenseNew {
        amount: form.amount.clone(),
        category: form.category.clone(),
        description: form.description.clone(),
        date: form.date.clone(),
    })
}
