use chrono::{Local, NaiveDate};

use crate::{client::Client, sync, view::Page};

/// Today's date in the user's local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Prepares the page on startup: defaults the date input to `today`, then
/// loads the expense list and the statistics once.
pub async fn bootstrap(client: &Client, page: &mut Page, today: NaiveDate) {
    page.form.date = today.format("%Y-%m-%d").to_string();
    tracing::info!("bootstrapping against {}", client.base_url());
    sync::refresh(client, page).await;
}
