//! View-model of the expense page.
//!
//! Sync operations fill these structures through the pure `render_*`
//! functions; the terminal UI only draws what is here. Nothing in this module
//! touches the network or the terminal.

use std::cmp::Ordering;

use api_types::{expense::Expense, stats::Statistics};

use crate::format::format_currency;

pub const NO_EXPENSES: &str = "No expenses recorded yet.";
pub const NO_CATEGORIES: &str = "No category data yet.";
pub const NO_DESCRIPTION: &str = "No description";
const NO_STAT: &str = "-";

/// Output region that is rebuilt from scratch on every render.
#[derive(Debug, Clone, PartialEq)]
pub enum Container<T> {
    /// Nothing fetched yet.
    Pending,
    /// The fetch succeeded but returned nothing.
    Placeholder(&'static str),
    Items(Vec<T>),
    /// The last fetch failed; the message replaces any previous content.
    Failed(String),
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> Container<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Items(items) => items,
            _ => &[],
        }
    }
}

/// One rendered expense. `id` backs the delete control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseCard {
    pub id: i64,
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub label: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsPanel {
    pub total_stat: String,
    pub monthly_stat: String,
    pub category_list: Container<CategoryRow>,
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self {
            total_stat: NO_STAT.to_string(),
            monthly_stat: NO_STAT.to_string(),
            category_list: Container::Pending,
        }
    }
}

/// Inputs of the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub form: ExpenseForm,
    pub expenses_container: Container<ExpenseCard>,
    pub stats: StatsPanel,
}

/// Replaces `container` with one card per expense, in the given order.
pub fn render_expenses(expenses: &[Expense], container: &mut Container<ExpenseCard>) {
    if expenses.is_empty() {
        *container = Container::Placeholder(NO_EXPENSES);
        return;
    }

    let cards = expenses
        .iter()
        .map(|expense| ExpenseCard {
            id: expense.id,
            category: expense.category.clone(),
            amount: format_currency(expense.amount.value()),
            date: expense.date.clone(),
            description: expense
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
        })
        .collect();
    *container = Container::Items(cards);
}

pub fn render_expenses_failure(message: &str, container: &mut Container<ExpenseCard>) {
    *container = Container::Failed(format!("Could not load expenses: {message}"));
}

/// Fills the totals and rebuilds the category breakdown.
///
/// Categories are ordered by amount, largest first; equal amounts fall back
/// to the label in ascending order, and NaN amounts go last.
pub fn render_statistics(stats: &Statistics, panel: &mut StatsPanel) {
    panel.total_stat = format_currency(stats.total.value());
    panel.monthly_stat = format_currency(stats.monthly_total.value());

    if stats.categories.is_empty() {
        panel.category_list = Container::Placeholder(NO_CATEGORIES);
        return;
    }

    let mut sorted = stats
        .categories
        .iter()
        .map(|(label, amount)| (label.as_str(), amount.value()))
        .collect::<Vec<_>>();
    sorted.sort_by(|(label_a, a), (label_b, b)| {
        by_amount_desc(*a, *b).then_with(|| label_a.cmp(label_b))
    });

    let rows = sorted
        .into_iter()
        .map(|(label, amount)| CategoryRow {
            label: label.to_string(),
            amount: format_currency(amount),
        })
        .collect();
    panel.category_list = Container::Items(rows);
}

pub fn render_statistics_failure(message: &str, panel: &mut StatsPanel) {
    panel.total_stat = NO_STAT.to_string();
    panel.monthly_stat = NO_STAT.to_string();
    panel.category_list = Container::Failed(format!("Could not load statistics: {message}"));
}

fn by_amount_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use api_types::Amount;

    use super::*;

    fn expense(id: i64, amount: f64, category: &str, description: Option<&str>) -> Expense {
        Expense {
            id,
            amount: Amount::new(amount),
            category: category.to_string(),
            description: description.map(str::to_string),
            date: "2024-03-01".to_string(),
        }
    }

    fn stats(categories: &[(&str, f64)]) -> Statistics {
        Statistics {
            total: Amount::new(150.5),
            monthly_total: Amount::new(20.0),
            categories: categories
                .iter()
                .map(|(label, amount)| (label.to_string(), Amount::new(*amount)))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn empty_collection_renders_single_placeholder() {
        let mut container = Container::Items(vec![ExpenseCard {
            id: 1,
            category: "stale".to_string(),
            amount: "$1.00".to_string(),
            date: "2024-01-01".to_string(),
            description: NO_DESCRIPTION.to_string(),
        }]);
        render_expenses(&[], &mut container);
        assert_eq!(container, Container::Placeholder(NO_EXPENSES));
        assert!(container.items().is_empty());
    }

    #[test]
    fn cards_keep_server_order_and_fallback_description() {
        let mut container = Container::default();
        render_expenses(
            &[
                expense(7, 12.3, "Food", Some("")),
                expense(3, 100.0, "Rent", None),
                expense(5, 2.0, "Fun", Some("cinema")),
            ],
            &mut container,
        );

        let cards = container.items();
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![7, 3, 5]);
        assert_eq!(cards[0].amount, "$12.30");
        assert_eq!(cards[0].description, NO_DESCRIPTION);
        assert_eq!(cards[1].description, NO_DESCRIPTION);
        assert_eq!(cards[2].description, "cinema");
        assert_eq!(cards[2].date, "2024-03-01");
    }

    #[test]
    fn categories_sorted_by_amount_descending() {
        let mut panel = StatsPanel::default();
        render_statistics(
            &stats(&[("Food", 30.0), ("Rent", 100.0), ("Fun", 20.5)]),
            &mut panel,
        );

        assert_eq!(panel.total_stat, "$150.50");
        assert_eq!(panel.monthly_stat, "$20.00");
        let rows = panel.category_list.items();
        let order = rows.iter().map(|r| r.label.as_str()).collect::<Vec<_>>();
        assert_eq!(order, vec!["Rent", "Food", "Fun"]);
        assert_eq!(rows[0].amount, "$100.00");
        assert_eq!(rows[2].amount, "$20.50");
    }

    #[test]
    fn equal_amounts_fall_back_to_label_and_nan_sorts_last() {
        let mut panel = StatsPanel::default();
        render_statistics(
            &stats(&[("Zoo", 10.0), ("Bar", 10.0), ("Odd", f64::NAN), ("Top", 50.0)]),
            &mut panel,
        );

        let order = panel
            .category_list
            .items()
            .iter()
            .map(|r| r.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["Top", "Bar", "Zoo", "Odd"]);
        assert_eq!(panel.category_list.items()[3].amount, "$NaN");
    }

    #[test]
    fn empty_categories_render_placeholder() {
        let mut panel = StatsPanel::default();
        render_statistics(&stats(&[]), &mut panel);
        assert_eq!(panel.category_list, Container::Placeholder(NO_CATEGORIES));
        assert_eq!(panel.total_stat, "$150.50");
    }

    #[test]
    fn failure_replaces_previous_statistics() {
        let mut panel = StatsPanel::default();
        render_statistics(&stats(&[("Food", 30.0)]), &mut panel);
        render_statistics_failure("server error: boom", &mut panel);

        assert_eq!(panel.total_stat, "-");
        assert_eq!(
            panel.category_list,
            Container::Failed("Could not load statistics: server error: boom".to_string())
        );
    }
}
