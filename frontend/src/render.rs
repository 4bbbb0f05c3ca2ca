//! Projections of the store into view models consumed by the components.
//!
//! Everything here is pure so the display rules can be tested without a DOM.

use shared::{Category, PaymentMethodBreakdown, Summary, TopExpenses, Transaction, TransactionType};

use crate::services::format::{format_date, format_percentage, CurrencyFormat};

pub const UNCATEGORIZED_NAME: &str = "Uncategorized";
pub const UNCATEGORIZED_ICON: &str = "●";
pub const UNCATEGORIZED_COLOR: &str = "#64748b";
pub const PAYMENT_NOT_INFORMED: &str = "Not informed";
pub const NO_CATEGORY_LABEL: &str = "No category";

pub const POSITIVE_COLOR: &str = "#10b981";
pub const NEGATIVE_COLOR: &str = "#f43f5e";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBadge {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl CategoryBadge {
    pub fn uncategorized() -> Self {
        Self {
            name: UNCATEGORIZED_NAME.to_string(),
            icon: UNCATEGORIZED_ICON.to_string(),
            color: UNCATEGORIZED_COLOR.to_string(),
        }
    }

    fn from_category(category: &Category) -> Self {
        let or_default = |value: &str, default: &str| {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            name: or_default(&category.name, UNCATEGORIZED_NAME),
            icon: or_default(&category.icon, UNCATEGORIZED_ICON),
            color: or_default(&category.color, UNCATEGORIZED_COLOR),
        }
    }
}

/// Embedded category first, then the loaded categories, then the placeholder
pub fn resolve_category(tx: &Transaction, categories: &[Category]) -> CategoryBadge {
    tx.category
        .as_ref()
        .or_else(|| {
            tx.category_id
                .and_then(|id| categories.iter().find(|category| category.id == id))
        })
        .map(CategoryBadge::from_category)
        .unwrap_or_else(CategoryBadge::uncategorized)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// Full record, handed back to the edit handler
    pub transaction: Transaction,
    pub description: String,
    pub amount: String,
    pub amount_class: &'static str,
    pub category: CategoryBadge,
    pub payment_method: String,
    pub date: String,
    /// Free-text note, shown as a tooltip
    pub notes: Option<String>,
    pub recurring: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransactionListView {
    Empty,
    Rows(Vec<TransactionRow>),
}

pub fn render_transaction_list(
    transactions: &[Transaction],
    categories: &[Category],
    currency: &CurrencyFormat,
) -> TransactionListView {
    if transactions.is_empty() {
        return TransactionListView::Empty;
    }

    let rows = transactions
        .iter()
        .map(|tx| TransactionRow {
            transaction: tx.clone(),
            description: tx.description.clone(),
            amount: currency.format_signed(tx.amount, tx.kind),
            amount_class: match tx.kind {
                TransactionType::Income => "amount income",
                TransactionType::Expense => "amount expense",
            },
            category: resolve_category(tx, categories),
            payment_method: tx
                .payment_method
                .as_deref()
                .map(str::trim)
                .filter(|method| !method.is_empty())
                .unwrap_or(PAYMENT_NOT_INFORMED)
                .to_string(),
            date: format_date(tx.date),
            notes: tx
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
            recurring: tx.recurring,
        })
        .collect();

    TransactionListView::Rows(rows)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    Positive,
    Negative,
}

impl BalanceTone {
    pub fn of(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceTone::Negative
        } else {
            BalanceTone::Positive
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BalanceTone::Positive => POSITIVE_COLOR,
            BalanceTone::Negative => NEGATIVE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub total_income: String,
    pub total_expense: String,
    pub balance: String,
    pub transaction_count: String,
    pub balance_tone: BalanceTone,
}

/// A summary that has not loaded yet renders as zeros
pub fn render_summary_cards(summary: Option<&Summary>, currency: &CurrencyFormat) -> SummaryCards {
    let (income, expense, balance, count) = summary
        .map(|s| (s.total_income, s.total_expense, s.balance, s.transaction_count))
        .unwrap_or((0.0, 0.0, 0.0, 0));

    SummaryCards {
        total_income: currency.format(income),
        total_expense: currency.format(expense),
        balance: currency.format(balance),
        transaction_count: count.to_string(),
        balance_tone: BalanceTone::of(balance),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOption {
    /// Category id, or empty for "no category"
    pub value: String,
    pub label: String,
}

pub fn render_category_options(categories: &[Category]) -> Vec<CategoryOption> {
    std::iter::once(CategoryOption {
        value: String::new(),
        label: NO_CATEGORY_LABEL.to_string(),
    })
    .chain(categories.iter().map(|category| CategoryOption {
        value: category.id.to_string(),
        label: format!("{} {}", category.icon, category.name).trim().to_string(),
    }))
    .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopExpenseRow {
    pub rank: usize,
    pub description: String,
    pub amount: String,
    pub date: String,
    pub category: CategoryBadge,
}

pub fn render_top_expenses(
    report: Option<&TopExpenses>,
    categories: &[Category],
    currency: &CurrencyFormat,
) -> Vec<TopExpenseRow> {
    report
        .map(|report| {
            report
                .expenses
                .iter()
                .enumerate()
                .map(|(i, tx)| TopExpenseRow {
                    rank: i + 1,
                    description: tx.description.clone(),
                    amount: currency.format(tx.amount),
                    date: format_date(tx.date),
                    category: resolve_category(tx, categories),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethodRow {
    pub method: String,
    pub total: String,
    pub share: String,
    pub count: u32,
}

pub fn render_payment_methods(
    report: Option<&PaymentMethodBreakdown>,
    currency: &CurrencyFormat,
) -> Vec<PaymentMethodRow> {
    report
        .map(|report| {
            report
                .methods
                .iter()
                .map(|method| PaymentMethodRow {
                    method: if method.payment_method.trim().is_empty() {
                        PAYMENT_NOT_INFORMED.to_string()
                    } else {
                        method.payment_method.clone()
                    },
                    total: currency.format(method.total),
                    share: format_percentage(method.percentage),
                    count: method.count,
                })
                .collect()
        })
        .unwrap_or_default()
}
