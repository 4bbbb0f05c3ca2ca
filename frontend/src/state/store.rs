use shared::{
    Category, CategoryBreakdown, Filter, PaymentMethodBreakdown, Summary, TopExpenses,
    Transaction, TransactionId, TrendPoint,
};

/// Generation tag attached to a group of requests.
///
/// Only responses carrying the latest token are applied; anything older was
/// superseded by a newer filter change or refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }
}

/// Aggregate reports feeding the charts and report panels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reports {
    pub category_breakdown: Option<CategoryBreakdown>,
    pub trend: Vec<TrendPoint>,
    pub top_expenses: Option<TopExpenses>,
    pub payment_methods: Option<PaymentMethodBreakdown>,
}

/// Single source of truth for rendering. In memory only.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStore {
    filter: Filter,
    /// Filter that `transactions` and `summary` were fetched for
    loaded_filter: Option<Filter>,
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    summary: Option<Summary>,
    reports: Reports,
}

impl DashboardStore {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            loaded_filter: None,
            transactions: Vec::new(),
            categories: Vec::new(),
            summary: None,
            reports: Reports::default(),
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn loaded_filter(&self) -> Option<Filter> {
        self.loaded_filter
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn reports(&self) -> &Reports {
        &self.reports
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// Returns `false` (and leaves the filter alone) for an out-of-range month
    pub fn set_filter(&mut self, month: u32, year: i32) -> bool {
        match Filter::new(month, year) {
            Some(filter) => {
                self.filter = filter;
                true
            }
            None => false,
        }
    }

    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    pub fn replace_summary(&mut self, summary: Summary) {
        self.summary = Some(summary);
    }

    pub fn replace_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Install transactions and summary fetched for the same filter together
    pub fn commit_period(&mut self, filter: Filter, transactions: Vec<Transaction>, summary: Summary) {
        self.replace_transactions(transactions);
        self.replace_summary(summary);
        self.loaded_filter = Some(filter);
    }

    pub fn reports_mut(&mut self) -> &mut Reports {
        &mut self.reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::TransactionType;

    fn transaction(id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: format!("tx {}", id),
            amount: 10.0,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            category_id: None,
            category: None,
            kind: TransactionType::Expense,
            payment_method: None,
            notes: None,
            recurring: false,
        }
    }

    fn summary() -> Summary {
        Summary {
            month: 3,
            year: 2024,
            total_income: 150.0,
            total_expense: 80.0,
            balance: 70.0,
            transaction_count: 2,
        }
    }

    #[test]
    fn test_tokens_increase() {
        let first = RequestToken::default();
        let second = first.next();
        assert!(second > first);
        assert_ne!(second, second.next());
    }

    #[test]
    fn test_set_filter_rejects_invalid_month() {
        let mut store = DashboardStore::new(Filter { month: 1, year: 2024 });
        assert!(!store.set_filter(13, 2024));
        assert_eq!(store.filter(), Filter { month: 1, year: 2024 });

        assert!(store.set_filter(3, 2024));
        assert_eq!(store.filter(), Filter { month: 3, year: 2024 });
    }

    #[test]
    fn test_replace_never_appends() {
        let mut store = DashboardStore::new(Filter { month: 3, year: 2024 });
        store.replace_transactions(vec![transaction(1), transaction(2)]);
        store.replace_transactions(vec![transaction(2)]);
        assert_eq!(store.transactions().len(), 1);
        assert!(store.transaction(1).is_none());
    }

    #[test]
    fn test_commit_period_records_filter() {
        let filter = Filter { month: 3, year: 2024 };
        let mut store = DashboardStore::new(filter);
        assert_eq!(store.loaded_filter(), None);

        store.commit_period(filter, vec![transaction(1)], summary());
        assert_eq!(store.loaded_filter(), Some(filter));
        assert_eq!(store.summary().map(|s| s.balance), Some(70.0));
        assert_eq!(store.transactions().len(), 1);
    }
}
