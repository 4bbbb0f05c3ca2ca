//! Dashboard controller.
//!
//! Every user action and every API response arrives as an [`Event`]. The
//! controller mutates its owned state and answers with the [`Command`]s the
//! root component must execute (API calls, timers). It never performs I/O,
//! which keeps the whole flow testable on the host.

use chrono::NaiveDate;
use shared::{
    Category, CategoryBreakdown, Filter, PaymentMethodBreakdown, Summary, TopExpenses, Transaction,
    TransactionFields, TransactionId, TransactionType, TrendPoint,
};

use crate::services::api::{Ack, ApiError, ApiResult};
use crate::services::config::AppConfig;
use crate::services::logging::Logger;
use crate::state::{DashboardStore, FormField, RequestToken, Submission, TransactionForm};

const COMPONENT: &str = "controller";

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Init,
    FilterChanged { month: u32, year: i32 },
    NewTransactionClicked,
    EditClicked(Transaction),
    FieldChanged(FormField, String),
    TypeSelected(TransactionType),
    FormSubmitted,
    /// Cancel button or a click outside the modal
    FormDismissed,
    DeleteClicked(TransactionId),
    DeleteConfirmed,
    DeleteCancelled,
    SeedCategoriesClicked,
    ToastExpired(u64),

    CategoriesLoaded(ApiResult<Vec<Category>>),
    CategoriesSeeded(ApiResult<Ack>),
    TransactionsLoaded(RequestToken, ApiResult<Vec<Transaction>>),
    SummaryLoaded(RequestToken, ApiResult<Summary>),
    CategoryBreakdownLoaded(RequestToken, ApiResult<CategoryBreakdown>),
    TrendLoaded(RequestToken, ApiResult<Vec<TrendPoint>>),
    TopExpensesLoaded(RequestToken, ApiResult<TopExpenses>),
    PaymentMethodsLoaded(RequestToken, ApiResult<PaymentMethodBreakdown>),
    TransactionSaved { updated: bool, result: ApiResult<Transaction> },
    TransactionDeleted(ApiResult<Ack>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchCategories,
    SeedCategories,
    FetchTransactions(RequestToken, Filter),
    FetchSummary(RequestToken, Filter),
    FetchCategoryBreakdown(RequestToken, Filter),
    FetchTrend(RequestToken, u32),
    FetchTopExpenses(RequestToken, Filter, u32),
    FetchPaymentMethods(RequestToken, Filter),
    CreateTransaction(TransactionFields),
    UpdateTransaction(TransactionId, TransactionFields),
    DeleteTransaction(TransactionId),
    ExpireToast { id: u64, after_ms: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Transactions and summary of one period, staged until both arrive
#[derive(Debug, Clone, PartialEq)]
struct PeriodLoad {
    token: RequestToken,
    filter: Filter,
    transactions: Option<Vec<Transaction>>,
    summary: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    store: DashboardStore,
    form: TransactionForm,
    pending_delete: Option<TransactionId>,
    toasts: Vec<Toast>,
    next_toast_id: u64,
    period_token: RequestToken,
    period_load: Option<PeriodLoad>,
    report_token: RequestToken,
    /// Report generation that already produced an error toast
    report_failure_shown: Option<RequestToken>,
    today: NaiveDate,
    trend_months: u32,
    top_expenses_limit: u32,
    toast_duration_ms: u32,
}

impl Controller {
    pub fn new(config: &AppConfig, today: NaiveDate, filter: Filter) -> Self {
        Self {
            store: DashboardStore::new(filter),
            form: TransactionForm::new(today),
            pending_delete: None,
            toasts: Vec::new(),
            next_toast_id: 0,
            period_token: RequestToken::default(),
            period_load: None,
            report_token: RequestToken::default(),
            report_failure_shown: None,
            today,
            trend_months: config.trend_months,
            top_expenses_limit: config.top_expenses_limit,
            toast_duration_ms: config.toast_duration_ms,
        }
    }

    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    pub fn form(&self) -> &TransactionForm {
        &self.form
    }

    pub fn pending_delete(&self) -> Option<&Transaction> {
        self.pending_delete.and_then(|id| self.store.transaction(id))
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_loading(&self) -> bool {
        self.period_load.is_some()
    }

    pub fn handle(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Init => {
                let mut commands = vec![Command::FetchCategories];
                commands.extend(self.refresh_all());
                commands
            }
            Event::FilterChanged { month, year } => {
                if !self.store.set_filter(month, year) {
                    Logger::warn_with_component(
                        COMPONENT,
                        &format!("Ignoring invalid filter {}/{}", month, year),
                    );
                    return Vec::new();
                }
                Logger::info_with_component(
                    COMPONENT,
                    &format!("Filter changed to {}", self.store.filter()),
                );
                self.refresh_all()
            }
            Event::NewTransactionClicked => {
                self.form.open_create(self.today);
                Vec::new()
            }
            Event::EditClicked(tx) => {
                self.form.open_edit(&tx);
                Vec::new()
            }
            Event::FieldChanged(field, value) => {
                self.form.set_field(field, value);
                Vec::new()
            }
            Event::TypeSelected(kind) => {
                self.form.select_type(kind);
                Vec::new()
            }
            Event::FormSubmitted => self.submit(),
            Event::FormDismissed => {
                self.form.close(self.today);
                Vec::new()
            }
            Event::DeleteClicked(id) => {
                self.pending_delete = Some(id);
                Vec::new()
            }
            Event::DeleteConfirmed => match self.pending_delete.take() {
                Some(id) => vec![Command::DeleteTransaction(id)],
                None => Vec::new(),
            },
            Event::DeleteCancelled => {
                self.pending_delete = None;
                Vec::new()
            }
            Event::SeedCategoriesClicked => vec![Command::SeedCategories],
            Event::ToastExpired(id) => {
                self.toasts.retain(|toast| toast.id != id);
                Vec::new()
            }

            Event::CategoriesLoaded(result) => match result {
                Ok(categories) => {
                    self.store.replace_categories(categories);
                    Vec::new()
                }
                Err(e) => self.failure("Failed to load categories", &e),
            },
            Event::CategoriesSeeded(result) => match result {
                Ok(ack) => {
                    let message = ack
                        .message
                        .unwrap_or_else(|| "Default categories created!".to_string());
                    let mut commands = vec![Command::FetchCategories];
                    commands.push(self.push_toast(ToastKind::Success, message));
                    commands
                }
                Err(e) => self.failure("Failed to seed categories", &e),
            },
            Event::TransactionsLoaded(token, result) => {
                self.on_period_part(token, result.map(PeriodPart::Transactions))
            }
            Event::SummaryLoaded(token, result) => {
                self.on_period_part(token, result.map(PeriodPart::Summary))
            }
            Event::CategoryBreakdownLoaded(token, result) => {
                self.on_report(token, result, |store, breakdown| {
                    store.reports_mut().category_breakdown = Some(breakdown)
                })
            }
            Event::TrendLoaded(token, result) => {
                self.on_report(token, result, |store, trend| store.reports_mut().trend = trend)
            }
            Event::TopExpensesLoaded(token, result) => {
                self.on_report(token, result, |store, top| store.reports_mut().top_expenses = Some(top))
            }
            Event::PaymentMethodsLoaded(token, result) => {
                self.on_report(token, result, |store, methods| {
                    store.reports_mut().payment_methods = Some(methods)
                })
            }
            Event::TransactionSaved { updated, result } => match result {
                Ok(tx) => {
                    Logger::info_with_component(COMPONENT, &format!("Saved transaction {}", tx.id));
                    // A form dismissed mid-flight may have been reopened since; leave it alone
                    if self.form.submitting {
                        self.form.close(self.today);
                    }
                    let message = if updated {
                        "Transaction updated!"
                    } else {
                        "Transaction saved!"
                    };
                    let mut commands = vec![self.push_toast(ToastKind::Success, message.to_string())];
                    commands.extend(self.refresh_all());
                    commands
                }
                Err(e) => {
                    if self.form.submitting {
                        self.form.submit_failed(e.user_message());
                    }
                    self.failure("Failed to save transaction", &e)
                }
            },
            Event::TransactionDeleted(result) => match result {
                Ok(_) => {
                    let mut commands =
                        vec![self.push_toast(ToastKind::Success, "Transaction deleted!".to_string())];
                    commands.extend(self.refresh_all());
                    commands
                }
                Err(e) => self.failure("Failed to delete transaction", &e),
            },
        }
    }

    fn submit(&mut self) -> Vec<Command> {
        match self.form.begin_submit() {
            Some(Ok(Submission::Create(fields))) => vec![Command::CreateTransaction(fields)],
            Some(Ok(Submission::Update(id, fields))) => vec![Command::UpdateTransaction(id, fields)],
            Some(Err(e)) => {
                Logger::debug_with_component(COMPONENT, &format!("Form rejected: {}", e));
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Reload the period data and every report for the current filter
    fn refresh_all(&mut self) -> Vec<Command> {
        let mut commands = self.load_period();
        commands.extend(self.load_reports());
        commands
    }

    fn load_period(&mut self) -> Vec<Command> {
        let filter = self.store.filter();
        self.period_token = self.period_token.next();
        self.period_load = Some(PeriodLoad {
            token: self.period_token,
            filter,
            transactions: None,
            summary: None,
        });
        vec![
            Command::FetchTransactions(self.period_token, filter),
            Command::FetchSummary(self.period_token, filter),
        ]
    }

    fn load_reports(&mut self) -> Vec<Command> {
        let filter = self.store.filter();
        self.report_token = self.report_token.next();
        let token = self.report_token;
        vec![
            Command::FetchCategoryBreakdown(token, filter),
            Command::FetchTrend(token, self.trend_months),
            Command::FetchTopExpenses(token, filter, self.top_expenses_limit),
            Command::FetchPaymentMethods(token, filter),
        ]
    }

    fn on_period_part(&mut self, token: RequestToken, result: ApiResult<PeriodPart>) -> Vec<Command> {
        let Some(load) = self.period_load.as_mut().filter(|load| load.token == token) else {
            Logger::debug_with_component(COMPONENT, &format!("Dropping stale period response {:?}", token));
            return Vec::new();
        };

        match result {
            Ok(PeriodPart::Transactions(transactions)) => load.transactions = Some(transactions),
            Ok(PeriodPart::Summary(summary)) => load.summary = Some(summary),
            Err(e) => {
                // Nothing from this load is applied; the previous period stays on screen
                self.period_load = None;
                return self.failure("Failed to load transactions", &e);
            }
        }

        if load.transactions.is_some() && load.summary.is_some() {
            if let Some(PeriodLoad {
                filter,
                transactions: Some(transactions),
                summary: Some(summary),
                ..
            }) = self.period_load.take()
            {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("Loaded {} transactions for {}", transactions.len(), filter),
                );
                self.store.commit_period(filter, transactions, summary);
            }
        }
        Vec::new()
    }

    fn on_report<T>(
        &mut self,
        token: RequestToken,
        result: ApiResult<T>,
        apply: impl FnOnce(&mut DashboardStore, T),
    ) -> Vec<Command> {
        if token != self.report_token {
            Logger::debug_with_component(COMPONENT, &format!("Dropping stale report response {:?}", token));
            return Vec::new();
        }
        match result {
            Ok(report) => {
                apply(&mut self.store, report);
                Vec::new()
            }
            Err(e) if self.report_failure_shown == Some(token) => {
                Logger::warn_with_component(COMPONENT, &format!("Failed to load report: {}", e));
                Vec::new()
            }
            Err(e) => {
                self.report_failure_shown = Some(token);
                self.failure("Failed to load reports", &e)
            }
        }
    }

    fn failure(&mut self, context: &str, error: &ApiError) -> Vec<Command> {
        Logger::error_with_component(COMPONENT, &format!("{}: {}", context, error));
        vec![self.push_toast(ToastKind::Error, error.user_message())]
    }

    fn push_toast(&mut self, kind: ToastKind, message: String) -> Command {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, kind, message });
        Command::ExpireToast {
            id,
            after_ms: self.toast_duration_ms,
        }
    }
}

enum PeriodPart {
    Transactions(Vec<Transaction>),
    Summary(Summary),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_summary_cards, render_transaction_list, BalanceTone, TransactionListView};
    use crate::services::format::CurrencyFormat;
    use crate::state::form::FormMode;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn march() -> Filter {
        Filter { month: 3, year: 2024 }
    }

    fn controller() -> Controller {
        Controller::new(&AppConfig::default(), today(), march())
    }

    fn tx(id: TransactionId, kind: TransactionType, amount: f64) -> Transaction {
        Transaction {
            id,
            description: format!("tx {}", id),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            category_id: None,
            category: None,
            kind,
            payment_method: None,
            notes: None,
            recurring: false,
        }
    }

    fn summary(income: f64, expense: f64, count: u32) -> Summary {
        Summary {
            month: 3,
            year: 2024,
            total_income: income,
            total_expense: expense,
            balance: income - expense,
            transaction_count: count,
        }
    }

    fn period_token(commands: &[Command]) -> RequestToken {
        commands
            .iter()
            .find_map(|c| match c {
                Command::FetchTransactions(token, _) => Some(*token),
                _ => None,
            })
            .expect("period fetch issued")
    }

    fn report_token(commands: &[Command]) -> RequestToken {
        commands
            .iter()
            .find_map(|c| match c {
                Command::FetchCategoryBreakdown(token, _) => Some(*token),
                _ => None,
            })
            .expect("report fetch issued")
    }

    /// Load a period to completion and return the controller
    fn loaded(transactions: Vec<Transaction>, s: Summary) -> Controller {
        let mut c = controller();
        let commands = c.handle(Event::Init);
        let token = period_token(&commands);
        c.handle(Event::TransactionsLoaded(token, Ok(transactions)));
        c.handle(Event::SummaryLoaded(token, Ok(s)));
        c
    }

    #[test]
    fn test_init_fetches_everything() {
        let mut c = controller();
        let commands = c.handle(Event::Init);
        let token = period_token(&commands);

        assert!(commands.contains(&Command::FetchCategories));
        assert!(commands.contains(&Command::FetchTransactions(token, march())));
        assert!(commands.contains(&Command::FetchSummary(token, march())));
        assert!(commands.iter().any(|c| matches!(c, Command::FetchTrend(_, 6))));
        assert!(commands.iter().any(|c| matches!(c, Command::FetchTopExpenses(_, _, 5))));
        assert!(commands.iter().any(|c| matches!(c, Command::FetchPaymentMethods(_, _))));
        assert!(c.is_loading());
    }

    #[test]
    fn test_filter_change_commits_both_or_nothing() {
        let mut c = loaded(vec![tx(1, TransactionType::Expense, 10.0)], summary(0.0, 10.0, 1));

        let commands = c.handle(Event::FilterChanged { month: 4, year: 2024 });
        let token = period_token(&commands);
        let april = Filter { month: 4, year: 2024 };
        assert!(commands.contains(&Command::FetchTransactions(token, april)));
        assert!(commands.contains(&Command::FetchSummary(token, april)));
        assert_eq!(c.store().filter(), april);

        c.handle(Event::TransactionsLoaded(token, Ok(vec![])));
        // Half a period is never shown
        assert_eq!(c.store().transactions().len(), 1);
        assert_eq!(c.store().loaded_filter(), Some(march()));

        c.handle(Event::SummaryLoaded(token, Ok(summary(0.0, 0.0, 0))));
        assert!(c.store().transactions().is_empty());
        assert_eq!(c.store().loaded_filter(), Some(april));
        assert!(!c.is_loading());
    }

    #[test]
    fn test_invalid_filter_is_ignored() {
        let mut c = controller();
        assert!(c.handle(Event::FilterChanged { month: 13, year: 2024 }).is_empty());
        assert_eq!(c.store().filter(), march());
    }

    #[test]
    fn test_last_request_wins() {
        let mut c = controller();
        let first = period_token(&c.handle(Event::FilterChanged { month: 1, year: 2024 }));
        let second = period_token(&c.handle(Event::FilterChanged { month: 2, year: 2024 }));

        c.handle(Event::TransactionsLoaded(second, Ok(vec![tx(2, TransactionType::Income, 5.0)])));
        c.handle(Event::SummaryLoaded(second, Ok(summary(5.0, 0.0, 1))));

        // The superseded request completes late and must not overwrite anything
        c.handle(Event::TransactionsLoaded(first, Ok(vec![tx(1, TransactionType::Income, 1.0)])));
        c.handle(Event::SummaryLoaded(first, Ok(summary(1.0, 0.0, 1))));

        assert_eq!(c.store().transactions()[0].id, 2);
        assert_eq!(c.store().summary().map(|s| s.total_income), Some(5.0));
        assert_eq!(c.store().loaded_filter(), Some(Filter { month: 2, year: 2024 }));
    }

    #[test]
    fn test_stale_reports_are_dropped() {
        let mut c = controller();
        let first = report_token(&c.handle(Event::FilterChanged { month: 1, year: 2024 }));
        let second = report_token(&c.handle(Event::FilterChanged { month: 2, year: 2024 }));

        let point = TrendPoint { month: 1, year: 2024, label: "Jan/2024".into(), income: 1.0, expense: 0.0, balance: 1.0 };
        c.handle(Event::TrendLoaded(first, Ok(vec![point.clone()])));
        assert!(c.store().reports().trend.is_empty());

        c.handle(Event::TrendLoaded(second, Ok(vec![point])));
        assert_eq!(c.store().reports().trend.len(), 1);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_state() {
        let mut c = loaded(vec![tx(1, TransactionType::Expense, 10.0)], summary(0.0, 10.0, 1));
        let before = c.store().clone();

        let token = period_token(&c.handle(Event::FilterChanged { month: 4, year: 2024 }));
        let commands = c.handle(Event::TransactionsLoaded(token, Ok(vec![])));
        assert!(commands.is_empty());
        let commands = c.handle(Event::SummaryLoaded(token, Err(ApiError::Network("offline".into()))));

        assert!(matches!(commands.as_slice(), [Command::ExpireToast { .. }]));
        assert_eq!(c.toasts()[0].kind, ToastKind::Error);
        assert_eq!(c.toasts()[0].message, "Could not reach the server");
        assert_eq!(c.store().transactions(), before.transactions());
        assert_eq!(c.store().summary(), before.summary());
        assert!(!c.is_loading());
    }

    fn server_down<T>() -> ApiResult<T> {
        Err(ApiError::Http { status: 500 })
    }

    #[test]
    fn test_report_failures_toast_once_per_refresh() {
        let mut c = controller();
        let token = report_token(&c.handle(Event::Init));

        assert_eq!(c.handle(Event::TrendLoaded(token, server_down())).len(), 1);
        assert!(c.handle(Event::CategoryBreakdownLoaded(token, server_down())).is_empty());
        assert_eq!(c.toasts().len(), 1);
    }

    #[test]
    fn test_scenario_march_balance_renders_positive() {
        let c = loaded(
            vec![tx(1, TransactionType::Income, 150.0), tx(2, TransactionType::Expense, 80.0)],
            summary(150.0, 80.0, 2),
        );

        let cards = render_summary_cards(c.store().summary(), &CurrencyFormat::default());
        assert_eq!(cards.balance, "R$ 70,00");
        assert_eq!(cards.balance_tone, BalanceTone::Positive);
        assert_eq!(cards.transaction_count, "2");
    }

    #[test]
    fn test_empty_period_renders_empty_state() {
        let c = loaded(vec![], summary(0.0, 0.0, 0));
        let view = render_transaction_list(c.store().transactions(), c.store().categories(), &CurrencyFormat::default());
        assert_eq!(view, TransactionListView::Empty);
    }

    #[test]
    fn test_submit_without_id_creates() {
        let mut c = controller();
        c.handle(Event::NewTransactionClicked);
        assert_eq!(c.form().mode(), FormMode::Create);
        c.handle(Event::FieldChanged(FormField::Description, "Mercado".into()));
        c.handle(Event::FieldChanged(FormField::Amount, "80".into()));

        let commands = c.handle(Event::FormSubmitted);
        assert!(matches!(commands.as_slice(), [Command::CreateTransaction(fields)] if fields.amount == 80.0));
    }

    #[test]
    fn test_submit_with_id_updates() {
        let mut c = loaded(vec![tx(7, TransactionType::Expense, 30.0)], summary(0.0, 30.0, 1));
        let existing = c.store().transactions()[0].clone();

        c.handle(Event::EditClicked(existing));
        assert_eq!(c.form().mode(), FormMode::Edit(7));
        c.handle(Event::TypeSelected(TransactionType::Income));

        let commands = c.handle(Event::FormSubmitted);
        match commands.as_slice() {
            [Command::UpdateTransaction(7, fields)] => assert_eq!(fields.kind, TransactionType::Income),
            other => panic!("expected an update, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_form_issues_nothing() {
        let mut c = controller();
        c.handle(Event::NewTransactionClicked);
        assert!(c.handle(Event::FormSubmitted).is_empty());
        assert_eq!(c.form().error.as_deref(), Some("Description is required"));
    }

    #[test]
    fn test_save_success_closes_form_and_refreshes() {
        let mut c = controller();
        c.handle(Event::NewTransactionClicked);
        c.handle(Event::FieldChanged(FormField::Description, "Salário".into()));
        c.handle(Event::FieldChanged(FormField::Amount, "150".into()));
        c.handle(Event::TypeSelected(TransactionType::Income));
        c.handle(Event::FormSubmitted);

        let commands = c.handle(Event::TransactionSaved {
            updated: false,
            result: Ok(tx(10, TransactionType::Income, 150.0)),
        });

        assert_eq!(c.form().mode(), FormMode::Closed);
        assert_eq!(c.toasts()[0].message, "Transaction saved!");
        assert!(commands.iter().any(|c| matches!(c, Command::FetchTransactions(..))));
        assert!(commands.iter().any(|c| matches!(c, Command::FetchSummary(..))));
        assert!(commands.iter().any(|c| matches!(c, Command::FetchCategoryBreakdown(..))));
        assert!(commands.iter().any(|c| matches!(c, Command::FetchTrend(..))));
    }

    #[test]
    fn test_created_transaction_appears_once_after_refetch() {
        let mut c = loaded(vec![tx(1, TransactionType::Expense, 10.0)], summary(0.0, 10.0, 1));
        c.handle(Event::NewTransactionClicked);
        c.handle(Event::FieldChanged(FormField::Description, "Novo".into()));
        c.handle(Event::FieldChanged(FormField::Amount, "5".into()));
        c.handle(Event::FormSubmitted);

        let created = tx(2, TransactionType::Expense, 5.0);
        let commands = c.handle(Event::TransactionSaved { updated: false, result: Ok(created.clone()) });
        // Nothing is inserted locally before the refetch
        assert_eq!(c.store().transactions().len(), 1);

        let token = period_token(&commands);
        c.handle(Event::TransactionsLoaded(token, Ok(vec![created.clone(), tx(1, TransactionType::Expense, 10.0)])));
        c.handle(Event::SummaryLoaded(token, Ok(summary(0.0, 15.0, 2))));

        let matches = c.store().transactions().iter().filter(|t| t.id == created.id).count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_save_failure_shows_server_message() {
        let mut c = controller();
        c.handle(Event::NewTransactionClicked);
        c.handle(Event::FieldChanged(FormField::Description, "x".into()));
        c.handle(Event::FieldChanged(FormField::Amount, "1".into()));
        c.handle(Event::FormSubmitted);

        let commands = c.handle(Event::TransactionSaved {
            updated: false,
            result: Err(ApiError::Server("Valor é obrigatório".into())),
        });

        assert_eq!(commands.len(), 1);
        assert_eq!(c.toasts()[0].message, "Valor é obrigatório");
        assert!(c.form().is_open());
        assert_eq!(c.form().error.as_deref(), Some("Valor é obrigatório"));
    }

    #[test]
    fn test_dismissed_form_is_not_closed_by_late_save() {
        let mut c = controller();
        c.handle(Event::NewTransactionClicked);
        c.handle(Event::FieldChanged(FormField::Description, "x".into()));
        c.handle(Event::FieldChanged(FormField::Amount, "1".into()));
        c.handle(Event::FormSubmitted);
        c.handle(Event::FormDismissed);
        c.handle(Event::NewTransactionClicked);

        c.handle(Event::TransactionSaved { updated: false, result: Ok(tx(3, TransactionType::Expense, 1.0)) });
        assert_eq!(c.form().mode(), FormMode::Create);
    }

    #[test]
    fn test_delete_declined_issues_nothing() {
        let mut c = loaded(vec![tx(1, TransactionType::Expense, 10.0)], summary(0.0, 10.0, 1));

        assert!(c.handle(Event::DeleteClicked(1)).is_empty());
        assert_eq!(c.pending_delete().map(|t| t.id), Some(1));

        assert!(c.handle(Event::DeleteCancelled).is_empty());
        assert!(c.pending_delete().is_none());
        assert!(c.handle(Event::DeleteConfirmed).is_empty());
        assert_eq!(c.store().transactions().len(), 1);
    }

    #[test]
    fn test_delete_confirmed_then_refreshes() {
        let mut c = loaded(vec![tx(1, TransactionType::Expense, 10.0)], summary(0.0, 10.0, 1));
        c.handle(Event::DeleteClicked(1));
        assert_eq!(c.handle(Event::DeleteConfirmed), vec![Command::DeleteTransaction(1)]);

        let commands = c.handle(Event::TransactionDeleted(Ok(Ack { message: None })));
        assert_eq!(c.toasts()[0].message, "Transaction deleted!");
        assert!(commands.iter().any(|c| matches!(c, Command::FetchTransactions(..))));

        let commands = c.handle(Event::TransactionDeleted(Err(ApiError::Server("Not found".into()))));
        assert!(matches!(commands.as_slice(), [Command::ExpireToast { .. }]));
        assert_eq!(c.toasts()[1].message, "Not found");
    }

    #[test]
    fn test_outside_click_closes_without_saving() {
        let mut c = controller();
        c.handle(Event::NewTransactionClicked);
        c.handle(Event::FieldChanged(FormField::Description, "draft".into()));
        assert!(c.handle(Event::FormDismissed).is_empty());
        assert!(!c.form().is_open());
        assert!(c.form().fields.description.is_empty());
    }

    #[test]
    fn test_seed_reloads_categories() {
        let mut c = controller();
        assert_eq!(c.handle(Event::SeedCategoriesClicked), vec![Command::SeedCategories]);

        let commands = c.handle(Event::CategoriesSeeded(Ok(Ack {
            message: Some("11 categorias criadas com sucesso".into()),
        })));
        assert_eq!(commands[0], Command::FetchCategories);
        assert_eq!(c.toasts()[0].message, "11 categorias criadas com sucesso");
    }

    #[test]
    fn test_toasts_expire() {
        let mut c = controller();
        let commands = c.handle(Event::CategoriesLoaded(Err(ApiError::Network("offline".into()))));
        let id = match commands.as_slice() {
            [Command::ExpireToast { id, after_ms: 3000 }] => *id,
            other => panic!("unexpected {:?}", other),
        };
        c.handle(Event::ToastExpired(id));
        assert!(c.toasts().is_empty());
    }
}
