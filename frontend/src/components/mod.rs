pub mod charts;
pub mod confirm_modal;
pub mod forms;
pub mod header;
pub mod reports;
pub mod summary_cards;
pub mod toast;
pub mod transactions;

pub use charts::{CategoryChart, TrendChart};
pub use confirm_modal::ConfirmModal;
pub use forms::TransactionFormModal;
pub use header::Header;
pub use reports::{PaymentMethodsPanel, TopExpensesPanel};
pub use summary_cards::SummaryCards;
pub use toast::ToastStack;
pub use transactions::TransactionList;
