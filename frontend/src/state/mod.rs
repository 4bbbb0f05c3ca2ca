pub mod form;
pub mod store;

pub use form::{FormField, FormFields, Submission, TransactionForm};
pub use store::{DashboardStore, RequestToken};
