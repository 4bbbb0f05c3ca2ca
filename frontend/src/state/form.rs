use chrono::NaiveDate;
use shared::{CategoryId, Transaction, TransactionFields, TransactionId, TransactionType};
use thiserror::Error;

/// Client-side validation failures for the transaction form
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Description is required")]
    MissingDescription,
    #[error("Amount is required")]
    MissingAmount,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Date is required")]
    MissingDate,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

/// Lifecycle of the transaction form: closed → open(create) ⇄ open(edit) → closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Closed,
    Create,
    Edit(TransactionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
    Date,
    Category,
    PaymentMethod,
}

/// Raw input values, as typed by the user
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub description: String,
    pub amount: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub date: String,
    /// Empty string means "no category"
    pub category_id: String,
    pub kind: TransactionType,
    pub payment_method: String,
}

impl FormFields {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            category_id: String::new(),
            kind: TransactionType::Expense,
            payment_method: String::new(),
        }
    }

    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            description: tx.description.clone(),
            amount: tx.amount.to_string(),
            date: tx.date.format("%Y-%m-%d").to_string(),
            category_id: tx.category_id.map(|id| id.to_string()).unwrap_or_default(),
            kind: tx.kind,
            payment_method: tx.payment_method.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Description => self.description = value,
            FormField::Amount => self.amount = value,
            FormField::Date => self.date = value,
            FormField::Category => self.category_id = value,
            FormField::PaymentMethod => self.payment_method = value,
        }
    }

    /// Check the required fields and build the request body
    pub fn validate(&self) -> Result<TransactionFields, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }

        let amount_input = self.amount.trim();
        if amount_input.is_empty() {
            return Err(FormError::MissingAmount);
        }
        let amount = parse_amount(amount_input)?;

        let date_input = self.date.trim();
        if date_input.is_empty() {
            return Err(FormError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date_input, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(date_input.to_string()))?;

        let category_input = self.category_id.trim();
        let category_id = if category_input.is_empty() {
            None
        } else {
            Some(
                category_input
                    .parse::<CategoryId>()
                    .map_err(|_| FormError::InvalidCategory(category_input.to_string()))?,
            )
        };

        let payment_method = Some(self.payment_method.trim())
            .filter(|method| !method.is_empty())
            .map(str::to_string);

        Ok(TransactionFields {
            description: description.to_string(),
            amount,
            date,
            category_id,
            kind: self.kind,
            payment_method,
        })
    }
}

/// Accepts `12.50` as well as `12,50`
fn parse_amount(input: &str) -> Result<f64, FormError> {
    let normalized = if input.contains('.') {
        input.to_string()
    } else {
        input.replace(',', ".")
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(FormError::InvalidAmount(input.to_string())),
    }
}

/// What a valid submit turns into
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(TransactionFields),
    Update(TransactionId, TransactionFields),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    mode: FormMode,
    pub fields: FormFields,
    pub error: Option<String>,
    pub submitting: bool,
}

impl TransactionForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Closed,
            fields: FormFields::blank(today),
            error: None,
            submitting: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Edit(_) => "Edit Transaction",
            _ => "New Transaction",
        }
    }

    /// "New transaction": always starts from a blank form
    pub fn open_create(&mut self, today: NaiveDate) {
        self.reset(today);
        self.mode = FormMode::Create;
    }

    /// Populate from an existing transaction and remember its id for the update
    pub fn open_edit(&mut self, tx: &Transaction) {
        self.fields = FormFields::from_transaction(tx);
        self.error = None;
        self.submitting = false;
        self.mode = FormMode::Edit(tx.id);
    }

    /// Cancel, outside click or successful submit
    pub fn close(&mut self, today: NaiveDate) {
        self.reset(today);
        self.mode = FormMode::Closed;
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.fields.set(field, value);
        self.error = None;
    }

    pub fn select_type(&mut self, kind: TransactionType) {
        self.fields.kind = kind;
    }

    /// Validate and mark the form as submitting. Fails if closed or already in flight.
    pub fn begin_submit(&mut self) -> Option<Result<Submission, FormError>> {
        if self.submitting {
            return None;
        }
        let submission = match self.mode {
            FormMode::Closed => return None,
            FormMode::Create => self.fields.validate().map(Submission::Create),
            FormMode::Edit(id) => self.fields.validate().map(|fields| Submission::Update(id, fields)),
        };
        match &submission {
            Ok(_) => {
                self.submitting = true;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        Some(submission)
    }

    /// The server rejected the submit; the form stays open with the message
    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    fn reset(&mut self, today: NaiveDate) {
        self.fields = FormFields::blank(today);
        self.error = None;
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn existing() -> Transaction {
        Transaction {
            id: 42,
            description: "Aluguel".to_string(),
            amount: 1200.5,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            category_id: Some(3),
            category: None,
            kind: TransactionType::Expense,
            payment_method: Some("PIX".to_string()),
            notes: None,
            recurring: true,
        }
    }

    fn filled_form() -> TransactionForm {
        let mut form = TransactionForm::new(today());
        form.open_create(today());
        form.set_field(FormField::Description, "Mercado".to_string());
        form.set_field(FormField::Amount, "80,00".to_string());
        form
    }

    #[test]
    fn test_blank_form_defaults() {
        let form = TransactionForm::new(today());
        assert_eq!(form.mode(), FormMode::Closed);
        assert_eq!(form.fields.date, "2024-03-15");
        assert_eq!(form.fields.kind, TransactionType::Expense);
    }

    #[test]
    fn test_create_submission() {
        let mut form = filled_form();
        let submission = form.begin_submit().unwrap().unwrap();
        match submission {
            Submission::Create(fields) => {
                assert_eq!(fields.amount, 80.0);
                assert_eq!(fields.date, today());
                assert_eq!(fields.category_id, None);
                assert_eq!(fields.payment_method, None);
            }
            other => panic!("expected create, got {:?}", other),
        }
        assert!(form.submitting);
        // A second click while in flight does nothing
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_edit_population_and_update_submission() {
        let mut form = TransactionForm::new(today());
        form.open_edit(&existing());

        assert_eq!(form.mode(), FormMode::Edit(42));
        assert_eq!(form.title(), "Edit Transaction");
        assert_eq!(form.fields.description, "Aluguel");
        assert_eq!(form.fields.amount, "1200.5");
        assert_eq!(form.fields.date, "2024-03-01");
        assert_eq!(form.fields.category_id, "3");
        assert_eq!(form.fields.payment_method, "PIX");

        match form.begin_submit().unwrap().unwrap() {
            Submission::Update(id, fields) => {
                assert_eq!(id, 42);
                assert_eq!(fields.category_id, Some(3));
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_required_fields() {
        let mut form = TransactionForm::new(today());
        form.open_create(today());
        assert_eq!(form.begin_submit(), Some(Err(FormError::MissingDescription)));
        assert_eq!(form.error.as_deref(), Some("Description is required"));
        assert!(!form.submitting);

        form.set_field(FormField::Description, "Café".to_string());
        assert_eq!(form.begin_submit(), Some(Err(FormError::MissingAmount)));

        form.set_field(FormField::Amount, "abc".to_string());
        assert_eq!(form.begin_submit(), Some(Err(FormError::InvalidAmount("abc".to_string()))));

        form.set_field(FormField::Amount, "-3".to_string());
        assert!(matches!(form.begin_submit(), Some(Err(FormError::InvalidAmount(_)))));

        form.set_field(FormField::Amount, "4.5".to_string());
        form.set_field(FormField::Date, String::new());
        assert_eq!(form.begin_submit(), Some(Err(FormError::MissingDate)));

        form.set_field(FormField::Date, "15/03/2024".to_string());
        assert!(matches!(form.begin_submit(), Some(Err(FormError::InvalidDate(_)))));
    }

    #[test]
    fn test_closed_form_does_not_submit() {
        let mut form = TransactionForm::new(today());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_transitions() {
        let mut form = TransactionForm::new(today());
        form.open_create(today());
        assert_eq!(form.mode(), FormMode::Create);

        form.open_edit(&existing());
        assert_eq!(form.mode(), FormMode::Edit(42));

        form.open_create(today());
        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.fields.description.is_empty());

        form.select_type(TransactionType::Income);
        assert_eq!(form.fields.kind, TransactionType::Income);

        form.close(today());
        assert_eq!(form.mode(), FormMode::Closed);
        assert_eq!(form.fields.kind, TransactionType::Expense);
    }

    #[test]
    fn test_submit_failure_keeps_form_open() {
        let mut form = filled_form();
        form.begin_submit();
        form.submit_failed("Valor é obrigatório".to_string());
        assert!(form.is_open());
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Valor é obrigatório"));
    }
}
