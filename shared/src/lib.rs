use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned transaction identifier
pub type TransactionId = i64;

/// Server-assigned category identifier
pub type CategoryId = i64;

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Response envelope used by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Whether a transaction adds or removes money
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "receita")]
    Income,
    #[default]
    #[serde(rename = "despesa")]
    Expense,
}

impl TransactionType {
    /// Wire value sent in request bodies and query strings
    pub fn as_wire(&self) -> &'static str {
        match self {
            TransactionType::Income => "receita",
            TransactionType::Expense => "despesa",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "receita" => Some(TransactionType::Income),
            "despesa" => Some(TransactionType::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

/// Spending/income category. Reference data, loaded once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "nome")]
    pub name: String,
    /// Glyph shown next to the name
    #[serde(rename = "icone", default, deserialize_with = "null_as_default")]
    pub icon: String,
    /// Display color as a `#rrggbb` string
    #[serde(rename = "cor", default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "ativo", default = "default_active", deserialize_with = "active_flag")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|flag| flag.unwrap_or(true))
}

/// A single income or expense record, as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "descricao")]
    pub description: String,
    /// Amount in currency units, always positive; the sign comes from `kind`
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "categoria_id", default)]
    pub category_id: Option<CategoryId>,
    /// Category embedded by the backend when the reference resolves
    #[serde(rename = "categoria", default)]
    pub category: Option<Category>,
    #[serde(rename = "tipo", default, deserialize_with = "null_as_default")]
    pub kind: TransactionType,
    #[serde(rename = "forma_pagamento", default)]
    pub payment_method: Option<String>,
    #[serde(rename = "observacao", default)]
    pub notes: Option<String>,
    #[serde(rename = "recorrente", default, deserialize_with = "null_as_default")]
    pub recurring: bool,
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionFields {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "categoria_id")]
    pub category_id: Option<CategoryId>,
    #[serde(rename = "tipo")]
    pub kind: TransactionType,
    #[serde(rename = "forma_pagamento")]
    pub payment_method: Option<String>,
}

/// The (month, year) pair scoping every period query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    pub month: u32,
    pub year: i32,
}

impl Filter {
    /// Returns `None` unless `month` is in 1..=12
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { month, year })
    }

    /// Query string fragment understood by the period endpoints
    pub fn query(&self) -> String {
        format!("mes={}&ano={}", self.month, self.year)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

/// Aggregate totals for a period, computed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "mes", default)]
    pub month: u32,
    #[serde(rename = "ano", default)]
    pub year: i32,
    #[serde(rename = "total_receitas")]
    pub total_income: f64,
    #[serde(rename = "total_despesas")]
    pub total_expense: f64,
    #[serde(rename = "saldo")]
    pub balance: f64,
    #[serde(rename = "quantidade_transacoes")]
    pub transaction_count: u32,
}

/// One slice of the category breakdown report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "categoria_id")]
    pub category_id: CategoryId,
    #[serde(rename = "categoria_nome")]
    pub category_name: String,
    #[serde(rename = "cor", default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(rename = "icone", default, deserialize_with = "null_as_default")]
    pub icon: String,
    pub total: f64,
    #[serde(rename = "quantidade", default)]
    pub count: u32,
    #[serde(rename = "percentual", default)]
    pub percentage: f64,
}

/// Per-category totals for a period ("por-categoria")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    #[serde(rename = "mes", default)]
    pub month: u32,
    #[serde(rename = "ano", default)]
    pub year: i32,
    #[serde(rename = "tipo", default, deserialize_with = "null_as_default")]
    pub kind: TransactionType,
    #[serde(rename = "total_geral", default)]
    pub grand_total: f64,
    #[serde(rename = "categorias", default)]
    pub categories: Vec<CategoryTotal>,
}

/// One month of the trailing income/expense series ("evolucao")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    #[serde(rename = "mes")]
    pub month: u32,
    #[serde(rename = "ano")]
    pub year: i32,
    /// Backend-formatted label such as `Mar/2024`
    #[serde(rename = "mes_nome")]
    pub label: String,
    #[serde(rename = "receitas", default)]
    pub income: f64,
    #[serde(rename = "despesas", default)]
    pub expense: f64,
    #[serde(rename = "saldo", default)]
    pub balance: f64,
}

/// Largest expenses of a period ("maiores-gastos")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopExpenses {
    #[serde(rename = "mes", default)]
    pub month: u32,
    #[serde(rename = "ano", default)]
    pub year: i32,
    #[serde(rename = "gastos", default)]
    pub expenses: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodTotal {
    #[serde(rename = "forma_pagamento")]
    pub payment_method: String,
    pub total: f64,
    #[serde(rename = "quantidade", default)]
    pub count: u32,
    #[serde(rename = "percentual", default)]
    pub percentage: f64,
}

/// Expense totals grouped by payment method ("por-forma-pagamento")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodBreakdown {
    #[serde(rename = "mes", default)]
    pub month: u32,
    #[serde(rename = "ano", default)]
    pub year: i32,
    #[serde(rename = "total_geral", default)]
    pub grand_total: f64,
    #[serde(rename = "formas_pagamento", default)]
    pub methods: Vec<PaymentMethodTotal>,
}
