//! Chart adapter: turns report payloads into chart datasets.
//!
//! The canvas drawing lives in `components::charts`; this module only decides
//! labels, values, colors and slice geometry.

use std::f64::consts::PI;

use shared::{CategoryBreakdown, TrendPoint};

use crate::render::{NEGATIVE_COLOR, POSITIVE_COLOR, UNCATEGORIZED_COLOR};

pub const INCOME_SERIES_LABEL: &str = "Income";
pub const EXPENSE_SERIES_LABEL: &str = "Expenses";

/// Dataset of the category breakdown (doughnut) chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// One `#rrggbb` color per slice, the category's own display color
    pub colors: Vec<String>,
    pub percentages: Vec<f64>,
}

impl CategoryChartData {
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| *v <= 0.0)
    }
}

pub fn category_chart_data(breakdown: Option<&CategoryBreakdown>) -> CategoryChartData {
    let Some(breakdown) = breakdown else {
        return CategoryChartData::default();
    };

    let total: f64 = breakdown.categories.iter().map(|c| c.total.max(0.0)).sum();
    let mut data = CategoryChartData::default();
    for slice in &breakdown.categories {
        data.labels.push(slice.category_name.clone());
        data.values.push(slice.total);
        data.colors.push(if slice.color.trim().is_empty() {
            UNCATEGORIZED_COLOR.to_string()
        } else {
            slice.color.clone()
        });
        data.percentages.push(if slice.percentage > 0.0 {
            slice.percentage
        } else if total > 0.0 {
            slice.total.max(0.0) / total * 100.0
        } else {
            0.0
        });
    }
    data
}

/// Dataset of the monthly trend (dual line) chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendChartData {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

impl TrendChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Upper bound of the y axis: the largest value plus 10%, at least 1
    pub fn y_max(&self) -> f64 {
        let max = self
            .income
            .iter()
            .chain(self.expense.iter())
            .copied()
            .fold(0.0_f64, f64::max);
        (max * 1.1).max(1.0)
    }
}

pub fn trend_chart_data(points: &[TrendPoint]) -> TrendChartData {
    TrendChartData {
        labels: points.iter().map(|p| p.label.clone()).collect(),
        income: points.iter().map(|p| p.income).collect(),
        expense: points.iter().map(|p| p.expense).collect(),
    }
}

pub fn income_color() -> (u8, u8, u8) {
    parse_hex_color(POSITIVE_COLOR).unwrap_or((16, 185, 129))
}

pub fn expense_color() -> (u8, u8, u8) {
    parse_hex_color(NEGATIVE_COLOR).unwrap_or((244, 63, 94))
}

/// Parse `#rrggbb` or `#rgb`
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#').filter(|hex| hex.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|c| c * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// Start/end angles (radians, clockwise from 12 o'clock) for each slice.
/// Negative values get an empty slice.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 {
                value.max(0.0) / total * 2.0 * PI
            } else {
                0.0
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}
