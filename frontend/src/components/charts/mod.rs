pub mod category_chart;
pub mod trend_chart;

pub use category_chart::CategoryChart;
pub use trend_chart::TrendChart;
