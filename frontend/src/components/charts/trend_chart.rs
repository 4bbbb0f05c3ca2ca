use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::charts::{
    expense_color, income_color, TrendChartData, EXPENSE_SERIES_LABEL, INCOME_SERIES_LABEL,
};
use crate::render::{NEGATIVE_COLOR, POSITIVE_COLOR};
use crate::services::format::CurrencyFormat;
use crate::services::logging::Logger;

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 320;

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub data: TrendChartData,
    pub currency: CurrencyFormat,
}

pub struct TrendChart {
    canvas_ref: NodeRef,
}

impl Component for TrendChart {
    type Message = ();
    type Properties = TrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let props = ctx.props();
        if !props.data.is_empty() {
            self.draw_chart(&props.data, &props.currency);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-card">
                <div class="chart-title-header">
                    <h3 class="chart-title">{"Monthly Evolution"}</h3>
                    <div class="chart-legend inline">
                        <span class="legend-item">
                            <span class="legend-swatch" style={format!("background: {}", POSITIVE_COLOR)}></span>
                            {INCOME_SERIES_LABEL}
                        </span>
                        <span class="legend-item">
                            <span class="legend-swatch" style={format!("background: {}", NEGATIVE_COLOR)}></span>
                            {EXPENSE_SERIES_LABEL}
                        </span>
                    </div>
                </div>
                {if ctx.props().data.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No history available yet"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="trend-chart-canvas"
                                width={CANVAS_WIDTH.to_string()}
                                height={CANVAS_HEIGHT.to_string()}
                            ></canvas>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl TrendChart {
    fn draw_chart(&self, data: &TrendChartData, currency: &CurrencyFormat) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let Some(backend) = CanvasBackend::with_canvas_object(canvas) else {
            Logger::warn_with_component("trend-chart", "Canvas 2d context unavailable");
            return;
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let x_max = data.labels.len().saturating_sub(1).max(1) as f64;
        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.25..x_max + 0.25, 0.0..data.y_max())
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        let x_formatter = |x: &f64| label_at(&data.labels, *x);
        let y_formatter = |y: &f64| currency.format(*y);
        if chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(data.labels.len().max(2))
            .y_labels(6)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .label_style(("sans-serif", 12, &RGBColor(100, 116, 139)))
            .axis_style(&RGBColor(226, 232, 240))
            .bold_line_style(&RGBColor(241, 245, 249))
            .light_line_style(&RGBColor(248, 250, 252))
            .draw()
            .is_err()
        {
            return;
        }

        for (values, (r, g, b)) in [(&data.income, income_color()), (&data.expense, expense_color())] {
            let color = RGBColor(r, g, b);
            let points: Vec<(f64, f64)> = values
                .iter()
                .enumerate()
                .map(|(i, value)| (i as f64, *value))
                .collect();

            if chart
                .draw_series(
                    AreaSeries::new(points.iter().copied(), 0.0, color.mix(0.1))
                        .border_style(color.stroke_width(3)),
                )
                .is_err()
            {
                return;
            }
            if chart
                .draw_series(points.iter().map(|&point| Circle::new(point, 4, color.filled())))
                .is_err()
            {
                return;
            }
        }

        let _ = root.present();
    }
}

/// Month label for an x position; positions between months stay blank
fn label_at(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 0.01 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_at_whole_positions() {
        let labels = vec!["Jan/2024".to_string(), "Feb/2024".to_string()];
        assert_eq!(label_at(&labels, 0.0), "Jan/2024");
        assert_eq!(label_at(&labels, 1.0), "Feb/2024");
        assert_eq!(label_at(&labels, 0.5), "");
        assert_eq!(label_at(&labels, -1.0), "");
        assert_eq!(label_at(&labels, 2.0), "");
    }
}
