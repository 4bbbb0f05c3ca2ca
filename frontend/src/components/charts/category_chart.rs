use std::f64::consts::PI;

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::charts::{parse_hex_color, slice_angles, CategoryChartData};
use crate::render::UNCATEGORIZED_COLOR;
use crate::services::format::format_percentage;
use crate::services::logging::Logger;

const CANVAS_SIZE: u32 = 320;
/// Inner radius as a fraction of the outer one
const CUTOUT: f64 = 0.6;
/// Angular resolution of the arcs
const ARC_STEP: f64 = PI / 90.0;

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub data: CategoryChartData,
}

pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // Re-render, `rendered` then redraws the whole canvas
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().data.is_empty() {
            self.draw_chart(&ctx.props().data);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let data = &ctx.props().data;

        html! {
            <div class="chart-card">
                <h3 class="chart-title">{"Expenses by Category"}</h3>
                {if data.is_empty() {
                    html! {
                        <div class="chart-empty">
                            <p>{"No expenses in this period"}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="chart-content doughnut">
                            <canvas
                                ref={self.canvas_ref.clone()}
                                class="category-chart-canvas"
                                width={CANVAS_SIZE.to_string()}
                                height={CANVAS_SIZE.to_string()}
                            ></canvas>
                            <ul class="chart-legend">
                                {for data.labels.iter().enumerate().map(|(i, label)| html! {
                                    <li>
                                        <span class="legend-swatch" style={format!("background: {}", data.colors[i])}></span>
                                        <span class="legend-label">{label}</span>
                                        <span class="legend-value">{format_percentage(data.percentages[i])}</span>
                                    </li>
                                })}
                            </ul>
                        </div>
                    }
                }}
            </div>
        }
    }
}

impl CategoryChart {
    fn draw_chart(&self, data: &CategoryChartData) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        canvas.set_width(CANVAS_SIZE);
        canvas.set_height(CANVAS_SIZE);

        let Some(backend) = CanvasBackend::with_canvas_object(canvas) else {
            Logger::warn_with_component("category-chart", "Canvas 2d context unavailable");
            return;
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let (width, height) = root.dim_in_pixel();
        let center = ((width / 2) as i32, (height / 2) as i32);
        let outer = f64::from(width.min(height)) / 2.0 - 8.0;
        let inner = outer * CUTOUT;
        let fallback = parse_hex_color(UNCATEGORIZED_COLOR).unwrap_or((100, 116, 139));

        for (&(start, end), color) in slice_angles(&data.values).iter().zip(&data.colors) {
            if end <= start {
                continue;
            }
            let (r, g, b) = parse_hex_color(color).unwrap_or(fallback);
            let points = segment_points(center, outer, inner, start, end);
            if root
                .draw(&Polygon::new(points.clone(), RGBColor(r, g, b).filled()))
                .is_err()
            {
                return;
            }
            // Thin white outline separates neighbouring slices
            let mut outline = points;
            if let Some(first) = outline.first().copied() {
                outline.push(first);
            }
            let _ = root.draw(&PathElement::new(outline, WHITE.stroke_width(2)));
        }

        let _ = root.present();
    }
}

/// Outline of one ring segment: the outer arc forward, then the inner arc back
fn segment_points(
    center: (i32, i32),
    outer: f64,
    inner: f64,
    start: f64,
    end: f64,
) -> Vec<(i32, i32)> {
    let steps = (((end - start) / ARC_STEP).ceil() as usize).max(1);
    let point = |radius: f64, angle: f64| {
        (
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 + (radius * angle.sin()).round() as i32,
        )
    };
    let angle_at = |i: usize| start + (end - start) * i as f64 / steps as f64;

    let mut points = Vec::with_capacity(2 * (steps + 1));
    points.extend((0..=steps).map(|i| point(outer, angle_at(i))));
    points.extend((0..=steps).rev().map(|i| point(inner, angle_at(i))));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_segment_outline() {
        // 12 o'clock to 3 o'clock
        let points = segment_points((100, 100), 50.0, 25.0, -PI / 2.0, 0.0);

        assert_eq!(points.len() % 2, 0);
        assert_eq!(points[0], (100, 50));
        assert_eq!(points[points.len() / 2 - 1], (150, 100));
        assert_eq!(points[points.len() / 2], (125, 100));
        assert_eq!(points[points.len() - 1], (100, 75));
    }

    #[test]
    fn test_tiny_slice_still_has_a_shape() {
        let points = segment_points((0, 0), 10.0, 5.0, 0.0, 0.001);
        assert_eq!(points.len(), 4);
    }
}
