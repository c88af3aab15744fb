// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dependency-free SVG line chart for the feature section.

use acme_types::content::ChartPoint;
use leptos::prelude::*;

pub const CHART_WIDTH: f64 = 400.0;
pub const CHART_HEIGHT: f64 = 200.0;
const PADDING: f64 = 16.0;

/// Maps values onto the chart box. The largest value touches the top
/// padding, zero sits on the bottom padding.
pub fn chart_coordinates(points: &[ChartPoint]) -> Vec<(f64, f64)> {
    let max = points
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);
    let inner_w = CHART_WIDTH - 2.0 * PADDING;
    let inner_h = CHART_HEIGHT - 2.0 * PADDING;
    let step = if points.len() > 1 {
        inner_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if points.len() == 1 {
                CHART_WIDTH / 2.0
            } else {
                PADDING + step * i as f64
            };
            let ratio = if max > 0.0 { p.value / max } else { 0.0 };
            (x, CHART_HEIGHT - PADDING - ratio * inner_h)
        })
        .collect()
}

pub fn polyline_points(coords: &[(f64, f64)]) -> String {
    coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn LineChart(points: Vec<ChartPoint>, #[prop(into)] caption: String) -> impl IntoView {
    let coords = chart_coordinates(&points);
    let line = polyline_points(&coords);
    let labels = points
        .into_iter()
        .zip(coords)
        .map(|(point, (x, _))| {
            view! {
                <text
                    x=format!("{x:.1}")
                    y=format!("{:.1}", CHART_HEIGHT - 2.0)
                    text-anchor="middle"
                    class="fill-zinc-500 text-[10px]"
                >
                    {point.name}
                </text>
            }
        })
        .collect_view();

    view! {
        <figure class="rounded-xl border border-zinc-200 bg-white p-6 shadow-sm dark:border-zinc-800 dark:bg-zinc-900">
            <svg
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                class="h-48 w-full text-indigo-500"
                role="img"
                aria-label=caption.clone()
            >
                <polyline
                    points=line
                    fill="none"
                    stroke="currentColor"
                    stroke-width="3"
                    stroke-linejoin="round"
                    stroke-linecap="round"
                />
                {labels}
            </svg>
            <figcaption class="mt-3 text-center text-sm text-zinc-600 dark:text-zinc-400">
                {caption}
            </figcaption>
        </figure>
    }
}
