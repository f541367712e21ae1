use dioxus::prelude::*;

/// One slice of a donut chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: u32,
    /// CSS color for the slice stroke.
    pub color: String,
}

impl DonutSlice {
    pub fn new(label: impl Into<String>, value: u32, color: impl Into<String>) -> Self {
        DonutSlice {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

const RADIUS: f64 = 40.0;

/// Stroke geometry for each slice: `(dash, gap, offset)` against a circle
/// of circumference `2πr`. Slices are proportional to their share of the
/// total and tile the circle without overlap.
pub fn slice_geometry(slices: &[DonutSlice]) -> Vec<(f64, f64, f64)> {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let total: u32 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return slices.iter().map(|_| (0.0, circumference, 0.0)).collect();
    }

    let mut consumed = 0.0;
    slices
        .iter()
        .map(|slice| {
            let dash = circumference * f64::from(slice.value) / f64::from(total);
            let offset = -consumed;
            consumed += dash;
            (dash, circumference - dash, offset)
        })
        .collect()
}

/// SVG donut chart with a legend. Renders a hollow ring when every slice
/// is zero rather than collapsing.
#[component]
pub fn DonutChart(slices: Vec<DonutSlice>, #[props(default)] center_label: String) -> Element {
    let geometry = slice_geometry(&slices);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "donut-chart",
            svg {
                view_box: "0 0 100 100",
                class: "donut-chart-svg",
                circle {
                    cx: 50,
                    cy: 50,
                    r: RADIUS,
                    class: "donut-chart-track",
                }
                for (slice, (dash, gap, offset)) in slices.iter().zip(geometry.iter()) {
                    circle {
                        cx: 50,
                        cy: 50,
                        r: RADIUS,
                        class: "donut-chart-slice",
                        stroke: "{slice.color}",
                        stroke_dasharray: "{dash} {gap}",
                        stroke_dashoffset: "{offset}",
                    }
                }
                if !center_label.is_empty() {
                    text {
                        x: 50,
                        y: 54,
                        class: "donut-chart-center",
                        "{center_label}"
                    }
                }
            }
            ul { class: "donut-chart-legend",
                for slice in slices.iter() {
                    li {
                        span {
                            class: "donut-chart-swatch",
                            style: "background: {slice.color}",
                        }
                        "{slice.label}: {slice.value}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slices_tile_the_full_circle() {
        let slices = vec![
            DonutSlice::new("Active", 3, "#16a34a"),
            DonutSlice::new("Blocked", 1, "#dc2626"),
        ];
        let geometry = slice_geometry(&slices);
        let circumference = 2.0 * std::f64::consts::PI * 40.0;

        let dash_sum: f64 = geometry.iter().map(|(dash, _, _)| dash).sum();
        assert!((dash_sum - circumference).abs() < 1e-9);
        // Second slice starts where the first ends.
        assert!((geometry[1].2 + geometry[0].0).abs() < 1e-9);
    }

    #[test]
    fn all_zero_renders_empty_ring() {
        let slices = vec![
            DonutSlice::new("Present", 0, "#16a34a"),
            DonutSlice::new("Absent", 0, "#dc2626"),
        ];
        for (dash, _, _) in slice_geometry(&slices) {
            assert_eq!(dash, 0.0);
        }
    }
}
