use super::StatsResource;
use dioxus::prelude::*;
use shared_types::OwnerStats;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DonutChart, DonutSlice,
    PageHeader, PageTitle, Skeleton,
};

/// Active and blocked slices always sum to the platform total.
fn status_slices(stats: &OwnerStats) -> Vec<DonutSlice> {
    vec![
        DonutSlice::new("Active", stats.active_companies, "var(--success)"),
        DonutSlice::new("Blocked", stats.blocked_companies, "var(--destructive)"),
    ]
}

#[component]
pub fn OwnerOverviewPanel(stats: StatsResource) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Dashboard" }
        }

        match &*stats.read() {
            Some(Ok(body)) => rsx! {
                div { class: "stat-cards",
                    StatCard { label: "Total companies", value: body.total_companies }
                    StatCard { label: "Active", value: body.active_companies }
                    StatCard { label: "Blocked", value: body.blocked_companies }
                }
                Card {
                    CardHeader {
                        CardTitle { "Companies by status" }
                    }
                    CardContent {
                        DonutChart {
                            slices: status_slices(body),
                            center_label: format!("{}", body.total_companies),
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    CardContent {
                        p { class: "empty-note", "{e.friendly_message()}" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: {
                                let mut stats = stats;
                                move |_| stats.restart()
                            },
                            "Retry"
                        }
                    }
                }
            },
            None => rsx! {
                div { class: "loading",
                    Skeleton {}
                    Skeleton {}
                }
            },
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: u32) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-value", "{value}" }
                div { class: "stat-label", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chart_slices_sum_to_the_total() {
        let stats = OwnerStats {
            total_companies: 7,
            active_companies: 5,
            blocked_companies: 2,
            companies: Vec::new(),
        };
        let slices = status_slices(&stats);
        let sum: u32 = slices.iter().map(|s| s.value).sum();
        assert_eq!(sum, stats.total_companies);
        assert_eq!(slices.len(), 2);
    }
}
