use dioxus::prelude::*;

/// Horizontal step indicator for multi-step wizards. Completed steps get a
/// check mark, the current step is highlighted, later steps are muted.
#[component]
pub fn Stepper(steps: Vec<String>, active: usize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ol { class: "stepper",
            for (index, step) in steps.iter().enumerate() {
                li {
                    class: "stepper-step",
                    "data-state": step_state(index, active),
                    span { class: "stepper-marker",
                        if index < active {
                            "\u{2713}"
                        } else {
                            "{index + 1}"
                        }
                    }
                    span { class: "stepper-label", "{step}" }
                }
            }
        }
    }
}

fn step_state(index: usize, active: usize) -> &'static str {
    use std::cmp::Ordering;
    match index.cmp(&active) {
        Ordering::Less => "complete",
        Ordering::Equal => "active",
        Ordering::Greater => "upcoming",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn states_partition_around_active() {
        assert_eq!(step_state(0, 1), "complete");
        assert_eq!(step_state(1, 1), "active");
        assert_eq!(step_state(2, 1), "upcoming");
    }
}
