//! Attendance tab: today's roster with manual marking, a bulk
//! mark-remaining-absent action, and a per-member monthly drill-down.
//! Manual marks are applied optimistically and rolled back on failure.

use crate::api;
use crate::format_helpers::{current_month, format_date_human};
use crate::notify;
use crate::optimistic;
use dioxus::prelude::*;
use shared_types::{AttendanceStatus, ManualMarkRequest, TodayAttendance};
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, Card,
    CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, DialogContent, DialogDescription, DialogRoot, DialogTitle, DropdownMenu,
    DropdownMenuContent, DropdownMenuItem, DropdownMenuTrigger, Input, PageActions, PageHeader,
    PageTitle, Skeleton, avatar_initials, use_toast,
};

const MARKABLE: [AttendanceStatus; 3] = [
    AttendanceStatus::Present,
    AttendanceStatus::Absent,
    AttendanceStatus::Leave,
];

fn status_variant(status: AttendanceStatus) -> BadgeVariant {
    match status {
        AttendanceStatus::Present => BadgeVariant::Success,
        AttendanceStatus::Absent => BadgeVariant::Destructive,
        AttendanceStatus::Leave => BadgeVariant::Warning,
        AttendanceStatus::NotMarked => BadgeVariant::Neutral,
    }
}

fn count_of(rows: &[TodayAttendance], status: AttendanceStatus) -> usize {
    rows.iter().filter(|r| r.status == status).count()
}

#[component]
pub fn AttendancePanel(slug: String) -> Element {
    let toast = use_toast();
    let mut rows = use_signal(|| None::<Vec<TodayAttendance>>);
    let mut filter = use_signal(|| None::<AttendanceStatus>);
    let mut confirm_absent = use_signal(|| false);
    let mut detail_target = use_signal(|| None::<TodayAttendance>);

    let fetch_slug = slug.clone();
    let roster = use_resource(move || {
        let slug = fetch_slug.clone();
        async move { api::tenant::today_attendance(&slug).await }
    });

    use_effect(move || {
        if let Some(Ok(body)) = &*roster.read() {
            rows.set(Some(body.data.clone()));
        }
    });

    let mark = {
        let slug = slug.clone();
        move |row: TodayAttendance, status: AttendanceStatus| {
            let Some(current) = rows.read().clone() else {
                return;
            };
            let (next, snapshot) =
                optimistic::patched(&current, |r| r.user_id == row.user_id, |r| {
                    r.status = status
                });
            rows.set(Some(next));

            let slug = slug.clone();
            let body = ManualMarkRequest {
                user_id: row.user_id.clone(),
                status,
            };
            spawn(async move {
                match api::tenant::manual_mark(&slug, &body).await {
                    Ok(resp) => notify::success(toast, resp.message),
                    Err(e) => {
                        rows.set(Some(snapshot));
                        notify::failure(toast, &e);
                    }
                }
            });
        }
    };

    rsx! {
        PageHeader {
            PageTitle { "Attendance" }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: rows
                        .read()
                        .as_ref()
                        .is_none_or(|r| count_of(r, AttendanceStatus::NotMarked) == 0),
                    onclick: move |_| confirm_absent.set(true),
                    "Mark remaining absent"
                }
            }
        }

        match &*rows.read() {
            Some(list) => {
                let filtered: Vec<TodayAttendance> = match filter() {
                    Some(wanted) => list.iter().filter(|r| r.status == wanted).cloned().collect(),
                    None => list.clone(),
                };
                rsx! {
                    div { class: "stat-cards",
                        for status in [
                            AttendanceStatus::Present,
                            AttendanceStatus::Absent,
                            AttendanceStatus::Leave,
                            AttendanceStatus::NotMarked,
                        ] {
                            FilterCard {
                                status: status,
                                count: count_of(list, status),
                                selected: filter() == Some(status),
                                on_toggle: move |s: AttendanceStatus| {
                                    if filter() == Some(s) {
                                        filter.set(None);
                                    } else {
                                        filter.set(Some(s));
                                    }
                                },
                            }
                        }
                    }

                    if filtered.is_empty() {
                        Card {
                            CardContent {
                                p { class: "empty-note", "Nobody matches this filter." }
                            }
                        }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Member" }
                                DataTableColumn { "Status" }
                                DataTableColumn { "Actions" }
                            }
                            DataTableBody {
                                for row in filtered {
                                    {
                                        let detail = row.clone();
                                        let mark_row = row.clone();
                                        let mark_fn = mark.clone();
                                        rsx! {
                                            DataTableRow {
                                                DataTableCell { label: "Member",
                                                    div { class: "member-cell",
                                                        Avatar {
                                                            if let Some(pic) = row.profile_pic.as_ref() {
                                                                AvatarImage { src: pic.clone() }
                                                            }
                                                            AvatarFallback { {avatar_initials(&row.name)} }
                                                        }
                                                        div {
                                                            div { "{row.name}" }
                                                            div { class: "stat-label", "{row.email}" }
                                                        }
                                                    }
                                                }
                                                DataTableCell { label: "Status",
                                                    Badge {
                                                        variant: status_variant(row.status),
                                                        "{row.status.label()}"
                                                    }
                                                }
                                                DataTableCell { label: "Actions",
                                                    div { class: "row-actions",
                                                        DropdownMenu {
                                                            DropdownMenuTrigger { "Mark" }
                                                            DropdownMenuContent {
                                                                for (index, status) in MARKABLE.iter().copied().enumerate() {
                                                                    {
                                                                        let item_row = mark_row.clone();
                                                                        let mut item_mark = mark_fn.clone();
                                                                        rsx! {
                                                                            DropdownMenuItem::<AttendanceStatus> {
                                                                                value: status,
                                                                                index: index,
                                                                                on_select: move |picked: AttendanceStatus| {
                                                                                    item_mark(item_row.clone(), picked);
                                                                                },
                                                                                "{status.label()}"
                                                                            }
                                                                        }
                                                                    }
                                                                }
                                                            }
                                                        }
                                                        Button {
                                                            variant: ButtonVariant::Outline,
                                                            onclick: move |_| detail_target.set(Some(detail.clone())),
                                                            "History"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            None => match &*roster.read() {
                Some(Err(e)) => rsx! {
                    Card {
                        CardContent {
                            p { class: "empty-note", "{e.friendly_message()}" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: {
                                    let mut roster = roster;
                                    move |_| roster.restart()
                                },
                                "Retry"
                            }
                        }
                    }
                },
                _ => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            },
        }

        if confirm_absent() {
            MarkRemainingDialog {
                slug: slug.clone(),
                on_close: move |_| confirm_absent.set(false),
                on_done: {
                    let mut roster = roster;
                    move |_| roster.restart()
                },
            }
        }

        if let Some(row) = detail_target() {
            MonthlyDialog {
                slug: slug.clone(),
                member: row,
                on_close: move |_| detail_target.set(None),
            }
        }
    }
}

#[component]
fn FilterCard(
    status: AttendanceStatus,
    count: usize,
    selected: bool,
    on_toggle: EventHandler<AttendanceStatus>,
) -> Element {
    rsx! {
        button {
            class: "stat-card-clickable",
            "data-selected": selected,
            onclick: move |_| on_toggle.call(status),
            div { class: "stat-value", "{count}" }
            div { class: "stat-label", "{status.label()}" }
        }
    }
}

#[component]
fn MarkRemainingDialog(
    slug: String,
    on_close: EventHandler<()>,
    on_done: EventHandler<()>,
) -> Element {
    let toast = use_toast();
    let mut submitting = use_signal(|| false);

    let submit_slug = slug.clone();
    let handle_confirm = move |_| {
        let slug = submit_slug.clone();
        spawn(async move {
            submitting.set(true);
            match api::tenant::mark_remaining_absent(&slug).await {
                Ok(resp) => {
                    notify::success(toast, resp.message);
                    on_done.call(());
                    on_close.call(());
                }
                Err(e) => notify::failure(toast, &e),
            }
            submitting.set(false);
        });
    };

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Mark remaining absent" }
                DialogDescription {
                    "Every member without a mark for today will be recorded as absent."
                }
                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: submitting(),
                        onclick: handle_confirm,
                        if submitting() { "Marking..." } else { "Confirm" }
                    }
                }
            }
        }
    }
}

#[component]
fn MonthlyDialog(slug: String, member: TodayAttendance, on_close: EventHandler<()>) -> Element {
    let mut month = use_signal(current_month);

    let fetch_slug = slug.clone();
    let user_id = member.user_id.clone();
    let history = use_resource(move || {
        let slug = fetch_slug.clone();
        let user_id = user_id.clone();
        let month = month();
        async move { api::tenant::monthly_attendance(&slug, &user_id, &month).await }
    });

    rsx! {
        DialogRoot {
            open: true,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent {
                DialogTitle { "Attendance history" }
                DialogDescription { "Records for {member.name}." }
                Input {
                    label: "Month",
                    input_type: "month",
                    value: month.read().clone(),
                    on_input: move |e: FormEvent| month.set(e.value().to_string()),
                }
                match &*history.read() {
                    Some(Ok(body)) if body.attendance.is_empty() => rsx! {
                        p { class: "empty-note", "No records for this month." }
                    },
                    Some(Ok(body)) => rsx! {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Date" }
                                DataTableColumn { "Status" }
                            }
                            DataTableBody {
                                for record in body.attendance.clone() {
                                    DataTableRow {
                                        DataTableCell { label: "Date",
                                            {format_date_human(&record.date)}
                                        }
                                        DataTableCell { label: "Status",
                                            Badge {
                                                variant: status_variant(record.status),
                                                "{record.status.label()}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        p { class: "empty-note", "{e.friendly_message()}" }
                    },
                    None => rsx! {
                        div { class: "loading",
                            Skeleton {}
                            Skeleton {}
                        }
                    },
                }
                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_close.call(()),
                        "Close"
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

    fn row(id: &str, status: AttendanceStatus) -> TodayAttendance {
        TodayAttendance {
            user_id: id.to_string(),
            name: id.to_string(),
            email: format!("{id}@acme.test"),
            profile_pic: None,
            status,
        }
    }

    #[test]
    fn counts_group_by_status() {
        let rows = vec![
            row("a", AttendanceStatus::Present),
            row("b", AttendanceStatus::Present),
            row("c", AttendanceStatus::NotMarked),
        ];
        assert_eq!(count_of(&rows, AttendanceStatus::Present), 2);
        assert_eq!(count_of(&rows, AttendanceStatus::NotMarked), 1);
        assert_eq!(count_of(&rows, AttendanceStatus::Leave), 0);
    }

    #[test]
    fn manual_mark_patch_touches_one_row() {
        let rows = vec![
            row("a", AttendanceStatus::NotMarked),
            row("b", AttendanceStatus::NotMarked),
        ];
        let (next, snapshot) = optimistic::patched(
            &rows,
            |r| r.user_id == "b",
            |r| r.status = AttendanceStatus::Present,
        );
        assert_eq!(next[0].status, AttendanceStatus::NotMarked);
        assert_eq!(next[1].status, AttendanceStatus::Present);
        assert_eq!(snapshot, rows);
    }
}
