use crate::db::history::SubmissionRecord;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

/// Most recent submissions (capped server-side) plus a manual lookup for
/// leads whose submission came back as a bodyless 204.
pub fn history_page(records: &[SubmissionRecord]) -> Markup {
    desktop_layout(
        "History",
        html! {
            main class="container" {
                h1 { "Recent Submissions" }

                @if records.is_empty() {
                    p class="muted" { "No submissions recorded yet." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "When (UTC)" }
                                th { "Name" }
                                th { "Email" }
                                th { "Channel" }
                                th { "Lead" }
                            }
                        }
                        tbody {
                            @for rec in records {
                                tr {
                                    td { (rec.created_at.format("%Y-%m-%d %H:%M:%S")) }
                                    td { (rec.name) }
                                    td { (rec.email) }
                                    td { code { (rec.channel) } }
                                    td {
                                        a href=(format!("/leads/{}/activity", rec.lead_id)) {
                                            (rec.lead_id)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                (card("Track a Lead by ID", html! {
                    form method="get" action="/track" {
                        div class="field" {
                            label for="lead_id" { "Lead ID" }
                            input type="text" id="lead_id" name="lead_id" placeholder="abc-123";
                        }
                        div class="actions" {
                            button type="submit" { "Open Tracker" }
                        }
                    }
                }))
            }
        },
    )
}
