use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub struct SubmitResultVm {
    pub endpoint: String,
    pub payload_pretty: String,
    /// Encoded form snapshot, so the result page can offer a share link
    /// that restores the submitted form.
    pub snapshot: String,
    pub outcome: SubmitOutcome,
}

pub enum SubmitOutcome {
    Accepted {
        status: u16,
        body_pretty: Option<String>,
        lead_id: Option<String>,
    },
    Failed {
        message: String,
    },
}

pub fn result_page(vm: &SubmitResultVm) -> Markup {
    desktop_layout(
        "Submission Result",
        html! {
            main class="container" {
                h1 { "Submission Result" }

                @match &vm.outcome {
                    SubmitOutcome::Accepted { status, body_pretty, lead_id } => {
                        div class="banner banner-success" {
                            "Lead submitted successfully! (HTTP " (status) ")"
                        }

                        @match lead_id {
                            Some(id) => {
                                (card("Captured Lead", html! {
                                    p { "Lead ID: " strong { (id) } }
                                    p {
                                        a href=(format!("/leads/{id}/activity")) { "Track activity for this lead" }
                                    }
                                }))
                            }
                            None => {
                                (card("Captured Lead", html! {
                                    p class="muted" {
                                        "The response carried no lead ID, so this submission was not added to the history. "
                                        "Use the form on the " a href="/history" { "history page" } " if you know the ID."
                                    }
                                }))
                            }
                        }

                        @if let Some(body) = body_pretty {
                            (card("API Response", html! {
                                pre { (body) }
                            }))
                        }
                    }
                    SubmitOutcome::Failed { message } => {
                        div class="banner banner-error" {
                            "Submission failed: " (message)
                        }
                    }
                }

                (card("Request", html! {
                    p { "Endpoint: " code { (vm.endpoint) } }
                    pre { (vm.payload_pretty) }
                }))

                (card("Share", html! {
                    p {
                        "This link restores the form exactly as submitted: "
                        a href=(format!("/?s={}#{}", vm.snapshot, vm.snapshot)) { "share link" }
                    }
                }))

                p { a href=(format!("/#{}", vm.snapshot)) { "Back to the form" } }
            }
        },
    )
}
