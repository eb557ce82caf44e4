use crate::payload::ActivityType;
use crate::templates::{card, desktop_layout, number_field, text_field, textarea_field};
use maud::{html, Markup};

pub struct ActivityVm {
    pub lead_id: String,
    pub notice: Option<ActivityNotice>,
}

pub enum ActivityNotice {
    Posted { status: u16 },
    Reassigned { status: u16 },
    Failed { message: String },
}

/// Tracker panel for a captured lead: post timeline activities and
/// replace the assignee list.
pub fn activity_page(vm: &ActivityVm) -> Markup {
    desktop_layout(
        "Track Activity",
        html! {
            main class="container" {
                h1 { "Track Activity for Lead" }

                div class="banner banner-info" {
                    p { strong { "Lead ID: " } (vm.lead_id) }
                    p class="hint" {
                        "You can now send activities for this captured lead to track their behavior and engagement."
                    }
                }

                @if let Some(notice) = &vm.notice {
                    @match notice {
                        ActivityNotice::Posted { status } => {
                            div class="banner banner-success" {
                                "Activity posted successfully! (HTTP " (status) ")"
                            }
                        }
                        ActivityNotice::Reassigned { status } => {
                            div class="banner banner-success" {
                                "Assignees replaced successfully! (HTTP " (status) ")"
                            }
                        }
                        ActivityNotice::Failed { message } => {
                            div class="banner banner-error" { (message) }
                        }
                    }
                }

                form method="post" action=(format!("/leads/{}/activity", vm.lead_id)) {
                    (card("Activity Type", html! {
                        div class="field" {
                            label for="action" { "Activity Type" }
                            select id="action" name="action" {
                                @for action in ActivityType::ALL {
                                    option value=(action.as_str()) { (action.label()) }
                                }
                            }
                        }
                    }))

                    (card("Listing Details", html! {
                        p class="hint" { "Used by the listing activities (viewed, shared, favorited, removed favorite, valued)" }
                        div class="grid" {
                            (text_field("Listing URL", "listing_url", "", "https://example.com/listing/123"))
                            (text_field("MLS Number", "listing_mls_number", "", "5039447"))
                            (text_field("MLS", "listing_mls", "", "nneren"))
                            (number_field("Price", "listing_price", None, "4750000"))
                            (text_field("Street Address", "listing_street_address", "", "25 Oakledge Drive"))
                            (text_field("Cover Image URL", "listing_cover_image_url", "", "https://example.com/image.jpg"))
                        }
                    }))

                    (card("Search Details", html! {
                        p class="hint" { "Used by the search activities (created, removed, searched)" }
                        div class="grid" {
                            (text_field("Search Query", "search_query", "", "3 bedroom house"))
                            (text_field("Location", "search_location", "", "San Francisco, CA"))
                            (number_field("Min Price", "search_min_price", None, "500000"))
                            (number_field("Max Price", "search_max_price", None, "1000000"))
                            (number_field("Bedrooms", "search_bedrooms", None, "3"))
                            (number_field("Bathrooms", "search_bathrooms", None, "2"))
                        }
                    }))

                    (card("Notes", html! {
                        (textarea_field("Additional Notes (Optional)", "notes", "", "Any additional details about this activity..."))
                    }))

                    div class="actions" {
                        button type="submit" { "Post Activity" }
                    }
                }

                form method="post" action=(format!("/leads/{}/assignees", vm.lead_id)) {
                    (card("Reassign Lead", html! {
                        p class="hint" { "Replaces the lead's assignee list. Empty rows are dropped." }
                        div class="grid" {
                            (text_field("First Name", "a1_first_name", "", ""))
                            (text_field("Last Name", "a1_last_name", "", ""))
                            (text_field("Email", "a1_email", "", ""))
                            (text_field("Phone Number", "a1_phone_number", "", ""))
                            (text_field("MLS", "a1_mls", "", ""))
                            (text_field("MLS ID", "a1_mls_id", "", ""))
                        }
                        div class="grid" {
                            (text_field("First Name", "a2_first_name", "", ""))
                            (text_field("Last Name", "a2_last_name", "", ""))
                            (text_field("Email", "a2_email", "", ""))
                            (text_field("Phone Number", "a2_phone_number", "", ""))
                            (text_field("MLS", "a2_mls", "", ""))
                            (text_field("MLS ID", "a2_mls_id", "", ""))
                        }
                        div class="actions" {
                            button type="submit" { "Replace Assignees" }
                        }
                    }))
                }
            }
        },
    )
}
