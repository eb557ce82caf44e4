use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Labelled single-line input. Every field in the demo is optional, so
/// nothing here is marked required.
pub fn text_field(label: &str, name: &str, value: &str, placeholder: &str) -> Markup {
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="text" id=(name) name=(name) value=(value) placeholder=(placeholder);
        }
    }
}

pub fn number_field(label: &str, name: &str, value: Option<i64>, placeholder: &str) -> Markup {
    let value = value.map(|v| v.to_string()).unwrap_or_default();
    html! {
        div class="field" {
            label for=(name) { (label) }
            input type="number" id=(name) name=(name) value=(value) placeholder=(placeholder);
        }
    }
}

pub fn textarea_field(label: &str, name: &str, value: &str, placeholder: &str) -> Markup {
    html! {
        div class="field field-wide" {
            label for=(name) { (label) }
            textarea id=(name) name=(name) rows="4" placeholder=(placeholder) { (value) }
        }
    }
}
