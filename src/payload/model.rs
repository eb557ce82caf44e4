use serde::{Deserialize, Serialize};

// form
//  ├── lead_channel (endpoint id, doubles as credential)
//  ├── first_name / last_name / email / phone_number
//  ├── tags (unique, insertion order kept)
//  ├── lead_source / note / referer_url
//  ├── address
//  │    └── building, house_num, ... , line1, line2, full
//  ├── assignees[]
//  │    └── first_name, last_name, email, phone_number, mls, mls_id
//  ├── listing
//  │    └── url, mls, mls_number, address, price
//  └── search
//       └── min/max price, beds, baths, property_types

/// In-progress form state. Everything is optional from the user's point
/// of view; empty strings mean "not filled in". The whole struct
/// round-trips through the URL-fragment snapshot codec, so partial
/// snapshots must deserialize (hence `serde(default)` everywhere).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadForm {
    pub lead_channel: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub tags: Vec<String>,
    pub lead_source: String,
    pub note: String,
    pub address: Address,
    pub referer_url: String,
    pub assignees: Vec<Assignee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing: Option<LeadListing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<LeadSearch>,
}

impl LeadForm {
    /// Prefilled demo values matching the hosted example channel.
    pub fn demo() -> Self {
        LeadForm {
            lead_channel: "54a57918-ad9b-4adb-a35a-9232bf78d734".to_string(),
            tags: vec!["website_inquiry".to_string()],
            lead_source: "real_estate_website".to_string(),
            ..Default::default()
        }
    }

    /// Tags behave as a set: adding an already-present tag is a no-op.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }
}

/// Structured postal address accepted by the webhook. Every sub-field is
/// optional; absent fields never reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qual: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suftype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sufdir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruralroute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(rename = "box", skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}

/// Agent/team member attached to a lead for ownership and notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assignee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub mls: String,
    pub mls_id: String,
}

impl Assignee {
    /// An assignee counts only if it carries at least one way to reach or
    /// name a person. MLS identifiers alone do not qualify.
    pub fn is_contactable(&self) -> bool {
        !self.first_name.is_empty()
            || !self.last_name.is_empty()
            || !self.email.is_empty()
            || !self.phone_number.is_empty()
    }
}

/// Listing the lead asked about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadListing {
    pub url: String,
    pub mls: String,
    pub mls_number: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

/// Search criteria the lead signed up with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_bedrooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_bedrooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_bathrooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_bathrooms: Option<i64>,
    pub property_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tag_dedupes() {
        let mut form = LeadForm::default();
        form.add_tag("Lead");
        form.add_tag("Lead");
        assert_eq!(form.tags, vec!["Lead".to_string()]);
    }

    #[test]
    fn add_tag_trims_and_skips_blank() {
        let mut form = LeadForm::default();
        form.add_tag("  open house  ");
        form.add_tag("");
        form.add_tag("   ");
        assert_eq!(form.tags, vec!["open house".to_string()]);
    }

    #[test]
    fn add_tag_keeps_insertion_order() {
        let mut form = LeadForm::default();
        form.add_tag("b");
        form.add_tag("a");
        form.add_tag("b");
        assert_eq!(form.tags, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn partial_snapshot_deserializes_with_defaults() {
        let form: LeadForm = serde_json::from_str(r#"{"first_name":"Jane"}"#).unwrap();
        assert_eq!(form.first_name, "Jane");
        assert!(form.lead_channel.is_empty());
        assert!(form.tags.is_empty());
        assert!(form.listing.is_none());
    }

    #[test]
    fn address_box_field_round_trips_under_wire_name() {
        let addr = Address {
            po_box: Some("PO 12".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&addr).unwrap();
        assert_eq!(json["box"], "PO 12");
        let back: Address = serde_json::from_value(json).unwrap();
        assert_eq!(back, addr);
    }
}
