use crate::errors::ServerError;
use crate::payload::{
    ActivityListing, ActivitySearch, ActivityType, Assignee, LeadForm, LeadListing, LeadSearch,
};
use std::collections::HashMap;
use url::form_urlencoded;

/// Decodes an `application/x-www-form-urlencoded` body (or query string)
/// into a key/value map. Later duplicates win, which is fine here since
/// every field name is unique.
pub fn parse_params(bytes: &[u8]) -> HashMap<String, String> {
    form_urlencoded::parse(bytes).into_owned().collect()
}

fn text(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
}

fn opt_text(params: &HashMap<String, String>, key: &str) -> Option<String> {
    Some(text(params, key)).filter(|v| !v.is_empty())
}

// Number inputs are advisory: anything that does not parse is treated as
// not filled in rather than rejected.
fn opt_number(params: &HashMap<String, String>, key: &str) -> Option<i64> {
    params.get(key).and_then(|v| v.trim().parse::<i64>().ok())
}

fn comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the form model from the capture form's field names.
pub fn lead_form_from_params(params: &HashMap<String, String>) -> LeadForm {
    let mut form = LeadForm {
        lead_channel: text(params, "lead_channel"),
        first_name: text(params, "first_name"),
        last_name: text(params, "last_name"),
        email: text(params, "email"),
        phone_number: text(params, "phone_number"),
        lead_source: text(params, "lead_source"),
        note: text(params, "note"),
        referer_url: text(params, "referer_url"),
        ..Default::default()
    };

    for tag in comma_list(&text(params, "tags")) {
        form.add_tag(&tag);
    }

    form.address.line1 = opt_text(params, "addr_line1");
    form.address.line2 = opt_text(params, "addr_line2");
    form.address.unit = opt_text(params, "addr_unit");
    form.address.city = opt_text(params, "addr_city");
    form.address.state = opt_text(params, "addr_state");
    form.address.county = opt_text(params, "addr_county");
    form.address.postcode = opt_text(params, "addr_postcode");
    form.address.country = opt_text(params, "addr_country");

    let assignee = assignee_from(params, "assignee_");
    if assignee != Assignee::default() {
        form.assignees.push(assignee);
    }

    let listing = LeadListing {
        url: text(params, "listing_url"),
        mls: text(params, "listing_mls"),
        mls_number: text(params, "listing_mls_number"),
        address: text(params, "listing_address"),
        price: opt_number(params, "listing_price"),
    };
    if listing != LeadListing::default() {
        form.listing = Some(listing);
    }

    let search = LeadSearch {
        minimum_price: opt_number(params, "search_minimum_price"),
        maximum_price: opt_number(params, "search_maximum_price"),
        minimum_bedrooms: opt_number(params, "search_minimum_bedrooms"),
        maximum_bedrooms: opt_number(params, "search_maximum_bedrooms"),
        minimum_bathrooms: opt_number(params, "search_minimum_bathrooms"),
        maximum_bathrooms: opt_number(params, "search_maximum_bathrooms"),
        property_types: comma_list(&text(params, "search_property_types")),
    };
    if search != LeadSearch::default() {
        form.search = Some(search);
    }

    form
}

fn assignee_from(params: &HashMap<String, String>, prefix: &str) -> Assignee {
    Assignee {
        first_name: text(params, &format!("{prefix}first_name")),
        last_name: text(params, &format!("{prefix}last_name")),
        email: text(params, &format!("{prefix}email")),
        phone_number: text(params, &format!("{prefix}phone_number")),
        mls: text(params, &format!("{prefix}mls")),
        mls_id: text(params, &format!("{prefix}mls_id")),
    }
}

/// The activity panel's fields. Only the action type is mandatory.
pub struct ActivityInput {
    pub action: ActivityType,
    pub listing: ActivityListing,
    pub search: ActivitySearch,
    pub notes: String,
}

pub fn activity_from_params(
    params: &HashMap<String, String>,
) -> Result<ActivityInput, ServerError> {
    let raw_action = text(params, "action");
    let action = ActivityType::parse(&raw_action)
        .ok_or_else(|| ServerError::BadRequest(format!("Unknown activity type: {raw_action}")))?;

    Ok(ActivityInput {
        action,
        listing: ActivityListing {
            url: text(params, "listing_url"),
            mls_number: text(params, "listing_mls_number"),
            mls: text(params, "listing_mls"),
            cover_image_url: text(params, "listing_cover_image_url"),
            price: opt_number(params, "listing_price"),
            street_address: text(params, "listing_street_address"),
        },
        search: ActivitySearch {
            query: text(params, "search_query"),
            location: text(params, "search_location"),
            min_price: opt_number(params, "search_min_price"),
            max_price: opt_number(params, "search_max_price"),
            bedrooms: opt_number(params, "search_bedrooms"),
            bathrooms: opt_number(params, "search_bathrooms"),
        },
        notes: text(params, "notes"),
    })
}

/// The reassignment form carries up to two assignee rows.
pub fn assignees_from_params(params: &HashMap<String, String>) -> Vec<Assignee> {
    ["a1_", "a2_"]
        .iter()
        .map(|prefix| assignee_from(params, prefix))
        .filter(|a| *a != Assignee::default())
        .collect()
}
