use crate::payload::model::{Address, Assignee, LeadForm, LeadListing, LeadSearch};
use serde_json::{Map, Value};

/// Builds the minimal JSON object the webhook accepts.
///
/// Only present, non-empty fields make it into the output. Nested objects
/// (address, listing, search, each assignee) are included only when at
/// least one sub-field survives the same filtering.
pub fn build_lead_payload(form: &LeadForm) -> Value {
    let mut payload = Map::new();

    put_str(&mut payload, "first_name", &form.first_name);
    put_str(&mut payload, "last_name", &form.last_name);
    put_str(&mut payload, "email", &form.email);
    put_str(&mut payload, "phone_number", &form.phone_number);

    if !form.tags.is_empty() {
        // The webhook expects the key "tag" even though it is a list.
        payload.insert(
            "tag".to_string(),
            Value::Array(form.tags.iter().cloned().map(Value::String).collect()),
        );
    }

    put_str(&mut payload, "lead_source", &form.lead_source);
    put_str(&mut payload, "note", &form.note);

    if let Some(address) = address_object(&form.address) {
        payload.insert("address".to_string(), address);
    }

    put_str(&mut payload, "referer_url", &form.referer_url);

    let assignees: Vec<Value> = form
        .assignees
        .iter()
        .filter(|a| a.is_contactable())
        .map(assignee_object)
        .collect();
    if !assignees.is_empty() {
        payload.insert("assignees".to_string(), Value::Array(assignees));
    }

    if let Some(listing) = form.listing.as_ref().and_then(listing_object) {
        payload.insert("listing".to_string(), listing);
    }
    if let Some(search) = form.search.as_ref().and_then(search_object) {
        payload.insert("search".to_string(), search);
    }

    Value::Object(payload)
}

/// Body for `PUT /leads/{id}/assignees`: the filtered assignee array.
/// Same qualification rule as the lead payload.
pub fn build_assignees_payload(assignees: &[Assignee]) -> Value {
    Value::Array(
        assignees
            .iter()
            .filter(|a| a.is_contactable())
            .map(assignee_object)
            .collect(),
    )
}

fn put_str(obj: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        obj.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn put_opt_str(obj: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        obj.insert(key.to_string(), Value::String(v.to_string()));
    }
}

fn put_i64(obj: &mut Map<String, Value>, key: &str, value: Option<i64>) {
    if let Some(v) = value {
        obj.insert(key.to_string(), Value::Number(v.into()));
    }
}

fn non_empty(obj: Map<String, Value>) -> Option<Value> {
    if obj.is_empty() {
        None
    } else {
        Some(Value::Object(obj))
    }
}

fn address_object(address: &Address) -> Option<Value> {
    let mut obj = Map::new();
    put_opt_str(&mut obj, "building", &address.building);
    put_opt_str(&mut obj, "house_num", &address.house_num);
    put_opt_str(&mut obj, "predir", &address.predir);
    put_opt_str(&mut obj, "qual", &address.qual);
    put_opt_str(&mut obj, "pretype", &address.pretype);
    put_opt_str(&mut obj, "name", &address.name);
    put_opt_str(&mut obj, "suftype", &address.suftype);
    put_opt_str(&mut obj, "sufdir", &address.sufdir);
    put_opt_str(&mut obj, "ruralroute", &address.ruralroute);
    put_opt_str(&mut obj, "extra", &address.extra);
    put_opt_str(&mut obj, "city", &address.city);
    put_opt_str(&mut obj, "state", &address.state);
    put_opt_str(&mut obj, "county", &address.county);
    put_opt_str(&mut obj, "country", &address.country);
    put_opt_str(&mut obj, "postcode", &address.postcode);
    put_opt_str(&mut obj, "box", &address.po_box);
    put_opt_str(&mut obj, "unit", &address.unit);
    put_opt_str(&mut obj, "line1", &address.line1);
    put_opt_str(&mut obj, "line2", &address.line2);
    put_opt_str(&mut obj, "full", &address.full);
    non_empty(obj)
}

fn assignee_object(assignee: &Assignee) -> Value {
    let mut obj = Map::new();
    put_str(&mut obj, "first_name", &assignee.first_name);
    put_str(&mut obj, "last_name", &assignee.last_name);
    put_str(&mut obj, "email", &assignee.email);
    put_str(&mut obj, "phone_number", &assignee.phone_number);
    put_str(&mut obj, "mls", &assignee.mls);
    put_str(&mut obj, "mls_id", &assignee.mls_id);
    Value::Object(obj)
}

fn listing_object(listing: &LeadListing) -> Option<Value> {
    let mut obj = Map::new();
    put_str(&mut obj, "url", &listing.url);
    put_str(&mut obj, "mls", &listing.mls);
    put_str(&mut obj, "mls_number", &listing.mls_number);
    put_str(&mut obj, "address", &listing.address);
    put_i64(&mut obj, "price", listing.price);
    non_empty(obj)
}

fn search_object(search: &LeadSearch) -> Option<Value> {
    let mut obj = Map::new();
    put_i64(&mut obj, "minimum_price", search.minimum_price);
    put_i64(&mut obj, "maximum_price", search.maximum_price);
    put_i64(&mut obj, "minimum_bedrooms", search.minimum_bedrooms);
    put_i64(&mut obj, "maximum_bedrooms", search.maximum_bedrooms);
    put_i64(&mut obj, "minimum_bathrooms", search.minimum_bathrooms);
    put_i64(&mut obj, "maximum_bathrooms", search.maximum_bathrooms);
    if !search.property_types.is_empty() {
        obj.insert(
            "property_types".to_string(),
            Value::Array(
                search
                    .property_types
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
        );
    }
    non_empty(obj)
}

/// Also used by the activity builder: walk a payload and list every path
/// holding a null or empty-string value. Empty means a filtering bug.
#[cfg(test)]
pub fn empty_value_paths(value: &Value) -> Vec<String> {
    fn walk(value: &Value, path: &str, out: &mut Vec<String>) {
        match value {
            Value::Null => out.push(path.to_string()),
            Value::String(s) if s.is_empty() => out.push(path.to_string()),
            Value::Object(map) => {
                if map.is_empty() {
                    out.push(path.to_string());
                }
                for (k, v) in map {
                    walk(v, &format!("{path}.{k}"), out);
                }
            }
            Value::Array(items) => {
                if items.is_empty() {
                    out.push(path.to_string());
                }
                for (i, v) in items.iter().enumerate() {
                    walk(v, &format!("{path}[{i}]"), out);
                }
            }
            _ => {}
        }
    }

    let mut out = Vec::new();
    if let Value::Object(map) = value {
        for (k, v) in map {
            walk(v, k, &mut out);
        }
    }
    out
}
