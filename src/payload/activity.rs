use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Timeline event types the remote API understands. Five of them describe
/// an interaction with a specific listing, three with a saved search, and
/// the account events carry no sub-object at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    ContactViewedListing,
    ContactSharedListing,
    ContactFavoritedListing,
    ContactRemovedFavoriteListing,
    ContactValuedListing,
    ContactSignedUp,
    ContactLoggedIn,
    ContactCreatedSearch,
    ContactRemovedSearch,
    ContactSearchedListings,
}

impl ActivityType {
    pub const ALL: [ActivityType; 10] = [
        ActivityType::ContactViewedListing,
        ActivityType::ContactSharedListing,
        ActivityType::ContactFavoritedListing,
        ActivityType::ContactRemovedFavoriteListing,
        ActivityType::ContactValuedListing,
        ActivityType::ContactSignedUp,
        ActivityType::ContactLoggedIn,
        ActivityType::ContactCreatedSearch,
        ActivityType::ContactRemovedSearch,
        ActivityType::ContactSearchedListings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::ContactViewedListing => "ContactViewedListing",
            ActivityType::ContactSharedListing => "ContactSharedListing",
            ActivityType::ContactFavoritedListing => "ContactFavoritedListing",
            ActivityType::ContactRemovedFavoriteListing => "ContactRemovedFavoriteListing",
            ActivityType::ContactValuedListing => "ContactValuedListing",
            ActivityType::ContactSignedUp => "ContactSignedUp",
            ActivityType::ContactLoggedIn => "ContactLoggedIn",
            ActivityType::ContactCreatedSearch => "ContactCreatedSearch",
            ActivityType::ContactRemovedSearch => "ContactRemovedSearch",
            ActivityType::ContactSearchedListings => "ContactSearchedListings",
        }
    }

    pub fn parse(s: &str) -> Option<ActivityType> {
        ActivityType::ALL.iter().copied().find(|a| a.as_str() == s)
    }

    /// Short label shown in the tracker's dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::ContactViewedListing => "Viewed Listing",
            ActivityType::ContactSharedListing => "Shared Listing",
            ActivityType::ContactFavoritedListing => "Favorited Listing",
            ActivityType::ContactRemovedFavoriteListing => "Removed Favorite",
            ActivityType::ContactValuedListing => "Valued Home",
            ActivityType::ContactSignedUp => "Signed Up",
            ActivityType::ContactLoggedIn => "Logged In",
            ActivityType::ContactCreatedSearch => "Created Search",
            ActivityType::ContactRemovedSearch => "Removed Search",
            ActivityType::ContactSearchedListings => "Searched Listings",
        }
    }

    pub fn requires_listing(&self) -> bool {
        matches!(
            self,
            ActivityType::ContactViewedListing
                | ActivityType::ContactSharedListing
                | ActivityType::ContactFavoritedListing
                | ActivityType::ContactRemovedFavoriteListing
                | ActivityType::ContactValuedListing
        )
    }

    pub fn requires_search(&self) -> bool {
        matches!(
            self,
            ActivityType::ContactCreatedSearch
                | ActivityType::ContactRemovedSearch
                | ActivityType::ContactSearchedListings
        )
    }
}

/// Listing context for the listing-flavored activity types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityListing {
    pub url: String,
    pub mls_number: String,
    pub mls: String,
    pub cover_image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    pub street_address: String,
}

/// Search context for the search-flavored activity types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitySearch {
    pub query: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<i64>,
}

/// Builds the `{action, listing?, search?, notes?}` timeline body. The
/// sub-object matching the action type is attached only when it carries
/// at least one filled field; the other one is dropped regardless of what
/// the form submitted.
pub fn build_activity_payload(
    action: ActivityType,
    listing: &ActivityListing,
    search: &ActivitySearch,
    notes: &str,
) -> Value {
    let mut payload = Map::new();
    payload.insert(
        "action".to_string(),
        Value::String(action.as_str().to_string()),
    );

    if action.requires_listing() {
        if let Some(listing) = listing_object(listing) {
            payload.insert("listing".to_string(), listing);
        }
    }
    if action.requires_search() {
        if let Some(search) = search_object(search) {
            payload.insert("search".to_string(), search);
        }
    }
    if !notes.is_empty() {
        payload.insert("notes".to_string(), Value::String(notes.to_string()));
    }

    Value::Object(payload)
}

fn put_str(obj: &mut Map<String, Value>, key: &str, value: &str) {
    if !value.is_empty() {
        obj.insert(key.to_string(), Value::String(value.to_string()));
    }
}

fn listing_object(listing: &ActivityListing) -> Option<Value> {
    let mut obj = Map::new();
    put_str(&mut obj, "url", &listing.url);
    put_str(&mut obj, "mls_number", &listing.mls_number);
    put_str(&mut obj, "mls", &listing.mls);
    put_str(&mut obj, "cover_image_url", &listing.cover_image_url);
    if let Some(price) = listing.price {
        obj.insert("price".to_string(), Value::Number(price.into()));
    }
    if !listing.street_address.is_empty() {
        obj.insert(
            "property".to_string(),
            serde_json::json!({
                "address": { "street_address": listing.street_address }
            }),
        );
    }
    if obj.is_empty() {
        None
    } else {
        Some(Value::Object(obj))
    }
}

fn search_object(search: &ActivitySearch) -> Option<Value> {
    let mut obj = Map::new();
    put_str(&mut obj, "query", &search.query);
    put_str(&mut obj, "location", &search.location);
    for (key, value) in [
        ("min_price", search.min_price),
        ("max_price", search.max_price),
        ("bedrooms", search.bedrooms),
        ("bathrooms", search.bathrooms),
    ] {
        if let Some(v) = value {
            obj.insert(key.to_string(), Value::Number(v.into()));
        }
    }
    if obj.is_empty() {
        None
    } else {
        Some(Value::Object(obj))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::builder::empty_value_paths;

    fn sample_listing() -> ActivityListing {
        ActivityListing {
            url: "https://example.com/listing/123".to_string(),
            mls_number: "5039447".to_string(),
            mls: "nneren".to_string(),
            cover_image_url: String::new(),
            price: Some(4_750_000),
            street_address: "25 Oakledge Drive".to_string(),
        }
    }

    fn sample_search() -> ActivitySearch {
        ActivitySearch {
            query: "3 bedroom house".to_string(),
            location: "San Francisco, CA".to_string(),
            min_price: Some(500_000),
            max_price: Some(1_000_000),
            bedrooms: Some(3),
            bathrooms: Some(2),
        }
    }

    #[test]
    fn every_action_round_trips_through_parse() {
        for action in ActivityType::ALL {
            assert_eq!(ActivityType::parse(action.as_str()), Some(action));
        }
        assert_eq!(ActivityType::parse("ContactDidSomething"), None);
    }

    #[test]
    fn listing_actions_attach_listing_only() {
        let payload = build_activity_payload(
            ActivityType::ContactViewedListing,
            &sample_listing(),
            &sample_search(),
            "",
        );
        assert_eq!(payload["action"], "ContactViewedListing");
        assert!(payload.get("listing").is_some());
        assert!(payload.get("search").is_none());
        assert!(payload.get("notes").is_none());
    }

    #[test]
    fn search_actions_attach_search_only() {
        let payload = build_activity_payload(
            ActivityType::ContactCreatedSearch,
            &sample_listing(),
            &sample_search(),
            "",
        );
        assert!(payload.get("listing").is_none());
        assert_eq!(
            payload["search"],
            serde_json::json!({
                "query": "3 bedroom house",
                "location": "San Francisco, CA",
                "min_price": 500_000,
                "max_price": 1_000_000,
                "bedrooms": 3,
                "bathrooms": 2,
            })
        );
    }

    #[test]
    fn account_actions_carry_no_sub_object() {
        for action in [ActivityType::ContactSignedUp, ActivityType::ContactLoggedIn] {
            let payload =
                build_activity_payload(action, &sample_listing(), &sample_search(), "welcome");
            assert!(payload.get("listing").is_none());
            assert!(payload.get("search").is_none());
            assert_eq!(payload["notes"], "welcome");
        }
    }

    #[test]
    fn street_address_nests_under_property() {
        let payload = build_activity_payload(
            ActivityType::ContactFavoritedListing,
            &sample_listing(),
            &ActivitySearch::default(),
            "",
        );
        assert_eq!(
            payload["listing"]["property"]["address"]["street_address"],
            "25 Oakledge Drive"
        );
        // Empty cover image must not show up.
        assert!(payload["listing"].get("cover_image_url").is_none());
    }

    #[test]
    fn hollow_listing_is_dropped_even_for_listing_actions() {
        let payload = build_activity_payload(
            ActivityType::ContactViewedListing,
            &ActivityListing::default(),
            &ActivitySearch::default(),
            "",
        );
        assert_eq!(payload, serde_json::json!({"action": "ContactViewedListing"}));
    }

    #[test]
    fn activity_payloads_never_contain_empty_values() {
        for action in ActivityType::ALL {
            let payload =
                build_activity_payload(action, &sample_listing(), &sample_search(), "note");
            assert_eq!(empty_value_paths(&payload), Vec::<String>::new());
        }
    }
}
