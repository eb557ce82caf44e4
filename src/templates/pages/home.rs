// templates/pages/home.rs

use crate::payload::LeadForm;
use crate::templates::{card, desktop_layout, number_field, text_field, textarea_field};
use maud::{html, Markup, PreEscaped};

/// The capture form, prefilled from a decoded snapshot (or the demo
/// defaults). Field names line up with `forms::lead_form_from_params`.
pub fn home_page(form: &LeadForm) -> Markup {
    let assignee = form.assignees.first().cloned().unwrap_or_default();
    let listing = form.listing.clone().unwrap_or_default();
    let search = form.search.clone().unwrap_or_default();
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();

    desktop_layout(
        "Lead Capture",
        html! {
            main class="container" {
                h1 { "Lead Capture API Test" }
                p class="muted" {
                    "All fields are optional. The unique endpoint ID serves as both identifier and authentication."
                }

                form id="lead-form" method="post" action="/submit" {
                    (card("API Configuration", html! {
                        (text_field("Unique Endpoint ID", "lead_channel", &form.lead_channel, "Your unique endpoint ID"))
                        p class="hint" { "This serves as both the endpoint identifier and authentication key" }
                    }))

                    (card("Contact Information", html! {
                        div class="grid" {
                            (text_field("First Name", "first_name", &form.first_name, "John"))
                            (text_field("Last Name", "last_name", &form.last_name, "Doe"))
                            (text_field("Email", "email", &form.email, "john.doe@example.com"))
                            (text_field("Phone Number", "phone_number", &form.phone_number, "(555) 123-4567"))
                        }
                    }))

                    (card("Lead Information", html! {
                        div class="grid" {
                            (text_field("Tags (comma separated)", "tags", &form.tags.join(", "), "website_inquiry"))
                            (text_field("Lead Source", "lead_source", &form.lead_source, "real_estate_website"))
                        }
                    }))

                    (card("Property Address", html! {
                        div class="grid" {
                            (text_field("Line 1", "addr_line1", &opt(&form.address.line1), "123 Main St"))
                            (text_field("Line 2", "addr_line2", &opt(&form.address.line2), ""))
                            (text_field("Unit", "addr_unit", &opt(&form.address.unit), "4B"))
                            (text_field("City", "addr_city", &opt(&form.address.city), "Burlington"))
                            (text_field("State", "addr_state", &opt(&form.address.state), "VT"))
                            (text_field("County", "addr_county", &opt(&form.address.county), ""))
                            (text_field("Postal Code", "addr_postcode", &opt(&form.address.postcode), "05401"))
                            (text_field("Country", "addr_country", &opt(&form.address.country), "USA"))
                        }
                    }))

                    (card("Assignee", html! {
                        p class="hint" { "Agent to associate with the lead, if any" }
                        div class="grid" {
                            (text_field("First Name", "assignee_first_name", &assignee.first_name, ""))
                            (text_field("Last Name", "assignee_last_name", &assignee.last_name, ""))
                            (text_field("Email", "assignee_email", &assignee.email, ""))
                            (text_field("Phone Number", "assignee_phone_number", &assignee.phone_number, ""))
                            (text_field("MLS", "assignee_mls", &assignee.mls, "nneren"))
                            (text_field("MLS ID", "assignee_mls_id", &assignee.mls_id, "AGENT789"))
                        }
                    }))

                    (card("Listing of Interest", html! {
                        div class="grid" {
                            (text_field("Listing URL", "listing_url", &listing.url, "https://example.com/listing/123"))
                            (text_field("MLS", "listing_mls", &listing.mls, "nneren"))
                            (text_field("MLS Number", "listing_mls_number", &listing.mls_number, "5039447"))
                            (text_field("Address", "listing_address", &listing.address, "25 Oakledge Drive"))
                            (number_field("Price", "listing_price", listing.price, "4750000"))
                        }
                    }))

                    (card("Search Criteria", html! {
                        div class="grid" {
                            (number_field("Min Price", "search_minimum_price", search.minimum_price, "500000"))
                            (number_field("Max Price", "search_maximum_price", search.maximum_price, "1000000"))
                            (number_field("Min Bedrooms", "search_minimum_bedrooms", search.minimum_bedrooms, "3"))
                            (number_field("Max Bedrooms", "search_maximum_bedrooms", search.maximum_bedrooms, "5"))
                            (number_field("Min Bathrooms", "search_minimum_bathrooms", search.minimum_bathrooms, "2"))
                            (number_field("Max Bathrooms", "search_maximum_bathrooms", search.maximum_bathrooms, "3"))
                            (text_field("Property Types (comma separated)", "search_property_types", &search.property_types.join(", "), "house, condo"))
                        }
                    }))

                    (card("Additional Information", html! {
                        (text_field("Referer URL", "referer_url", &form.referer_url, "https://example.com/property/123"))
                        (textarea_field("Note", "note", &form.note, "Additional notes or message..."))
                    }))

                    div class="actions" {
                        button type="submit" id="submit-btn" { "Submit Lead" }
                        a href="/" class="button-secondary" { "Clear Form" }
                    }
                }
            }
            script { (PreEscaped(SNAPSHOT_SCRIPT)) }
        },
    )
}

// Mirrors the in-progress form into location.hash so a reload or a shared
// link restores it. At load time a bare fragment is promoted to the `s`
// query parameter, which the server decodes with the session codec.
const SNAPSHOT_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('lead-form');
  if (!form) return;

  var hash = location.hash.slice(1);
  var shown = new URLSearchParams(location.search).get('s');
  if (hash && hash !== shown) {
    location.replace('/?s=' + encodeURIComponent(hash) + '#' + hash);
    return;
  }

  function val(name) {
    var el = form.elements[name];
    return el ? el.value.trim() : '';
  }
  function num(name) {
    var n = parseInt(val(name), 10);
    return isNaN(n) ? null : n;
  }
  function list(name) {
    var seen = [];
    val(name).split(',').forEach(function (part) {
      part = part.trim();
      if (part && seen.indexOf(part) < 0) seen.push(part);
    });
    return seen;
  }
  function prune(obj) {
    var out = {};
    Object.keys(obj).forEach(function (key) {
      var v = obj[key];
      if (v === null || v === '' || (Array.isArray(v) && v.length === 0)) return;
      out[key] = v;
    });
    return out;
  }

  function snapshot() {
    var model = {
      lead_channel: val('lead_channel'),
      first_name: val('first_name'),
      last_name: val('last_name'),
      email: val('email'),
      phone_number: val('phone_number'),
      tags: list('tags'),
      lead_source: val('lead_source'),
      note: val('note'),
      referer_url: val('referer_url'),
      address: prune({
        line1: val('addr_line1'), line2: val('addr_line2'), unit: val('addr_unit'),
        city: val('addr_city'), state: val('addr_state'), county: val('addr_county'),
        postcode: val('addr_postcode'), country: val('addr_country')
      }),
      assignees: [],
      listing: null,
      search: null
    };

    var assignee = {
      first_name: val('assignee_first_name'), last_name: val('assignee_last_name'),
      email: val('assignee_email'), phone_number: val('assignee_phone_number'),
      mls: val('assignee_mls'), mls_id: val('assignee_mls_id')
    };
    if (Object.keys(prune(assignee)).length) model.assignees.push(assignee);

    var listing = prune({
      url: val('listing_url'), mls: val('listing_mls'),
      mls_number: val('listing_mls_number'), address: val('listing_address'),
      price: num('listing_price')
    });
    if (Object.keys(listing).length) model.listing = listing;

    var search = prune({
      minimum_price: num('search_minimum_price'), maximum_price: num('search_maximum_price'),
      minimum_bedrooms: num('search_minimum_bedrooms'), maximum_bedrooms: num('search_maximum_bedrooms'),
      minimum_bathrooms: num('search_minimum_bathrooms'), maximum_bathrooms: num('search_maximum_bathrooms'),
      property_types: list('search_property_types')
    });
    if (Object.keys(search).length) model.search = search;

    if (!model.listing) delete model.listing;
    if (!model.search) delete model.search;

    // JSON -> UTF-8 -> base64, then URL-safe substitution, no padding.
    var json = JSON.stringify(model);
    var b64 = btoa(unescape(encodeURIComponent(json)));
    return b64.replace(/\+/g, '-').replace(/\//g, '_').replace(/=+$/, '');
  }

  form.addEventListener('input', function () {
    history.replaceState(null, '', '#' + snapshot());
  });

  // One attempt per click; the trigger is re-enabled by the next page load.
  form.addEventListener('submit', function () {
    var btn = document.getElementById('submit-btn');
    if (btn) {
      btn.disabled = true;
      btn.textContent = 'Submitting Lead...';
    }
  });
})();
"#;
