use crate::db::history::{recent_submissions, record_submission, SubmissionRecord};
use crate::db::Database;
use crate::errors::{ResultResp, ServerError};
use crate::forms;
use crate::payload::{build_activity_payload, build_assignees_payload, build_lead_payload, LeadForm};
use crate::rechat::RechatClient;
use crate::responses::{html_response, openapi_response, stylesheet_response};
use crate::session;
use crate::templates::pages::{
    activity_page, history_page, home_page, result_page, ActivityNotice, ActivityVm, SubmitOutcome,
    SubmitResultVm,
};
use astra::{Body, Request, ResponseBuilder};
use chrono::Utc;
use std::io::Read;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let params = forms::parse_params(query.as_bytes());
            let form = match params.get("s") {
                Some(snapshot) => session::decode_snapshot_or_default(snapshot),
                None => LeadForm::demo(),
            };
            html_response(home_page(&form))
        }

        ("GET", "/history") => {
            let records = recent_submissions(db)?;
            html_response(history_page(&records))
        }

        ("GET", "/track") => {
            let params = forms::parse_params(query.as_bytes());
            match params.get("lead_id").map(|s| s.trim()).filter(|s| !s.is_empty()) {
                Some(id) => redirect(&format!("/leads/{id}/activity")),
                None => redirect("/history"),
            }
        }

        ("GET", "/api/spec") => openapi_response("static/openapi.yaml"),
        ("GET", "/static/main.css") => stylesheet_response("static/main.css"),

        ("POST", "/submit") => submit_lead(&mut req, db),

        _ => lead_routes(&method, &path, &mut req),
    }
}

/// Routes keyed by a captured lead id: `/leads/{id}/activity` and
/// `/leads/{id}/assignees`.
fn lead_routes(method: &str, path: &str, req: &mut Request) -> ResultResp {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", ["leads", id, "activity"]) if !id.is_empty() => {
            html_response(activity_page(&ActivityVm {
                lead_id: (*id).to_string(),
                notice: None,
            }))
        }
        ("POST", ["leads", id, "activity"]) if !id.is_empty() => post_activity(id, req),
        ("POST", ["leads", id, "assignees"]) if !id.is_empty() => replace_assignees(id, req),
        _ => Err(ServerError::NotFound),
    }
}

fn submit_lead(req: &mut Request, db: &Database) -> ResultResp {
    let params = forms::parse_params(&read_body(req)?);
    let form = forms::lead_form_from_params(&params);
    let payload = build_lead_payload(&form);
    let snapshot = session::encode_snapshot(&form);

    let client = RechatClient::new();
    let outcome = match client.submit_lead(&form.lead_channel, &payload) {
        Ok(success) => {
            let lead_id = success.lead_id();
            if let Some(id) = &lead_id {
                let record = SubmissionRecord {
                    lead_id: id.clone(),
                    name: format!("{} {}", form.first_name, form.last_name)
                        .trim()
                        .to_string(),
                    email: form.email.clone(),
                    channel: form.lead_channel.clone(),
                    created_at: Utc::now(),
                };
                // History is convenience, not part of the submission: a
                // failed insert must not turn a captured lead into an error.
                if let Err(e) = record_submission(db, &record) {
                    eprintln!("⚠️ Failed to record submission history: {e}");
                }
            }
            SubmitOutcome::Accepted {
                status: success.status,
                body_pretty: success.body_pretty(),
                lead_id,
            }
        }
        Err(e) => SubmitOutcome::Failed {
            message: e.to_string(),
        },
    };

    html_response(result_page(&SubmitResultVm {
        endpoint: client.webhook_url(&form.lead_channel),
        payload_pretty: serde_json::to_string_pretty(&payload).unwrap_or_default(),
        snapshot,
        outcome,
    }))
}

fn post_activity(lead_id: &str, req: &mut Request) -> ResultResp {
    let params = forms::parse_params(&read_body(req)?);
    let input = forms::activity_from_params(&params)?;
    let payload = build_activity_payload(input.action, &input.listing, &input.search, &input.notes);

    let notice = match RechatClient::new().post_activity(lead_id, &payload) {
        Ok(success) => ActivityNotice::Posted {
            status: success.status,
        },
        Err(e) => ActivityNotice::Failed {
            message: format!("Failed to post activity: {e}"),
        },
    };

    html_response(activity_page(&ActivityVm {
        lead_id: lead_id.to_string(),
        notice: Some(notice),
    }))
}

fn replace_assignees(lead_id: &str, req: &mut Request) -> ResultResp {
    let params = forms::parse_params(&read_body(req)?);
    let assignees = forms::assignees_from_params(&params);
    let payload = build_assignees_payload(&assignees);

    let notice = match RechatClient::new().put_assignees(lead_id, &payload) {
        Ok(success) => ActivityNotice::Reassigned {
            status: success.status,
        },
        Err(e) => ActivityNotice::Failed {
            message: format!("Failed to replace assignees: {e}"),
        },
    };

    html_response(activity_page(&ActivityVm {
        lead_id: lead_id.to_string(),
        notice: Some(notice),
    }))
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;
    Ok(buf)
}

fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
