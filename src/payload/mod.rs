pub mod activity;
pub mod builder;
pub mod model;

pub use activity::{ActivityListing, ActivitySearch, ActivityType};
pub use activity::build_activity_payload;
pub use builder::{build_assignees_payload, build_lead_payload};
pub use model::{Address, Assignee, LeadForm, LeadListing, LeadSearch};
