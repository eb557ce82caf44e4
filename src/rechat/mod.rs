pub mod client;
pub mod response;

pub use client::RechatClient;
pub use response::{ApiBody, ApiError, ApiSuccess};
