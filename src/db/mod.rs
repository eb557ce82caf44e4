pub mod connection;
pub mod history;

pub use connection::{init_db, Database};
