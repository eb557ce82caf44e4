pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, number_field, text_field, textarea_field};
pub use layouts::desktop::desktop_layout;
