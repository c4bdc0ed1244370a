//! Application state module

mod admin_state;
mod app_state;
mod fill_state;
mod input;

pub use admin_state::*;
pub use app_state::*;
pub use fill_state::*;
pub use input::*;
