//! Form model, response log, and the operations over them

pub mod aggregate;
mod form;
mod form_store;
pub mod validate;

pub use form::*;
pub use form_store::*;
