//! HTTP building blocks
//!
//! Response construction only; the protocol itself is hyper's.

pub mod response;

pub use response::build_text_response;
