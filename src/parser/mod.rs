pub mod allowlist;
pub mod detail;
pub mod names;
pub mod reference;

pub use detail::parse_detail;
pub use reference::{parse_reference, Candidate};
