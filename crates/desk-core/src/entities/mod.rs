//! Entity structs for the records the insight engine reads.
//!
//! The persistence layer owns these records; the engine only ever borrows
//! them. All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! snapshot loading and schema validation.

mod company;
mod inquiry;
mod qna;

pub use company::Company;
pub use inquiry::Inquiry;
pub use qna::{QnaEntry, QnaSeed};
