//! Review pipeline stages that run locally.
//!
//! - [`validator`]: parses the submission before any network call
//! - [`extractor`]: splits the model reply into issues and fixed code
//! - [`instruction`]: the system instruction that mandates the reply template

pub mod extractor;
pub mod instruction;
mod model;
pub mod validator;

pub use extractor::{NO_FIXED_CODE_PLACEHOLDER, NO_ISSUES_PLACEHOLDER, extract};
pub use instruction::REVIEW_SYSTEM_INSTRUCTION;
pub use model::{ReviewRequest, ReviewResult};
pub use validator::{SYNTAX_ERROR_PREFIX, validate};
