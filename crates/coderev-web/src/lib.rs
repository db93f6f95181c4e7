//! Browser front end.
//!
//! One server-rendered page: a text area, a submit action, and the two
//! result regions. Each browser is tied to its turn history by a cookie.

mod cookie;
pub mod error;
mod page;
pub mod routes;
pub mod state;

pub use routes::{router, serve};
pub use state::WebState;
