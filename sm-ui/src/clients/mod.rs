//! HTTP clients for external collaborators
//!
//! Both collaborators are single-shot: no retry, no rate limiting. A
//! failed call surfaces as an error to the handler, which decides how to
//! degrade (empty roster, transcript apology).

pub mod llm;
pub mod store;

pub use llm::{LlmClient, RecommendationReply};
pub use store::StoreClient;
