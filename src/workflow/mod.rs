pub mod review_ctx;
pub mod review_flow;

pub use review_ctx::ReviewCtx;
pub use review_flow::{user_message, ParagraphReview, ReviewFlow, FAILURE_MESSAGE};
