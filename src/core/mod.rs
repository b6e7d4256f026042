pub mod az;
pub mod resolve;
pub mod ticker;

pub use az::{Outcome, ResetRequest};
pub use resolve::{Resolved, Resolver, Source};
pub use ticker::Ticker;
