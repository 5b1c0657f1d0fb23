pub mod classifier;
pub mod engine;
pub mod loader;
pub mod reporter;
pub mod runner;

pub use crate::domain::model::{CheckOutcome, ReferralRecord, ReferralStatus, RunResults};
pub use crate::domain::ports::{BrowserSession, Storage};
pub use crate::utils::error::Result;
