pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::chrome::ChromeSession;
pub use crate::adapters::storage::LocalStorage;
pub use crate::config::CheckerConfig;
pub use crate::core::engine::CheckEngine;
pub use crate::core::runner::CheckRunner;
pub use crate::domain::model::{CheckOutcome, ReferralRecord, ReferralStatus, RunResults};
pub use crate::domain::ports::{BrowserSession, Storage};
pub use crate::utils::error::{CheckError, Result};
