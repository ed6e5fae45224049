//! Handler implementations: message logging and the two bot commands.

mod logging;
mod random_wiki;
mod start;

pub use logging::LoggingHandler;
pub use random_wiki::RandomWikiHandler;
pub use start::{StartHandler, START_MESSAGE};

use std::sync::Arc;
use tokio::sync::RwLock;

/// Bot username learned from `getMe`; `None` until the runner has fetched it.
pub type BotUsername = Arc<RwLock<Option<String>>>;
