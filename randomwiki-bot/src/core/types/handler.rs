//! Handler trait and transport conversion traits.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};
use crate::core::error::Result;

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One link of the handler chain: optional before / handle / after.
/// The chain runs every before, then handle until Stop, then every after in reverse.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Return false to stop the chain before any handle runs.
    async fn before(&self, _message: &Message) -> Result<bool> {
        Ok(true)
    }

    /// Default: Continue.
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    /// Sees the final response of the handle phase.
    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> Result<()> {
        Ok(())
    }
}
