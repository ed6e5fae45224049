//! Handler chain result type.

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; the handler already replied (or deliberately stayed silent).
    Stop,
    /// Not this handler's message; try next.
    Ignore,
}
