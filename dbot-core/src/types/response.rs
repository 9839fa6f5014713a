//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the text the handler already sent so
/// later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the reply text.
    Reply(String),
}
