//! Logs every inbound event in before() and the chain's outcome in after(); always continues.

use async_trait::async_trait;
use crate::core::{Event, EventKind, Handler, HandlerResponse, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        let detail = match &event.kind {
            EventKind::Command(c) => format!("{:?}", c),
            EventKind::Callback { data, .. } => data.clone(),
            EventKind::Text(text) => text.clone(),
        };
        info!(
            user_id = event.user.id,
            chat_id = event.chat.id,
            username = %event.user.username.as_deref().unwrap_or("unknown"),
            event_kind = event.kind_name(),
            detail = %detail,
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        let (response_type, reply_len) = match response {
            HandlerResponse::Continue => ("Continue", None),
            HandlerResponse::Stop => ("Stop", None),
            HandlerResponse::Reply(s) => ("Reply", Some(s.len())),
        };
        debug!(
            event_id = %event.id,
            user_id = event.user.id,
            response_type = %response_type,
            reply_len = ?reply_len,
            "Processed event"
        );
        Ok(())
    }
}
