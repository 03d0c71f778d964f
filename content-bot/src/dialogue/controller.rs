//! Dialogue controller: the state machine that walks a user from platform choice to generated ideas.
//!
//! **External interactions:** [`Bot`] (send / edit / acknowledge), [`LlmClient`] (one generation
//! call per topic), [`SessionStore`] (per-user state).
//!
//! Generation failures stop here: they are logged with their cause and turned into one generic
//! apology. Transport and store failures propagate to the caller.

use async_trait::async_trait;
use llm_client::{LlmClient, LlmError};
use prompt::ChatMessage;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::store::{SessionStore, UserId};
use super::{texts, DialogueState, Platform};
use crate::core::{Bot, Chat, Command, Event, EventKind, Handler, HandlerResponse, Result, TextFormat};

/// What happened to a free-text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicOutcome {
    /// Ideas were generated and delivered; holds the generated text.
    Delivered(String),
    /// Generation (or delivering its result) failed; the apology was sent.
    Failed,
    /// No session; the user was asked to start.
    NoSession,
    /// The user has not picked a platform yet.
    PlatformPending,
    /// A generation for this user is already running.
    Busy,
}

/// Finite-state conversation driver. Owns the session store.
#[derive(Clone)]
pub struct DialogueController {
    bot: Arc<dyn Bot>,
    llm_client: Arc<dyn LlmClient>,
    store: Arc<dyn SessionStore>,
}

impl DialogueController {
    pub fn new(
        bot: Arc<dyn Bot>,
        llm_client: Arc<dyn LlmClient>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            bot,
            llm_client,
            store,
        }
    }

    /// Enters the dialogue: any previous session is replaced and the platform buttons are sent.
    #[instrument(skip(self, chat))]
    pub async fn start(&self, user_id: UserId, chat: &Chat) -> Result<()> {
        if let Some(previous) = self
            .store
            .insert(user_id, DialogueState::AwaitingPlatform)
            .await?
        {
            debug!(
                user_id,
                previous_state = previous.name(),
                previous_platform = ?previous.platform(),
                previous_topic = ?previous.topic(),
                "Discarded previous session"
            );
        }
        self.bot
            .send_choices(chat, texts::GREETING, &Platform::choice_rows())
            .await?;
        info!(user_id, "Dialogue started");
        Ok(())
    }

    /// Announces the restart, then behaves like [`start`](Self::start).
    #[instrument(skip(self, chat))]
    pub async fn restart(&self, user_id: UserId, chat: &Chat) -> Result<()> {
        self.bot
            .send_text(chat, texts::STARTING_OVER, TextFormat::Plain)
            .await?;
        self.start(user_id, chat).await
    }

    /// Leaves the dialogue. Never triggers generation; an in-flight call still finishes.
    #[instrument(skip(self, chat))]
    pub async fn cancel(&self, user_id: UserId, chat: &Chat) -> Result<()> {
        let removed = self.store.remove(user_id).await?;
        info!(
            user_id,
            removed_state = removed.as_ref().map(DialogueState::name).unwrap_or("none"),
            "Dialogue cancelled"
        );
        self.bot
            .send_text(chat, texts::CANCELLED, TextFormat::Plain)
            .await?;
        Ok(())
    }

    pub async fn help(&self, chat: &Chat) -> Result<()> {
        self.bot.send_text(chat, texts::HELP, TextFormat::Plain).await?;
        Ok(())
    }

    /// Handles a platform button press. Returns the recorded platform, or `None` when the press
    /// was not valid for the user's current state (the callback is then acknowledged with a notice).
    #[instrument(skip(self, chat, query_id, message_id))]
    pub async fn select_platform(
        &self,
        user_id: UserId,
        chat: &Chat,
        query_id: &str,
        message_id: Option<&str>,
        value: &str,
    ) -> Result<Option<Platform>> {
        let platform = match value.parse::<Platform>() {
            Ok(p) => p,
            Err(e) => {
                info!(user_id, error = %e, "Ignoring unknown platform value");
                self.bot
                    .answer_callback(query_id, Some(texts::CHOICE_EXPIRED))
                    .await?;
                return Ok(None);
            }
        };

        let recorded = self
            .store
            .compare_and_swap(
                user_id,
                &DialogueState::AwaitingPlatform,
                Some(DialogueState::AwaitingTopic { platform }),
            )
            .await?;
        if !recorded {
            info!(user_id, platform = %platform, "Platform choice outside platform step");
            self.bot
                .answer_callback(query_id, Some(texts::CHOICE_EXPIRED))
                .await?;
            return Ok(None);
        }

        self.bot.answer_callback(query_id, None).await?;
        let text = texts::platform_selected(platform);
        match message_id {
            Some(id) => self.bot.edit_text(chat, id, &text).await?,
            None => {
                self.bot.send_text(chat, &text, TextFormat::Plain).await?;
            }
        }
        info!(user_id, platform = %platform, "Platform selected");
        Ok(Some(platform))
    }

    /// Handles free text. In the topic step this runs the generation and tears the session down
    /// afterwards, whatever the result.
    #[instrument(skip(self, chat, text))]
    pub async fn submit_topic(&self, user_id: UserId, chat: &Chat, text: &str) -> Result<TopicOutcome> {
        loop {
            let current = self.store.get(user_id).await?;
            let platform = match current {
                None => {
                    self.bot
                        .send_text(chat, texts::PLEASE_START, TextFormat::Plain)
                        .await?;
                    return Ok(TopicOutcome::NoSession);
                }
                Some(DialogueState::AwaitingPlatform) => {
                    self.bot
                        .send_text(chat, texts::CHOOSE_PLATFORM_FIRST, TextFormat::Plain)
                        .await?;
                    return Ok(TopicOutcome::PlatformPending);
                }
                Some(DialogueState::Generating { .. }) => {
                    self.bot
                        .send_text(chat, texts::STILL_GENERATING, TextFormat::Plain)
                        .await?;
                    return Ok(TopicOutcome::Busy);
                }
                Some(DialogueState::AwaitingTopic { platform }) => platform,
            };

            let awaiting = DialogueState::AwaitingTopic { platform };
            let generating = DialogueState::Generating {
                platform,
                topic: text.to_string(),
                request_id: Uuid::new_v4(),
            };
            if !self
                .store
                .compare_and_swap(user_id, &awaiting, Some(generating.clone()))
                .await?
            {
                // Another event of this user changed the session in between; look again.
                continue;
            }

            let result = self.generate_and_deliver(user_id, chat, platform, text).await;
            let torn_down = self.store.compare_and_swap(user_id, &generating, None).await;
            let outcome = result?;
            if !torn_down? {
                debug!(user_id, "Session replaced during generation; left in place");
            }
            return Ok(outcome);
        }
    }

    async fn generate_and_deliver(
        &self,
        user_id: UserId,
        chat: &Chat,
        platform: Platform,
        topic: &str,
    ) -> Result<TopicOutcome> {
        self.bot
            .send_text(chat, texts::GENERATING, TextFormat::Plain)
            .await?;

        let prompt = prompt::content_ideas_prompt(platform.name(), topic);
        info!(user_id, platform = %platform, topic = %topic, "Requesting content ideas");

        let ideas = match self
            .llm_client
            .get_llm_response_with_messages(vec![ChatMessage::user(prompt)])
            .await
        {
            Ok(ideas) => ideas,
            Err(e) => {
                log_generation_error(user_id, &e);
                self.send_apology(chat).await?;
                return Ok(TopicOutcome::Failed);
            }
        };

        let message = texts::ideas_message(platform, topic, &ideas);
        if let Err(e) = self.bot.send_text(chat, &message, TextFormat::Markdown).await {
            warn!(user_id, error = %e, "Markdown result rejected; resending as plain text");
            let plain = texts::ideas_message_plain(platform, topic, &ideas);
            if let Err(e) = self.bot.send_text(chat, &plain, TextFormat::Plain).await {
                error!(user_id, error = %e, "Failed to deliver generated ideas");
                self.send_apology(chat).await?;
                return Ok(TopicOutcome::Failed);
            }
        }
        self.bot
            .send_text(chat, texts::RESTART_HINT, TextFormat::Plain)
            .await?;
        info!(user_id, reply_len = ideas.len(), "Content ideas delivered");
        Ok(TopicOutcome::Delivered(ideas))
    }

    async fn send_apology(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_text(chat, texts::GENERATION_FAILED, TextFormat::Plain)
            .await?;
        Ok(())
    }

    /// Routes one inbound event to its transition.
    pub async fn dispatch(&self, event: &Event) -> Result<HandlerResponse> {
        let user_id = event.user.id;
        let chat = &event.chat;
        match &event.kind {
            EventKind::Command(Command::Start) => self.start(user_id, chat).await?,
            EventKind::Command(Command::New) => self.restart(user_id, chat).await?,
            EventKind::Command(Command::Cancel) => self.cancel(user_id, chat).await?,
            EventKind::Command(Command::Help) | EventKind::Command(Command::Unknown(_)) => {
                self.help(chat).await?
            }
            EventKind::Callback {
                query_id,
                message_id,
                data,
            } => {
                self.select_platform(user_id, chat, query_id, message_id.as_deref(), data)
                    .await?;
            }
            EventKind::Text(text) => {
                if let TopicOutcome::Delivered(ideas) = self.submit_topic(user_id, chat, text).await? {
                    return Ok(HandlerResponse::Reply(ideas));
                }
            }
        }
        Ok(HandlerResponse::Stop)
    }
}

fn log_generation_error(user_id: UserId, e: &LlmError) {
    error!(
        user_id,
        error_kind = e.kind(),
        transient = e.is_transient(),
        error = %e,
        "Error generating content"
    );
    if !e.is_transient() {
        error!(
            "Hint: non-transient generation errors usually mean GEMINI_API_KEY is invalid or does not match LLM_BASE_URL / LLM_MODEL; check .env"
        );
    }
}

#[async_trait]
impl Handler for DialogueController {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        self.dispatch(event).await
    }
}
