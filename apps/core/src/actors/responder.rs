use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{error, info, instrument, warn};

use crate::actors::history::InMemoryMessageLog;
use crate::actors::messages::{AppError, ResponderMessage};
use crate::actors::traits::MessageLog;
use crate::brain::{DialogueEngine, Mood};
use crate::config::EngineConfig;
use crate::models::{ChatRecord, MoodSummary, Reply};

/// History entries returned when the caller does not ask for a limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

const EMPTY_INPUT_REPLY: &str = "It looks like your message was empty. How are you feeling right now?";

/// A handle to the responder actor.
///
/// This is the host's entry point to the dialogue engine. Every turn runs in
/// its own task, so users never wait on each other; turns of the same user
/// serialize on that user's session. Whatever goes wrong inside a turn, the
/// caller gets a reply.
#[derive(Clone)]
pub struct ResponderHandle {
    sender: mpsc::Sender<ResponderMessage>,
    fallback_reply: Arc<str>,
    turn_timeout: Duration,
}

impl ResponderHandle {
    /// Spawns a responder with an engine built from `config` and an in-memory message log.
    pub fn new(config: &EngineConfig) -> Result<Self, AppError> {
        let engine = Arc::new(DialogueEngine::from_config(config)?);
        Ok(Self::with_parts(engine, Arc::new(InMemoryMessageLog::new()), config))
    }

    /// Spawns a responder around an existing engine and message log.
    pub fn with_parts<L>(engine: Arc<DialogueEngine>, log: Arc<L>, config: &EngineConfig) -> Self
    where
        L: MessageLog,
    {
        let (sender, receiver) = mpsc::channel(32);
        let fallback_reply: Arc<str> = Arc::from(config.fallback_reply.as_str());
        let runner = ResponderRunner {
            receiver,
            engine,
            log,
            fallback_reply: fallback_reply.clone(),
        };
        tokio::spawn(async move { runner.run().await });
        Self {
            sender,
            fallback_reply,
            turn_timeout: Duration::from_secs(config.turn_timeout_secs),
        }
    }

    /// Answers one user message.
    ///
    /// Empty input gets a friendly prompt and is not logged. Engine errors,
    /// panics, timeouts and a stopped actor all yield the configured fallback
    /// reply with a neutral mood.
    #[instrument(skip(self, text))]
    pub async fn respond(&self, user_id: String, text: String, explicit_mood: Option<Mood>) -> Reply {
        if text.trim().is_empty() {
            return Reply {
                text: EMPTY_INPUT_REPLY.to_string(),
                mood: None,
                topic: None,
            };
        }

        let (send, recv) = oneshot::channel();
        let msg = ResponderMessage::Respond {
            user_id,
            text,
            explicit_mood,
            responder: send,
        };
        if let Err(e) = self.sender.send(msg).await {
            error!("Responder unavailable: {}", e);
            return Reply::fallback(&self.fallback_reply);
        }

        match timeout(self.turn_timeout, recv).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                error!("Responder dropped the turn: {}", e);
                Reply::fallback(&self.fallback_reply)
            }
            Err(e) => {
                error!("Turn timed out: {}", e);
                Reply::fallback(&self.fallback_reply)
            }
        }
    }

    /// Deletes a user's logged messages and resets their session.
    #[instrument(skip(self))]
    pub async fn clear_history(&self, user_id: String) -> Result<usize, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = ResponderMessage::ClearHistory {
            user_id,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(self.turn_timeout, recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))?
    }

    /// The most recent logged messages of a user, oldest first.
    #[instrument(skip(self))]
    pub async fn history(&self, user_id: String, limit: Option<usize>) -> Result<Vec<ChatRecord>, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = ResponderMessage::History {
            user_id,
            limit: limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(self.turn_timeout, recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))?
    }

    /// Mood counts over a user's logged turns, limited to the last `days`
    /// days when given.
    #[instrument(skip(self))]
    pub async fn mood_summary(&self, user_id: String, days: Option<u32>) -> Result<MoodSummary, AppError> {
        let since = days.map(|d| Utc::now() - chrono::Duration::days(i64::from(d)));
        let (send, recv) = oneshot::channel();
        let msg = ResponderMessage::Moods {
            user_id,
            since,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))?;
        timeout(self.turn_timeout, recv)
            .await?
            .map_err(|e| AppError::Actor(e.to_string()))?
    }

    /// Stops the actor loop. Turns already running still complete.
    pub async fn shutdown(&self) -> Result<(), AppError> {
        self.sender
            .send(ResponderMessage::Shutdown)
            .await
            .map_err(|e| AppError::Actor(e.to_string()))
    }
}

// --- Actor Runner ---
struct ResponderRunner<L>
where
    L: MessageLog,
{
    receiver: mpsc::Receiver<ResponderMessage>,
    engine: Arc<DialogueEngine>,
    log: Arc<L>,
    fallback_reply: Arc<str>,
}

impl<L> ResponderRunner<L>
where
    L: MessageLog,
{
    async fn run(mut self) {
        info!("Responder started");
        while let Some(msg) = self.receiver.recv().await {
            if matches!(msg, ResponderMessage::Shutdown) {
                info!("Responder shutting down...");
                break;
            }
            self.handle_message(msg);
        }
        info!("Responder stopped");
    }

    fn handle_message(&self, msg: ResponderMessage) {
        let engine = self.engine.clone();
        let log = self.log.clone();

        match msg {
            ResponderMessage::Respond {
                user_id,
                text,
                explicit_mood,
                responder,
            } => {
                let fallback_reply = self.fallback_reply.clone();
                tokio::spawn(async move {
                    let reply = run_turn(engine, &user_id, &text, explicit_mood, &fallback_reply).await;
                    record_turn(log.as_ref(), &user_id, &text, &reply).await;
                    let _ = responder.send(reply);
                });
            }
            ResponderMessage::ClearHistory { user_id, responder } => {
                tokio::spawn(async move {
                    let result = log.clear(&user_id).await;
                    engine.reset_session(&user_id);
                    if let Err(e) = &result {
                        error!("Error clearing history: {:?}", e);
                    }
                    let _ = responder.send(result);
                });
            }
            ResponderMessage::History {
                user_id,
                limit,
                responder,
            } => {
                tokio::spawn(async move {
                    let _ = responder.send(log.recent(&user_id, limit).await);
                });
            }
            ResponderMessage::Moods {
                user_id,
                since,
                responder,
            } => {
                tokio::spawn(async move {
                    let _ = responder.send(log.mood_summary(&user_id, since).await);
                });
            }
            ResponderMessage::Shutdown => {}
        }
    }
}

/// Runs the synchronous engine off the async workers and substitutes the
/// fallback reply for any error or panic.
async fn run_turn(
    engine: Arc<DialogueEngine>,
    user_id: &str,
    text: &str,
    explicit_mood: Option<Mood>,
    fallback_reply: &str,
) -> Reply {
    let owned_user = user_id.to_string();
    let owned_text = text.to_string();
    let result =
        tokio::task::spawn_blocking(move || engine.respond(&owned_user, &owned_text, explicit_mood)).await;

    match result {
        Ok(Ok(reply)) => reply,
        Ok(Err(e)) => {
            error!("Turn failed for {}: {}", user_id, e);
            Reply::fallback(fallback_reply)
        }
        Err(e) => {
            error!("Turn panicked for {}: {}", user_id, e);
            Reply::fallback(fallback_reply)
        }
    }
}

async fn record_turn<L: MessageLog + ?Sized>(log: &L, user_id: &str, text: &str, reply: &Reply) {
    if let Err(e) = log.append(ChatRecord::user(user_id, text, reply.mood)).await {
        warn!("Could not log user turn: {}", e);
    }
    if let Err(e) = log.append(ChatRecord::bot(user_id, reply)).await {
        warn!("Could not log bot turn: {}", e);
    }
}
