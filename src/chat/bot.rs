use super::intent::{Intent, QuickAction, classify};
use super::lock;
use super::responses::ResponseTable;
use super::session::ChatSession;
use super::timer::TimerHandle;
use crate::config::ChatbotConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

pub(crate) type SessionCell = Arc<watch::Sender<ChatSession>>;

/// Canned-reply bot bound to one [`ChatSession`].
///
/// Typed messages get a simulated typing delay; quick actions reply at once.
/// Each send arms its own reply timer and overlapping timers are not
/// serialized, so rapid double sends get their replies in firing order.
/// Pending timers are aborted on [`ChatBot::shutdown`] or drop.
///
/// `submit` must be called from within a tokio runtime.
pub struct ChatBot {
    session: SessionCell,
    rng: Arc<Mutex<StdRng>>,
    reply_delay_min_ms: u64,
    reply_delay_max_ms: u64,
    timers: Mutex<Vec<TimerHandle>>,
}

impl ChatBot {
    pub fn new(config: &ChatbotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &ChatbotConfig, rng: StdRng) -> Self {
        let (session, _) = watch::channel(ChatSession::new());
        let min = duration_ms(config.reply_delay_min);
        let max = duration_ms(config.reply_delay_max).max(min.saturating_add(1));
        Self {
            session: Arc::new(session),
            rng: Arc::new(Mutex::new(rng)),
            reply_delay_min_ms: min,
            reply_delay_max_ms: max,
            timers: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ChatSession> {
        self.session.subscribe()
    }

    pub fn snapshot(&self) -> ChatSession {
        self.session.borrow().clone()
    }

    pub(crate) fn session_cell(&self) -> SessionCell {
        Arc::clone(&self.session)
    }

    /// Append a user message and schedule the bot's reply.
    /// Returns false (and schedules nothing) for blank input.
    pub fn submit(&self, text: &str) -> bool {
        let accepted = self
            .session
            .send_if_modified(|s| s.append_user_message(text).is_some());
        if !accepted {
            return false;
        }

        let delay = self.draw_reply_delay();
        let input = text.trim().to_string();
        let session = Arc::clone(&self.session);
        let rng = Arc::clone(&self.rng);
        debug!(delay_ms = duration_ms(delay), "bot reply scheduled");

        let timer = TimerHandle::after(delay, move || {
            let intent = classify(&input);
            let reply = ResponseTable::pick(intent, &mut *lock(&rng));
            debug!(%intent, "bot reply delivered");
            session.send_modify(|s| {
                s.complete_bot_reply(reply);
            });
        });

        let mut timers = lock(&self.timers);
        timers.retain(|t| !t.is_finished());
        timers.push(timer);
        true
    }

    /// Reply to a quick action button immediately, without a typing phase.
    /// Returns the reply that was appended.
    pub fn quick_action(&self, action: QuickAction) -> &'static str {
        self.reply_now(action.intent())
    }

    /// Same as [`ChatBot::quick_action`] for a raw UI key; unknown keys get a
    /// default reply.
    pub fn quick_action_key(&self, key: &str) -> &'static str {
        self.reply_now(Intent::from_action_key(key))
    }

    fn reply_now(&self, intent: Intent) -> &'static str {
        let reply = ResponseTable::pick(intent, &mut *lock(&self.rng));
        self.session.send_modify(|s| {
            s.append_direct_bot_message(reply);
        });
        debug!(%intent, "quick action answered");
        reply
    }

    /// First open of an empty session seeds the greeting.
    pub fn open(&self) -> bool {
        open_session(&self.session)
    }

    /// Abort every pending reply timer.
    pub fn shutdown(&self) {
        let mut timers = lock(&self.timers);
        if !timers.is_empty() {
            debug!(count = timers.len(), "cancelling reply timers");
        }
        timers.clear();
    }

    fn draw_reply_delay(&self) -> Duration {
        // Only reachable when the lower bound is already u64::MAX.
        if self.reply_delay_min_ms >= self.reply_delay_max_ms {
            return Duration::from_millis(self.reply_delay_min_ms);
        }
        let ms = lock(&self.rng).gen_range(self.reply_delay_min_ms..self.reply_delay_max_ms);
        Duration::from_millis(ms)
    }
}

impl Drop for ChatBot {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

pub(crate) fn open_session(session: &watch::Sender<ChatSession>) -> bool {
    let mut seeded = false;
    session.send_if_modified(|s| {
        let first_open = !s.has_opened();
        seeded = s.open();
        first_open
    });
    seeded
}
