use super::bot::{ChatBot, open_session};
use super::intent::QuickAction;
use super::session::ChatSession;
use super::trigger::{Trigger, Visibility};
use crate::config::ChatbotConfig;
use rand::rngs::StdRng;
use tokio::sync::watch;

/// One mounted chat widget: the bot, its transcript and the visibility
/// trigger. Dropping it cancels every timer it owns.
pub struct ChatWidget {
    bot: ChatBot,
    trigger: Trigger,
}

impl ChatWidget {
    pub fn new(config: &ChatbotConfig) -> Self {
        Self::from_parts(ChatBot::new(config), Trigger::new(config))
    }

    pub fn with_rng(config: &ChatbotConfig, rng: StdRng) -> Self {
        Self::from_parts(ChatBot::with_rng(config, rng), Trigger::new(config))
    }

    fn from_parts(bot: ChatBot, trigger: Trigger) -> Self {
        Self { bot, trigger }
    }

    /// Arm the auto-show timer. The greeting is seeded if the timer opens the
    /// widget.
    pub fn start(&self) {
        let session = self.bot.session_cell();
        self.trigger.start(move || {
            open_session(&session);
        });
    }

    pub fn open(&self) {
        self.trigger.user_open();
        self.bot.open();
    }

    pub fn close(&self) {
        self.trigger.user_close();
    }

    pub fn toggle(&self) -> bool {
        let open = self.trigger.user_toggle();
        if open {
            self.bot.open();
        }
        open
    }

    pub fn submit(&self, text: &str) -> bool {
        self.bot.submit(text)
    }

    pub fn quick_action(&self, action: QuickAction) -> &'static str {
        self.bot.quick_action(action)
    }

    pub fn session(&self) -> ChatSession {
        self.bot.snapshot()
    }

    pub fn visibility(&self) -> Visibility {
        self.trigger.visibility()
    }

    pub fn subscribe_session(&self) -> watch::Receiver<ChatSession> {
        self.bot.subscribe()
    }

    pub fn subscribe_visibility(&self) -> watch::Receiver<Visibility> {
        self.trigger.subscribe()
    }

    pub fn shutdown(&self) {
        self.bot.shutdown();
        self.trigger.shutdown();
    }
}
