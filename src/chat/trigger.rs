use super::lock;
use super::timer::TimerHandle;
use crate::config::ChatbotConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerPhase {
    /// Never shown; the auto-show timer may still fire.
    #[default]
    Hidden,
    /// Shown by the timer; the auto-close timer is armed.
    AutoOpen,
    /// Any user open/close, or after auto-close. Timers no longer act.
    UserControlled,
}

/// Widget visibility and its auto-show bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub phase: TriggerPhase,
    pub is_open: bool,
    pub has_auto_shown: bool,
}

impl Visibility {
    pub fn auto_show(&mut self) -> bool {
        if self.phase != TriggerPhase::Hidden || self.has_auto_shown {
            return false;
        }
        self.phase = TriggerPhase::AutoOpen;
        self.is_open = true;
        self.has_auto_shown = true;
        true
    }

    pub fn auto_close(&mut self) -> bool {
        if self.phase != TriggerPhase::AutoOpen {
            return false;
        }
        self.phase = TriggerPhase::UserControlled;
        self.is_open = false;
        true
    }

    pub fn user_open(&mut self) -> bool {
        self.set_by_user(true)
    }

    pub fn user_close(&mut self) -> bool {
        self.set_by_user(false)
    }

    pub fn user_toggle(&mut self) -> bool {
        self.set_by_user(!self.is_open)
    }

    fn set_by_user(&mut self, open: bool) -> bool {
        let before = *self;
        self.phase = TriggerPhase::UserControlled;
        // A manual open before the timer fires counts as the one showing.
        self.has_auto_shown = true;
        self.is_open = open;
        before != *self
    }
}

/// Drives [`Visibility`] from the auto-show and auto-close delays.
///
/// Any user open or close aborts the pending timer task. The state machine
/// re-checks its guards when a timer fires as well, so a late wakeup cannot
/// reopen a widget the user already dealt with.
pub struct Trigger {
    state: Arc<watch::Sender<Visibility>>,
    auto_task: Mutex<Option<TimerHandle>>,
    auto_show_delay: Duration,
    auto_close_delay: Duration,
}

impl Trigger {
    pub fn new(config: &ChatbotConfig) -> Self {
        let (state, _) = watch::channel(Visibility::default());
        Self {
            state: Arc::new(state),
            auto_task: Mutex::new(None),
            auto_show_delay: config.auto_show_delay,
            auto_close_delay: config.auto_close_delay,
        }
    }

    pub fn visibility(&self) -> Visibility {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Visibility> {
        self.state.subscribe()
    }

    /// Arm the auto-show timer. `on_auto_open` runs once if the widget
    /// actually gets shown by it. Needs a tokio runtime.
    pub fn start<F>(&self, on_auto_open: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.visibility().has_auto_shown {
            return;
        }
        let state = Arc::clone(&self.state);
        let show_after = self.auto_show_delay;
        let close_after = self.auto_close_delay;

        let task = TimerHandle::spawn(async move {
            tokio::time::sleep(show_after).await;
            if !state.send_if_modified(Visibility::auto_show) {
                return;
            }
            debug!("chat widget auto-shown");
            on_auto_open();

            tokio::time::sleep(close_after).await;
            if state.send_if_modified(Visibility::auto_close) {
                debug!("chat widget auto-closed");
            }
        });
        *lock(&self.auto_task) = Some(task);
    }

    pub fn user_open(&self) {
        self.cancel_auto();
        self.state.send_if_modified(Visibility::user_open);
    }

    pub fn user_close(&self) {
        self.cancel_auto();
        self.state.send_if_modified(Visibility::user_close);
    }

    /// Returns whether the widget is open afterwards.
    pub fn user_toggle(&self) -> bool {
        self.cancel_auto();
        self.state.send_if_modified(Visibility::user_toggle);
        self.visibility().is_open
    }

    /// Abort the pending auto-show/auto-close timer, if any.
    pub fn shutdown(&self) {
        self.cancel_auto();
    }

    fn cancel_auto(&self) {
        if let Some(task) = lock(&self.auto_task).take()
            && !task.is_finished()
        {
            debug!("auto trigger cancelled");
        }
    }
}

impl Drop for Trigger {
    fn drop(&mut self) {
        self.cancel_auto();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_show_once() {
        let mut v = Visibility::default();
        assert!(v.auto_show());
        assert_eq!(v.phase, TriggerPhase::AutoOpen);
        assert!(v.is_open);
        assert!(!v.auto_show());
    }

    #[test]
    fn test_auto_close_only_from_auto_open() {
        let mut v = Visibility::default();
        assert!(!v.auto_close());
        v.auto_show();
        assert!(v.auto_close());
        assert_eq!(v.phase, TriggerPhase::UserControlled);
        assert!(!v.is_open);
        assert!(!v.auto_close());
    }

    #[test]
    fn test_user_open_blocks_auto_show() {
        let mut v = Visibility::default();
        assert!(v.user_open());
        assert!(v.has_auto_shown);
        assert!(!v.auto_show());
        assert!(v.user_close());
        assert!(!v.auto_show());
        assert!(!v.is_open);
    }

    #[test]
    fn test_user_close_during_auto_open() {
        let mut v = Visibility::default();
        v.auto_show();
        assert!(v.user_close());
        assert!(!v.auto_close());
        assert_eq!(v.phase, TriggerPhase::UserControlled);
    }

    #[test]
    fn test_toggle() {
        let mut v = Visibility::default();
        v.user_toggle();
        assert!(v.is_open);
        v.user_toggle();
        assert!(!v.is_open);
    }
}
