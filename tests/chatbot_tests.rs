//! Integration tests for the chatbot widget
//!
//! Timer behaviour runs on tokio's paused clock, so the two-minute auto-show
//! delay costs nothing in wall time.

use carehub::chat::{
    ChatBot, ChatWidget, Intent, QuickAction, ResponseTable, Sender, TriggerPhase,
};
use carehub::config::ChatbotConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tokio::time::sleep;

fn seeded_bot(seed: u64) -> ChatBot {
    ChatBot::with_rng(&ChatbotConfig::default(), StdRng::seed_from_u64(seed))
}

fn seeded_widget(seed: u64) -> ChatWidget {
    ChatWidget::with_rng(&ChatbotConfig::default(), StdRng::seed_from_u64(seed))
}

mod reply_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_typed_message_gets_delayed_reply() {
        let bot = seeded_bot(11);
        assert!(bot.submit("Is there a cheaper plan?"));

        let session = bot.snapshot();
        assert!(session.is_bot_typing());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::User);

        // Reply delay is drawn from [1000, 2000) ms
        sleep(Duration::from_millis(999)).await;
        let session = bot.snapshot();
        assert!(session.is_bot_typing());
        assert_eq!(session.messages().len(), 1);

        sleep(Duration::from_millis(1001)).await;
        let session = bot.snapshot();
        assert!(!session.is_bot_typing());
        assert_eq!(session.messages().len(), 2);
        let reply = &session.messages()[1];
        assert_eq!(reply.sender, Sender::Bot);
        assert!(ResponseTable::contains(Intent::Pricing, &reply.text));
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_send_is_ignored() {
        let bot = seeded_bot(1);
        assert!(!bot.submit("   "));
        assert!(!bot.snapshot().is_bot_typing());

        sleep(Duration::from_secs(5)).await;
        assert!(bot.snapshot().messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_sends_each_get_a_reply() {
        let bot = seeded_bot(5);
        assert!(bot.submit("hello"));
        assert!(bot.submit("I need support"));
        assert_eq!(bot.snapshot().pending_replies(), 2);

        sleep(Duration::from_secs(3)).await;
        let session = bot.snapshot();
        assert_eq!(session.messages().len(), 4);
        assert_eq!(session.pending_replies(), 0);
        assert!(!session.is_bot_typing());

        let bot_replies: Vec<_> = session
            .messages()
            .iter()
            .filter(|m| m.sender == Sender::Bot)
            .collect();
        assert_eq!(bot_replies.len(), 2);
        // Replies arrive in firing order, so only membership is checked.
        for reply in bot_replies {
            assert!(
                ResponseTable::contains(Intent::Greeting, &reply.text)
                    || ResponseTable::contains(Intent::Support, &reply.text)
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_seed_same_conversation() {
        let inputs = ["hey", "what can it do", "price?", "show me", "asdkjasd"];
        let mut transcripts = Vec::new();
        for _ in 0..2 {
            let bot = seeded_bot(2024);
            for input in inputs {
                assert!(bot.submit(input));
                sleep(Duration::from_secs(2)).await;
            }
            let texts: Vec<String> = bot
                .snapshot()
                .messages()
                .iter()
                .map(|m| m.text.clone())
                .collect();
            transcripts.push(texts);
        }
        assert_eq!(transcripts[0], transcripts[1]);
        assert_eq!(transcripts[0].len(), inputs.len() * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_bot_cancels_pending_reply() {
        let bot = seeded_bot(9);
        let rx = bot.subscribe();
        assert!(bot.submit("hello"));
        drop(bot);

        sleep(Duration::from_secs(5)).await;
        assert_eq!(rx.borrow().messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_reply() {
        let bot = seeded_bot(9);
        assert!(bot.submit("hello"));
        bot.shutdown();

        sleep(Duration::from_secs(5)).await;
        let session = bot.snapshot();
        assert_eq!(session.messages().len(), 1);
        assert!(session.is_bot_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_action_never_shows_typing() {
        let bot = seeded_bot(3);
        let mut rx = bot.subscribe();
        let reply = bot.quick_action(QuickAction::Pricing);

        assert!(rx.has_changed().unwrap());
        let session = rx.borrow_and_update().clone();
        assert!(!session.is_bot_typing());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].text, reply);
        assert!(ResponseTable::contains(Intent::Pricing, reply));

        sleep(Duration::from_secs(3)).await;
        assert!(!rx.has_changed().unwrap());
    }
}

mod trigger_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_auto_show_then_auto_close() {
        let widget = seeded_widget(1);
        widget.start();

        sleep(Duration::from_millis(119_999)).await;
        let visibility = widget.visibility();
        assert!(!visibility.is_open);
        assert_eq!(visibility.phase, TriggerPhase::Hidden);
        assert!(widget.session().messages().is_empty());

        sleep(Duration::from_millis(2)).await;
        let visibility = widget.visibility();
        assert!(visibility.is_open);
        assert_eq!(visibility.phase, TriggerPhase::AutoOpen);
        let session = widget.session();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(
            session.messages()[0].text,
            ResponseTable::first(Intent::Greeting)
        );

        sleep(Duration::from_millis(10_000)).await;
        let visibility = widget.visibility();
        assert!(!visibility.is_open);
        assert_eq!(visibility.phase, TriggerPhase::UserControlled);

        sleep(Duration::from_secs(600)).await;
        assert!(!widget.visibility().is_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_open_suppresses_auto_show() {
        let widget = seeded_widget(2);
        let mut rx = widget.subscribe_visibility();
        widget.start();

        sleep(Duration::from_secs(5)).await;
        widget.open();
        assert!(widget.visibility().is_open);
        let _ = rx.borrow_and_update();

        sleep(Duration::from_secs(300)).await;
        assert!(!rx.has_changed().unwrap());
        let visibility = widget.visibility();
        assert!(visibility.is_open);
        assert_eq!(visibility.phase, TriggerPhase::UserControlled);
        assert_eq!(widget.session().messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_close_then_no_auto_show() {
        let widget = seeded_widget(2);
        widget.start();

        widget.open();
        widget.close();
        sleep(Duration::from_secs(300)).await;
        assert!(!widget.visibility().is_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interaction_cancels_auto_close() {
        let widget = seeded_widget(3);
        widget.start();

        sleep(Duration::from_millis(120_001)).await;
        assert_eq!(widget.visibility().phase, TriggerPhase::AutoOpen);

        widget.open();
        sleep(Duration::from_secs(60)).await;
        let visibility = widget.visibility();
        assert!(visibility.is_open);
        assert_eq!(visibility.phase, TriggerPhase::UserControlled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_open_seeds_greeting_once() {
        let widget = seeded_widget(4);
        widget.open();
        widget.close();
        widget.open();

        let session = widget.session();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_before_auto_show() {
        let widget = seeded_widget(5);
        widget.start();
        widget.shutdown();

        sleep(Duration::from_secs(300)).await;
        let visibility = widget.visibility();
        assert!(!visibility.is_open);
        assert_eq!(visibility.phase, TriggerPhase::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_opens_and_closes() {
        let widget = seeded_widget(6);
        assert!(widget.toggle());
        assert_eq!(widget.session().messages().len(), 1);
        assert!(!widget.toggle());
        assert!(!widget.visibility().is_open);
    }
}
