use crate::chat::{ChatSession, ChatWidget, Message, QuickAction, Sender, Visibility};
use crate::config::ChatbotConfig;
use crate::views::shared::format_message_timestamp;
use dioxus::events::Key;
use dioxus::prelude::*;

fn sender_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "user",
        Sender::Bot => "bot",
    }
}

/// Floating assistant. The widget (and every timer it owns) lives as long as
/// this component is mounted.
#[component]
pub fn ChatBotWidget(config: ChatbotConfig) -> Element {
    let widget = use_signal(move || ChatWidget::new(&config));
    let session = use_signal(ChatSession::new);
    let visibility = use_signal(Visibility::default);
    let mut input = use_signal(String::new);
    let mut minimized = use_signal(|| false);

    use_hook(move || {
        let mut session_rx = widget.read().subscribe_session();
        let mut session = session;
        spawn(async move {
            while session_rx.changed().await.is_ok() {
                let next = session_rx.borrow_and_update().clone();
                session.set(next);
            }
        });

        let mut visibility_rx = widget.read().subscribe_visibility();
        let mut visibility = visibility;
        spawn(async move {
            while visibility_rx.changed().await.is_ok() {
                let next = *visibility_rx.borrow_and_update();
                visibility.set(next);
            }
        });

        widget.read().start();
    });

    use_drop(move || {
        if let Ok(widget) = widget.try_read() {
            widget.shutdown();
        }
    });

    let mut send_message = move || {
        if widget.read().submit(&input()) {
            input.set(String::new());
        }
    };

    let snapshot = session();
    if !visibility().is_open {
        return rsx! {
            button {
                class: "chatbot-launcher", r#type: "button", title: "Chat with us",
                onclick: move |_| widget.read().open(),
                "Chat with us"
            }
        };
    }

    rsx! {
        div { class: format_args!("chatbot-panel {}", if minimized() { "minimized" } else { "" }),
            div { class: "chatbot-header",
                div { class: "chatbot-title",
                    span { class: "status-dot" }
                    "CareHub Assistant"
                }
                div { class: "chatbot-controls",
                    button {
                        class: "icon-btn", r#type: "button",
                        title: if minimized() { "Expand" } else { "Minimize" },
                        onclick: move |_| minimized.set(!minimized()),
                        if minimized() { "▢" } else { "–" }
                    }
                    button {
                        class: "icon-btn", r#type: "button", title: "Close",
                        onclick: move |_| widget.read().close(),
                        "×"
                    }
                }
            }
            if !minimized() {
                div { class: "chatbot-messages",
                    for msg in snapshot.messages().iter() {
                        MessageBubble { key: "{msg.id}", message: msg.clone() }
                    }
                    if snapshot.is_bot_typing() {
                        div { class: "message-row bot",
                            div { class: "typing-indicator",
                                span {}
                                span {}
                                span {}
                            }
                        }
                    }
                }
                div { class: "quick-actions",
                    for action in QuickAction::ALL {
                        button {
                            key: "{action.intent()}",
                            class: "quick-action", r#type: "button",
                            onclick: move |_| {
                                widget.read().quick_action(action);
                            },
                            "{action.label()}"
                        }
                    }
                }
                div { class: "chatbot-composer",
                    input {
                        r#type: "text", placeholder: "Type your message…",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                send_message();
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary", r#type: "button",
                        disabled: input().trim().is_empty(),
                        onclick: move |_| send_message(),
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: Message) -> Element {
    let side = sender_class(message.sender);
    rsx! {
        div { class: format_args!("message-row {}", side),
            div { class: "message-stack",
                div { class: format_args!("bubble {}", side), "{message.text}" }
                if let Some(ts) = format_message_timestamp(message.timestamp) {
                    span { class: "message-timestamp", "{ts}" }
                }
            }
        }
    }
}
