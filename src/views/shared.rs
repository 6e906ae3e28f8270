use crate::auth::AuthOutcome;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

pub fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// Inline status region shared by the auth forms.
#[derive(Clone, Debug, PartialEq)]
pub enum FormBanner {
    Error(String),
    Notice(String),
}

impl FormBanner {
    pub fn from_outcome(outcome: AuthOutcome, success_text: &str) -> Self {
        match outcome {
            AuthOutcome::Authenticated => FormBanner::Notice(success_text.to_string()),
            AuthOutcome::VerificationRequired { message } => FormBanner::Notice(message),
            AuthOutcome::Failed { error } => FormBanner::Error(error),
        }
    }
}

#[component]
pub fn Banner(banner: Signal<Option<FormBanner>>) -> Element {
    let mut banner = banner;
    let (class, text) = match banner() {
        Some(FormBanner::Error(text)) => ("form-banner error", text),
        Some(FormBanner::Notice(text)) => ("form-banner notice", text),
        None => return rsx! {},
    };
    rsx! {
        div { class: class, role: "alert",
            span { class: "form-banner-text", "{text}" }
            button {
                class: "icon-btn", r#type: "button", title: "Dismiss",
                onclick: move |_| banner.set(None),
                "×"
            }
        }
    }
}
