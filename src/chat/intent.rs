use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reply bucket chosen for a piece of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Features,
    Pricing,
    Demo,
    Support,
    Default,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Greeting,
        Intent::Features,
        Intent::Pricing,
        Intent::Demo,
        Intent::Support,
        Intent::Default,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Features => "features",
            Intent::Pricing => "pricing",
            Intent::Demo => "demo",
            Intent::Support => "support",
            Intent::Default => "default",
        }
    }

    /// Resolve a free-form action key (as carried by UI buttons) to an intent.
    /// Unknown keys land on `Default`.
    pub fn from_action_key(key: &str) -> Intent {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == key)
            .unwrap_or(Intent::Default)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checked in order; the first bucket with a matching keyword wins.
const KEYWORD_BUCKETS: [(Intent, &[&str]); 5] = [
    (Intent::Greeting, &["hello", "hi", "hey"]),
    (Intent::Features, &["feature", "what", "do"]),
    (Intent::Pricing, &["price", "cost", "plan"]),
    (Intent::Demo, &["demo", "show", "see"]),
    (Intent::Support, &["support", "help", "contact"]),
];

/// Pick an intent by plain substring containment over the lower-cased input.
///
/// Keyword sets overlap, so bucket order decides ambiguous input:
/// "hi, what features?" is a greeting, not a features question.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    KEYWORD_BUCKETS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Default)
}

/// Shortcut buttons shown under the chat transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    Demo,
    Features,
    Pricing,
    Support,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::Demo,
        QuickAction::Features,
        QuickAction::Pricing,
        QuickAction::Support,
    ];

    pub fn intent(self) -> Intent {
        match self {
            QuickAction::Demo => Intent::Demo,
            QuickAction::Features => Intent::Features,
            QuickAction::Pricing => Intent::Pricing,
            QuickAction::Support => Intent::Support,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::Demo => "Book a demo",
            QuickAction::Features => "Features",
            QuickAction::Pricing => "Pricing",
            QuickAction::Support => "Support",
        }
    }
}

impl FromStr for QuickAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "demo" => Ok(QuickAction::Demo),
            "features" => Ok(QuickAction::Features),
            "pricing" => Ok(QuickAction::Pricing),
            "support" => Ok(QuickAction::Support),
            other => Err(format!("unknown quick action: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_wins_over_features() {
        assert_eq!(classify("Hi there, what are your features?"), Intent::Greeting);
    }

    #[test]
    fn test_demo_wins_over_pricing() {
        assert_eq!(classify("I want a demo of your pricing"), Intent::Demo);
    }

    #[test]
    fn test_gibberish_is_default() {
        assert_eq!(classify("asdkjasd"), Intent::Default);
        assert_eq!(classify(""), Intent::Default);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("PRICE LIST"), Intent::Pricing);
        assert_eq!(classify("Need SUPPORT"), Intent::Support);
    }

    #[test]
    fn test_substring_matching_is_loose() {
        // "show" contains no earlier keyword, "this" contains "hi"
        assert_eq!(classify("show me"), Intent::Demo);
        assert_eq!(classify("this"), Intent::Greeting);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for input in ["cost?", "contact us", "can I see it", "zzz"] {
            assert_eq!(classify(input), classify(input));
        }
    }

    #[test]
    fn test_action_key_fallback() {
        assert_eq!(Intent::from_action_key("pricing"), Intent::Pricing);
        assert_eq!(Intent::from_action_key("greeting"), Intent::Greeting);
        assert_eq!(Intent::from_action_key("careers"), Intent::Default);
        assert_eq!(Intent::from_action_key("Pricing"), Intent::Default);
    }

    #[test]
    fn test_quick_action_parse() {
        assert_eq!("demo".parse::<QuickAction>(), Ok(QuickAction::Demo));
        assert!("billing".parse::<QuickAction>().is_err());
        for action in QuickAction::ALL {
            assert_eq!(Intent::from_action_key(action.intent().as_str()), action.intent());
        }
    }
}
