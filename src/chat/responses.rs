use super::intent::Intent;
use rand::Rng;
use rand::seq::SliceRandom;

const GREETING: &[&str] = &[
    "Hello! I'm the CareHub assistant. How can I help you today?",
    "Hi there! Looking to streamline your practice? Ask me anything about CareHub.",
    "Hey! Welcome to CareHub. What would you like to know?",
];

const FEATURES: &[&str] = &[
    "CareHub brings scheduling, electronic health records, e-prescriptions and secure patient messaging into one platform.",
    "Doctors get a unified patient timeline, patients get a self-service portal, and admins get real-time reporting across every clinic.",
    "Our platform covers appointment booking, telehealth visits, billing and HIPAA-compliant record keeping out of the box.",
];

const PRICING: &[&str] = &[
    "We offer Starter, Professional and Enterprise plans. Starter begins at $49 per provider per month.",
    "Every plan includes a 14-day free trial with no credit card required. Check the Pricing page for a full comparison.",
    "Professional is our most popular plan at $99 per provider per month, including telehealth and advanced analytics.",
];

const DEMO: &[&str] = &[
    "I'd be happy to set up a demo! Leave your email on the Contact page and our team will reach out within one business day.",
    "Our live demos take about 30 minutes and are tailored to your practice. Would you like to book one?",
    "You can watch a recorded product tour on the Features page, or book a personal walkthrough with our team.",
];

const SUPPORT: &[&str] = &[
    "Our support team is available 24/7 at support@carehub.example or through the in-app help center.",
    "For account or technical issues, open a ticket from your dashboard and we'll respond within 2 hours.",
    "Need help right away? Call our support line or use the Contact page to reach a specialist.",
];

const DEFAULT: &[&str] = &[
    "I'm not sure I understood that. You can ask me about features, pricing, demos or support.",
    "Thanks for your message! Could you tell me a bit more about what you're looking for?",
    "Good question! A member of our team can help with that. Try the Contact page or ask about our plans.",
];

/// Canned reply lists, one per intent.
pub struct ResponseTable;

impl ResponseTable {
    pub fn replies(intent: Intent) -> &'static [&'static str] {
        match intent {
            Intent::Greeting => GREETING,
            Intent::Features => FEATURES,
            Intent::Pricing => PRICING,
            Intent::Demo => DEMO,
            Intent::Support => SUPPORT,
            Intent::Default => DEFAULT,
        }
    }

    /// First literal of the list; used where the pick must be deterministic.
    pub fn first(intent: Intent) -> &'static str {
        Self::replies(intent)[0]
    }

    /// Uniform pick among the replies registered for `intent`.
    pub fn pick<R: Rng + ?Sized>(intent: Intent, rng: &mut R) -> &'static str {
        Self::replies(intent)
            .choose(rng)
            .copied()
            .unwrap_or_else(|| Self::first(Intent::Default))
    }

    /// Pick by a raw UI action key, falling back to the default replies.
    pub fn pick_for_key<R: Rng + ?Sized>(key: &str, rng: &mut R) -> &'static str {
        Self::pick(Intent::from_action_key(key), rng)
    }

    pub fn contains(intent: Intent, reply: &str) -> bool {
        Self::replies(intent).contains(&reply)
    }
}
