use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub logo_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            logo_class: "brand-logo",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            logo_class: "brand-logo brand-logo-dark",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f4f8fb;
    --color-text-primary: #0f172a;
    --color-text-muted: #475569;
    --color-border: #e2e8f0;
    --color-accent: #0d9488;
    --color-accent-text: #ffffff;
    --color-error-bg: #fef2f2;
    --color-error-text: #b91c1c;
    --color-notice-bg: #ecfdf5;
    --color-notice-text: #047857;
    --color-chat-panel: #ffffff;
    --color-chat-user-bg: #0d9488;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #f1f5f9;
    --color-chat-bot-text: #0f172a;
    --color-timestamp: #64748b;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b1120;
    --color-bg-secondary: #111827;
    --color-text-primary: #f8fafc;
    --color-text-muted: #94a3b8;
    --color-border: #1f2937;
    --color-accent: #2dd4bf;
    --color-accent-text: #042f2e;
    --color-error-bg: #450a0a;
    --color-error-text: #fecaca;
    --color-notice-bg: #022c22;
    --color-notice-text: #a7f3d0;
    --color-chat-panel: #111827;
    --color-chat-user-bg: #2dd4bf;
    --color-chat-user-text: #042f2e;
    --color-chat-bot-bg: #1f2937;
    --color-chat-bot-text: #f8fafc;
    --color-timestamp: #94a3b8;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
"#;
