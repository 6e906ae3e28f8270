use crate::auth::{AuthBackend, backend_from_config};
use crate::config::AppConfig;
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{ChatBotWidget, HomeView, LoginView, SignupView};
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use std::sync::Arc;

const CAREHUB_CSS: Asset = asset!("/assets/carehub.css");

static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Hand the validated startup config to the UI. Later calls are ignored.
pub fn install_config(config: AppConfig) {
    let _ = APP_CONFIG.set(config);
}

fn app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// Shared auth backend, provided as context to the form views.
#[derive(Clone)]
pub struct AuthHandle(Arc<dyn AuthBackend>);

impl AuthHandle {
    pub fn backend(&self) -> &dyn AuthBackend {
        self.0.as_ref()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Home,
    Login,
    Signup,
}

#[component]
pub fn App() -> Element {
    let config = use_hook(app_config);
    let auth_url = config.auth_api_url.clone();
    use_context_provider(move || AuthHandle(Arc::from(backend_from_config(auth_url.as_deref()))));
    let theme = use_context_provider(|| Signal::new(ThemeMode::default()));
    let active_tab = use_signal(|| AppTab::Home);

    rsx! {
        ThemeStyles { theme }
        AppHeader { active_tab, theme }
        TabPanels { active_tab }
        ChatBotWidget { config: config.chatbot.clone() }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: CAREHUB_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>, theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    let definition = theme_definition(theme());
    let label = match theme() {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };
    rsx! {
        div { class: "header",
            div { class: "header-content",
                span { class: "{definition.logo_class}", "CareHub" }
                TabNavigation { active_tab }
                button {
                    class: "btn btn-ghost", r#type: "button",
                    onclick: move |_| theme.set(theme().toggled()),
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn TabPanels(active_tab: Signal<AppTab>) -> Element {
    let mut active_tab = active_tab;
    let mut switch_to = move |tab: AppTab| active_tab.set(tab);
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Home,
                children: rsx!( HomeView { on_get_started: move |_| switch_to(AppTab::Signup) } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Login,
                children: rsx!( LoginView { on_switch: move |_| switch_to(AppTab::Signup) } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Signup,
                children: rsx!( SignupView { on_switch: move |_| switch_to(AppTab::Login) } ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Home, label: "Home" }
            TabButton { active_tab, tab: AppTab::Login, label: "Sign in" }
            TabButton { active_tab, tab: AppTab::Signup, label: "Get started" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab { "tab active" } else { "tab" };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}
