use crate::types::ThemeMode;
use dioxus::prelude::*;

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Smart scheduling",
        "Online booking, reminders and waitlists that keep every calendar full.",
    ),
    (
        "Unified records",
        "One secure timeline per patient, shared across doctors and clinics.",
    ),
    (
        "Telehealth built in",
        "Start a video visit from the appointment itself. Nothing to install.",
    ),
];

#[component]
pub fn HomeView(on_get_started: EventHandler<()>) -> Element {
    let theme = use_context::<Signal<ThemeMode>>();
    let hero_class = match theme() {
        ThemeMode::Light => "hero",
        ThemeMode::Dark => "hero hero-dark",
    };
    rsx! {
        div { class: "main-container",
            section { class: hero_class,
                h1 { class: "hero-title", "Healthcare operations, simplified." }
                p { class: "hero-subtitle text-muted",
                    "CareHub connects patients, doctors and administrators on one platform."
                }
                button {
                    class: "btn btn-primary", r#type: "button",
                    onclick: move |_| on_get_started.call(()),
                    "Start free trial"
                }
            }
            section { class: "highlights",
                for (title, body) in HIGHLIGHTS {
                    div { key: "{title}", class: "highlight-card",
                        h3 { class: "section-title", "{title}" }
                        p { class: "text-muted", "{body}" }
                    }
                }
            }
        }
    }
}
