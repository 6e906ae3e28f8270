use crate::auth::{LoginForm, submit_login};
use crate::ui::AuthHandle;
use crate::views::shared::{Banner, FormBanner};
use dioxus::prelude::*;

#[component]
pub fn LoginView(on_switch: EventHandler<()>) -> Element {
    let auth = use_context::<AuthHandle>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut banner = use_signal(|| Option::<FormBanner>::None);
    let mut submitting = use_signal(|| false);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        if submitting() {
            return;
        }
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        let auth = auth.clone();
        banner.set(None);
        submitting.set(true);
        spawn(async move {
            let outcome = submit_login(auth.backend(), &form).await;
            banner.set(Some(FormBanner::from_outcome(
                outcome,
                "Signed in. Taking you to your dashboard…",
            )));
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "main-container auth-container",
            h2 { class: "auth-title", "Welcome back" }
            Banner { banner }
            form { class: "auth-form", onsubmit: on_submit,
                label { class: "field",
                    span { "Email" }
                    input {
                        r#type: "email", autocomplete: "email",
                        value: "{email}",
                        oninput: move |ev| email.set(ev.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    input {
                        r#type: "password", autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |ev| password.set(ev.value()),
                    }
                }
                button {
                    class: "btn btn-primary", r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in…" } else { "Sign in" }
                }
            }
            p { class: "text-muted auth-switch",
                "New to CareHub? "
                button {
                    class: "link-btn", r#type: "button",
                    onclick: move |_| on_switch.call(()),
                    "Create an account"
                }
            }
        }
    }
}
