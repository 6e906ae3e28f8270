use crate::auth::{AccountRole, AuthOutcome, SignupForm, submit_signup};
use crate::ui::AuthHandle;
use crate::views::shared::{Banner, FormBanner};
use dioxus::prelude::*;

#[component]
pub fn SignupView(on_switch: EventHandler<()>) -> Element {
    let auth = use_context::<AuthHandle>();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(AccountRole::default);
    let mut accept_terms = use_signal(|| false);
    let mut banner = use_signal(|| Option::<FormBanner>::None);
    let mut submitting = use_signal(|| false);
    // Set once the account needs email verification; the message stays up
    // until the user moves on to sign in.
    let mut awaiting_verification = use_signal(|| false);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        if submitting() {
            return;
        }
        let form = SignupForm {
            full_name: full_name(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
            role: role(),
            accept_terms: accept_terms(),
        };
        let auth = auth.clone();
        banner.set(None);
        submitting.set(true);
        spawn(async move {
            let outcome = submit_signup(auth.backend(), &form).await;
            awaiting_verification.set(matches!(outcome, AuthOutcome::VerificationRequired { .. }));
            banner.set(Some(FormBanner::from_outcome(
                outcome,
                "Account created. Welcome to CareHub!",
            )));
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "main-container auth-container",
            h2 { class: "auth-title", "Create your account" }
            Banner { banner }
            if awaiting_verification() {
                button {
                    class: "btn btn-primary", r#type: "button",
                    onclick: move |_| on_switch.call(()),
                    "Continue to sign in"
                }
            } else {
                form { class: "auth-form", onsubmit: on_submit,
                    label { class: "field",
                        span { "Full name" }
                        input {
                            r#type: "text", autocomplete: "name",
                            value: "{full_name}",
                            oninput: move |ev| full_name.set(ev.value()),
                        }
                    }
                    label { class: "field",
                        span { "Email" }
                        input {
                            r#type: "email", autocomplete: "email",
                            value: "{email}",
                            oninput: move |ev| email.set(ev.value()),
                        }
                    }
                    label { class: "field",
                        span { "I am a" }
                        select {
                            onchange: move |ev| role.set(AccountRole::from_key(&ev.value())),
                            for option_role in AccountRole::ALL {
                                option {
                                    key: "{option_role.as_str()}",
                                    value: option_role.as_str(),
                                    selected: role() == option_role,
                                    "{option_role.label()}"
                                }
                            }
                        }
                    }
                    label { class: "field",
                        span { "Password" }
                        input {
                            r#type: "password", autocomplete: "new-password",
                            value: "{password}",
                            oninput: move |ev| password.set(ev.value()),
                        }
                    }
                    label { class: "field",
                        span { "Confirm password" }
                        input {
                            r#type: "password", autocomplete: "new-password",
                            value: "{confirm_password}",
                            oninput: move |ev| confirm_password.set(ev.value()),
                        }
                    }
                    label { class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: accept_terms(),
                            onchange: move |_| accept_terms.set(!accept_terms()),
                        }
                        span { "I agree to the Terms of Service and Privacy Policy" }
                    }
                    button {
                        class: "btn btn-primary", r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating account…" } else { "Create account" }
                    }
                }
                p { class: "text-muted auth-switch",
                    "Already have an account? "
                    button {
                        class: "link-btn", r#type: "button",
                        onclick: move |_| on_switch.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
