use dioxus::prelude::*;
use shared_types::{user_label, CurrentUser};
use shared_ui::{Button, Card, CardContent, CardDescription, CardTitle, Input, Label};

use crate::auth::{use_auth_client, use_session};
use crate::routes::Route;

/// Read-only view of the signed-in user.
#[component]
pub fn Profile() -> Element {
    let client = use_auth_client();
    let user = client.current_user();
    let name = user_label(user.as_ref());
    let email = user
        .as_ref()
        .and_then(|u| u.email.clone())
        .unwrap_or_else(|| "Not provided".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        main { class: "profile-page",
            Card {
                CardTitle { "Profile" }
                dl { class: "profile-details",
                    dt { "Name" }
                    dd { "{name}" }
                    dt { "Email" }
                    dd { "{email}" }
                }
                div { class: "profile-actions",
                    Link { to: Route::ProfileEdit {}, class: "profile-link", "Update Profile" }
                    Link { to: Route::Dashboard {}, class: "profile-link", "Back to Dashboard" }
                }
            }
        }
    }
}

/// Rename the user held by the local session.
#[component]
pub fn ProfileEdit() -> Element {
    let mut session = use_session();
    let current = session.current_user.read().clone();
    let mut display_name = use_signal(|| {
        current
            .as_ref()
            .and_then(|u| u.display_name.clone())
            .unwrap_or_default()
    });
    let mut saved = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let email = session.current_user.read().as_ref().and_then(|u| u.email.clone());
        let name = display_name().trim().to_string();
        session.set_user(CurrentUser {
            display_name: (!name.is_empty()).then_some(name),
            email,
        });
        tracing::info!("Profile updated");
        saved.set(true);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        main { class: "profile-page",
            Card {
                CardTitle { "Update Profile" }
                CardDescription { "Change how your name appears on the dashboard." }
                CardContent {
                    if !session.is_authenticated() {
                        p { class: "profile-signed-out", "You are signed out. Saving starts a new local session." }
                    }
                    form { onsubmit: handle_save,
                        div { class: "profile-field",
                            Label { html_for: "display_name", "Display name" }
                            Input {
                                id: "display_name",
                                placeholder: "Your name",
                                value: display_name(),
                                on_input: move |e: FormEvent| {
                                    saved.set(false);
                                    display_name.set(e.value());
                                },
                            }
                        }
                        if saved() {
                            p { class: "profile-saved", "Saved." }
                        }
                        div { class: "profile-actions",
                            Button { button_type: "submit", "Save" }
                            Link { to: Route::Profile {}, class: "profile-link", "Cancel" }
                        }
                    }
                }
            }
        }
    }
}
