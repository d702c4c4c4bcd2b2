pub mod profile_menu;
pub mod quote_carousel;
pub mod upload_panel;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdBrain, LdFlaskRound, LdMicroscope};
use dioxus_free_icons::Icon;
use shared_types::{user_label, DashboardConfig, UploadedFile, UPLOAD_PANELS};

use crate::auth::use_auth_client;
use profile_menu::ProfileMenu;
use quote_carousel::QuoteCarousel;
use upload_panel::UploadPanel;

/// Analysis landing page: header with the account menu, one upload panel per
/// input kind and the rotating quote.
#[component]
pub fn Dashboard() -> Element {
    let client = use_auth_client();
    let settings: DashboardConfig = use_context();
    let name = user_label(client.current_user().as_ref());

    // Uploads are handled by the analysis service once it is wired in.
    let on_file_upload = move |file: UploadedFile| {
        tracing::debug!(name = %file.name, size = file.size, "File selected");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            header { class: "dashboard-header",
                div { class: "dashboard-header-inner",
                    div { class: "dashboard-brand",
                        span { class: "dashboard-brand-icon",
                            Icon::<LdMicroscope> { icon: LdMicroscope, width: 32, height: 32 }
                        }
                        h1 { class: "dashboard-title", "{settings.title}" }
                    }
                    div { class: "dashboard-header-actions",
                        div { class: "dashboard-status-icons",
                            span { class: "status-icon status-activity",
                                Icon::<LdActivity> { icon: LdActivity, width: 24, height: 24 }
                            }
                            span { class: "status-icon status-brain",
                                Icon::<LdBrain> { icon: LdBrain, width: 24, height: 24 }
                            }
                            span { class: "status-icon status-flask",
                                Icon::<LdFlaskRound> { icon: LdFlaskRound, width: 24, height: 24 }
                            }
                        }
                        ProfileMenu { label: name.clone() }
                    }
                }
            }

            main { class: "dashboard-main",
                section { class: "dashboard-welcome",
                    h2 { class: "dashboard-welcome-title", "Welcome, {name}!" }
                    p { class: "dashboard-welcome-text",
                        "Use the tools below to analyze kidney health through tissue images or medical reports."
                    }
                }

                div { class: "upload-grid",
                    for config in UPLOAD_PANELS.iter().copied() {
                        UploadPanel {
                            key: "{config.heading}",
                            config: config,
                            on_file_upload: on_file_upload,
                        }
                    }
                }

                QuoteCarousel { interval_ms: settings.quote_interval_ms() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::testing::StubBackend;
    use crate::auth::AuthClient;
    use shared_types::{CurrentUser, INSPIRATIONAL_QUOTES};

    #[component]
    fn Harness(user: Option<CurrentUser>) -> Element {
        use_context_provider(|| AuthClient::new(StubBackend::with_user(user.clone())));
        use_context_provider(DashboardConfig::default);
        rsx! { Dashboard {} }
    }

    fn render(user: Option<CurrentUser>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { user });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[tokio::test]
    async fn greets_user_by_display_name() {
        let html = render(Some(CurrentUser::named("Alice")));
        assert!(html.contains("Welcome, Alice!"));
        assert!(html.contains(r#"<span class="profile-name">Alice</span>"#));
    }

    #[tokio::test]
    async fn falls_back_to_user_when_signed_out() {
        let html = render(None);
        assert!(html.contains("Welcome, User!"));
        assert!(html.contains(r#"<span class="profile-name">User</span>"#));
    }

    #[tokio::test]
    async fn falls_back_to_user_without_display_name() {
        let html = render(Some(CurrentUser::default()));
        assert!(html.contains("Welcome, User!"));
    }

    #[tokio::test]
    async fn renders_both_upload_panels_as_configured() {
        let html = render(None);
        assert!(html.contains("Tissue Image Analysis"));
        assert!(html.contains("Upload Tissue Image"));
        assert!(html.contains("Drop a tissue image or click to browse"));
        assert!(html.contains(r#"accept="image/*""#));

        assert!(html.contains("Medical Report Analysis"));
        assert!(html.contains("Upload Medical Report"));
        assert!(html.contains("Drop a report file (CSV, XLSX, or PDF) or click to browse"));
        assert!(html.contains(r#"accept=".csv,.xlsx,.pdf""#));
    }

    #[tokio::test]
    async fn shows_first_quote_on_mount() {
        let html = render(None);
        assert!(html.contains(INSPIRATIONAL_QUOTES[0].text));
        assert!(html.contains("- Unknown"));
        assert!(!html.contains(INSPIRATIONAL_QUOTES[1].text));
    }

    #[tokio::test]
    async fn profile_menu_starts_closed() {
        let html = render(Some(CurrentUser::named("Alice")));
        assert!(!html.contains("View Profile"));
        assert!(!html.contains("Logout"));
    }

    #[tokio::test]
    async fn header_uses_configured_title() {
        let html = render(None);
        assert!(html.contains("KidneyAI Analysis System"));
    }
}
