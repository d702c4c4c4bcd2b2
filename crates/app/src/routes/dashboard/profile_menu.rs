use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdUser};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::auth::{sign_out, use_auth_client, AuthClient};
use crate::hooks::use_outside_click;
use crate::routes::Route;

/// Class of the element that counts as "inside" the menu for outside-click
/// dismissal: the toggle button and the dropdown both live under it.
pub const MENU_CONTAINER_CLASS: &str = "profile-menu-container";

/// Visibility of the profile dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A pointer went down somewhere in the document. Presses outside the
    /// menu container close it; presses inside are left to the button and
    /// item handlers.
    pub fn on_pointer_down(&mut self, inside_container: bool) {
        if !inside_container {
            self.close();
        }
    }

    /// A menu item was activated.
    pub fn select(&mut self) {
        self.close();
    }
}

/// Document pointer-down: an open menu closes when the press missed it.
fn dismiss_on_pointer_down(mut menu: Signal<MenuState>, inside: bool) {
    if menu.peek().is_open() {
        menu.write().on_pointer_down(inside);
    }
}

/// Logout item: close the menu, then end the session in the background.
fn logout_selected(mut menu: Signal<MenuState>, client: AuthClient) {
    menu.write().select();
    spawn(async move {
        sign_out(&client).await;
    });
}

/// Profile toggle button plus its dropdown of account actions.
#[component]
pub fn ProfileMenu(label: String) -> Element {
    let client = use_auth_client();
    let mut menu = use_signal(MenuState::default);

    use_outside_click(MENU_CONTAINER_CLASS, move |inside| {
        dismiss_on_pointer_down(menu, inside)
    });

    let open = menu.read().is_open();

    rsx! {
        div { class: MENU_CONTAINER_CLASS,
            Button {
                variant: ButtonVariant::Pill,
                class: "profile-button",
                onclick: move |_| menu.write().toggle(),
                span { class: "profile-avatar",
                    Icon::<LdUser> { icon: LdUser, width: 20, height: 20 }
                }
                span { class: "profile-name", "{label}" }
                Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
            }

            if open {
                div { class: "profile-menu", role: "menu",
                    Link {
                        to: Route::Profile {},
                        class: "profile-menu-link",
                        onclick: move |_| {
                            tracing::debug!("Opening profile");
                            menu.write().select();
                        },
                        "View Profile"
                    }
                    Link {
                        to: Route::ProfileEdit {},
                        class: "profile-menu-link",
                        onclick: move |_| {
                            tracing::debug!("Opening profile editor");
                            menu.write().select();
                        },
                        "Update Profile"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| logout_selected(menu, client.clone()),
                        "Logout"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::testing::StubBackend;
    use crate::hooks::testing::run_for;
    use shared_types::CurrentUser;
    use std::time::Duration;

    #[derive(Clone, Copy, PartialEq)]
    enum Press {
        Inside,
        Outside,
        Logout,
    }

    /// Opens a menu, delivers one `press` to it after mount and renders
    /// whether it is still open.
    #[component]
    fn OpenMenu(client: AuthClient, press: Press) -> Element {
        let menu = use_signal(|| MenuState { open: true });
        use_hook(|| {
            let client = client.clone();
            spawn(async move {
                match press {
                    Press::Inside => dismiss_on_pointer_down(menu, true),
                    Press::Outside => dismiss_on_pointer_down(menu, false),
                    Press::Logout => logout_selected(menu, client),
                }
            })
        });

        let state = if menu.read().is_open() { "open" } else { "closed" };
        rsx! {
            span { "{state}" }
        }
    }

    async fn press_once(press: Press) -> (String, usize) {
        let backend = StubBackend::with_user(Some(CurrentUser::named("Alice")));
        let calls = backend.logout_calls.clone();
        let client = AuthClient::new(backend);

        let mut dom = VirtualDom::new_with_props(OpenMenu, OpenMenuProps { client, press });
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("<span>open</span>"));

        run_for(&mut dom, Duration::from_millis(50)).await;
        (dioxus_ssr::render(&dom), calls.get())
    }

    #[tokio::test(start_paused = true)]
    async fn logout_item_closes_menu_and_signs_out_once() {
        let (html, calls) = press_once(Press::Logout).await;
        assert!(html.contains("<span>closed</span>"));
        assert_eq!(calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_logout_still_closes_menu() {
        let mut backend = StubBackend::with_user(None);
        backend.fail_logout = true;
        let calls = backend.logout_calls.clone();
        let client = AuthClient::new(backend);

        let mut dom = VirtualDom::new_with_props(
            OpenMenu,
            OpenMenuProps {
                client,
                press: Press::Logout,
            },
        );
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_millis(50)).await;

        assert!(dioxus_ssr::render(&dom).contains("<span>closed</span>"));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn outside_press_closes_mounted_menu() {
        let (html, calls) = press_once(Press::Outside).await;
        assert!(html.contains("<span>closed</span>"));
        assert_eq!(calls, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn inside_press_leaves_mounted_menu_open() {
        let (html, calls) = press_once(Press::Inside).await;
        assert!(html.contains("<span>open</span>"));
        assert_eq!(calls, 0);
    }

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_pointer_down_closes_open_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.on_pointer_down(false);
        assert!(!menu.is_open());
    }

    #[test]
    fn inside_pointer_down_keeps_menu_open() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.on_pointer_down(true);
        assert!(menu.is_open());
    }

    #[test]
    fn outside_pointer_down_on_closed_menu_is_noop() {
        let mut menu = MenuState::default();
        menu.on_pointer_down(false);
        assert!(!menu.is_open());
    }

    #[test]
    fn selecting_an_item_closes_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.select();
        assert!(!menu.is_open());
    }
}
