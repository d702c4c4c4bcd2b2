//! Hooks that tie browser-global side effects (timers, document listeners)
//! to the lifetime of the component that calls them.
//!
//! Everything acquired here is released when the owning scope is dropped:
//! spawned tasks are cancelled by the Dioxus runtime and document listeners
//! are removed from a `use_drop` callback.

use dioxus::core::Task;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static NEXT_LISTENER_ID: AtomicUsize = AtomicUsize::new(0);

/// Platform sleep: `gloo-timers` in the browser, tokio everywhere else.
pub async fn sleep(period: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(period).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(period).await;
}

/// Call `on_tick` every `period`, forever. The first call happens one full
/// period after start. Stops only when the future is dropped.
pub async fn run_interval(period: Duration, mut on_tick: impl FnMut()) {
    loop {
        sleep(period).await;
        on_tick();
    }
}

/// Repeating timer owned by the calling component.
///
/// The timer task is spawned once per mount; the period is read only then.
pub fn use_interval(period: Duration, on_tick: impl FnMut() + 'static) -> Task {
    use_hook(move || spawn(run_interval(period, on_tick)))
}

/// Script that installs a document `pointerdown` listener under
/// `window[key]` and reports whether each press landed inside an element
/// with `container_class`.
pub fn outside_click_script(key: &str, container_class: &str) -> String {
    format!(
        r#"
        (function() {{
            var handler = function(event) {{
                var target = event.target;
                var inside = !!(target && target.closest && target.closest('.{container_class}'));
                dioxus.send(inside);
            }};
            window['{key}'] = handler;
            document.addEventListener('pointerdown', handler);
        }})();
        await dioxus.recv();
        "#
    )
}

/// Script that removes a listener installed by [`outside_click_script`].
pub fn remove_listener_script(key: &str) -> String {
    format!(
        r#"
        (function() {{
            var handler = window['{key}'];
            if (handler) {{
                document.removeEventListener('pointerdown', handler);
                delete window['{key}'];
            }}
        }})();
        "#
    )
}

/// Report every document pointer-down to `on_pointer_down(inside)`, where
/// `inside` says whether the press hit an element with `container_class`.
///
/// The listener is registered once per mount and removed on unmount.
pub fn use_outside_click(container_class: &'static str, mut on_pointer_down: impl FnMut(bool) + 'static) {
    let key = use_hook(|| {
        format!(
            "__outsideClick{}",
            NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed)
        )
    });

    let install_key = key.clone();
    use_hook(move || {
        spawn(async move {
            let mut eval = document::eval(&outside_click_script(&install_key, container_class));
            while let Ok(inside) = eval.recv::<bool>().await {
                on_pointer_down(inside);
            }
        })
    });

    use_drop(move || {
        let _ = document::eval(&remove_listener_script(&key));
    });
}
