use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdQuote;
use dioxus_free_icons::Icon;
use shared_types::Carousel;
use shared_ui::Card;
use std::time::Duration;

use crate::hooks::use_interval;

/// One quote at a time, advancing every `interval_ms`.
///
/// The rotation timer belongs to this component and stops when it unmounts.
#[component]
pub fn QuoteCarousel(interval_ms: u64) -> Element {
    let mut carousel = use_signal(Carousel::for_quotes);

    use_interval(Duration::from_millis(interval_ms), move || {
        carousel.write().advance();
    });

    let index = carousel.read().index();
    let quote = carousel.read().current();

    rsx! {
        section { class: "quote-section",
            Card { class: "quote-card",
                span { class: "quote-icon",
                    Icon::<LdQuote> { icon: LdQuote, width: 24, height: 24 }
                }
                // Keyed on the index so the fade-in replays on every change.
                for i in [index] {
                    div { key: "{i}", class: "quote-body",
                        p { class: "quote-text", "\"{quote.text}\"" }
                        p { class: "quote-author", "- {quote.author}" }
                    }
                }
            }
        }
    }
}
