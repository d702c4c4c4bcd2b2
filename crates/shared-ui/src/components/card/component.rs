use dioxus::prelude::*;

/// Frosted-glass panel used for dashboard sections.
///
/// `glow` adds the slow pulsing shadow used on the header and upload panels.
#[component]
pub fn Card(
    #[props(default = false)] glow: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = if glow { "card card-glow" } else { "card" };
    let base = vec![Attribute::new("class", class, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Heading row of a Card. Children after the icon are the title text.
#[component]
pub fn CardTitle(
    #[props(default)] icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h2 {
            ..merged,
            if let Some(icon) = icon {
                span { class: "card-title-icon", {icon} }
            }
            {children}
        }
    }
}

/// Muted helper text under a CardTitle.
#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_renders_title_and_content() {
        let html = dioxus_ssr::render_element(rsx! {
            Card { glow: true,
                CardTitle { "Tissue Image Analysis" }
                CardContent { p { "body" } }
            }
        });
        assert!(html.contains("card card-glow"));
        assert!(html.contains("<h2"));
        assert!(html.contains("Tissue Image Analysis"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn card_without_glow_has_plain_class() {
        let html = dioxus_ssr::render_element(rsx! {
            Card { CardDescription { "hint" } }
        });
        assert!(html.contains("class=\"card\""));
        assert!(html.contains("hint"));
    }
}
