use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdMicroscope};
use dioxus_free_icons::Icon;
use shared_types::{PanelIcon, UploadPanelConfig, UploadedFile};
use shared_ui::{Card, CardTitle, FileUpload};

/// A dashboard card wrapping the upload widget for one kind of input.
#[component]
pub fn UploadPanel(config: UploadPanelConfig, on_file_upload: EventHandler<UploadedFile>) -> Element {
    let icon = match config.icon {
        PanelIcon::Microscope => rsx! {
            Icon::<LdMicroscope> { icon: LdMicroscope, width: 24, height: 24 }
        },
        PanelIcon::FileText => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 }
        },
    };
    let accepted_types: Vec<String> = config.accepted_types.iter().map(|t| t.to_string()).collect();

    rsx! {
        div { class: "upload-panel",
            Card { glow: true,
                CardTitle { icon: icon, "{config.heading}" }
                FileUpload {
                    on_file_upload: on_file_upload,
                    accepted_types: accepted_types,
                    title: config.title,
                    description: config.description,
                }
            }
        }
    }
}
