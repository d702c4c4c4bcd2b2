use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use dioxus_free_icons::Icon;
use shared_types::{accept_attribute, is_accepted, UploadedFile};

/// Split picked files into those matching `accepted_types` and the names of
/// those that don't.
pub fn partition_files(
    accepted_types: &[String],
    files: Vec<UploadedFile>,
) -> (Vec<UploadedFile>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for file in files {
        if is_accepted(accepted_types, &file.name, file.content_type.as_deref()) {
            accepted.push(file);
        } else {
            rejected.push(file.name);
        }
    }
    (accepted, rejected)
}

fn describe(files: Vec<FileData>) -> Vec<UploadedFile> {
    files
        .into_iter()
        .map(|f| UploadedFile {
            name: f.name(),
            size: f.size(),
            content_type: f.content_type(),
        })
        .collect()
}

/// Drop zone with a hidden file picker.
///
/// Files matching `accepted_types` are handed to `on_file_upload` one at a
/// time; anything else shows an inline notice and is dropped. What happens
/// to the file afterwards is the caller's business.
#[component]
pub fn FileUpload(
    on_file_upload: EventHandler<UploadedFile>,
    accepted_types: Vec<String>,
    title: String,
    description: String,
) -> Element {
    let mut dragging = use_signal(|| false);
    let mut rejected = use_signal(Vec::<String>::new);
    let accept = accept_attribute(&accepted_types[..]);
    let hint = accepted_types.join(", ");

    let mut deliver = {
        let accepted_types = accepted_types.clone();
        move |files: Vec<UploadedFile>| {
            let (ok, bad) = partition_files(&accepted_types, files);
            rejected.set(bad);
            for file in ok {
                on_file_upload.call(file);
            }
        }
    };
    let mut deliver_drop = deliver.clone();

    let rejected_names = rejected().join(", ");
    let zone_class = if dragging() {
        "file-upload file-upload-dragging"
    } else {
        "file-upload"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            class: zone_class,
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(false);
                deliver_drop(describe(evt.files()));
            },
            input {
                class: "file-upload-input",
                r#type: "file",
                accept: "{accept}",
                onchange: move |evt: FormEvent| deliver(describe(evt.files())),
            }
            span { class: "file-upload-icon",
                Icon::<LdUpload> { icon: LdUpload, width: 32, height: 32 }
            }
            span { class: "file-upload-title", "{title}" }
            span { class: "file-upload-description", "{description}" }
            span { class: "file-upload-types", "Accepted: {hint}" }
        }
        if !rejected_names.is_empty() {
            p { class: "file-upload-error", "Unsupported file type: {rejected_names}" }
        }
    }
}
