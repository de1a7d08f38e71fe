use dioxus::logger::tracing;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// How long the copy result stays on the button.
const COPY_FEEDBACK_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CopyStatus {
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    fn label(self) -> &'static str {
        match self {
            CopyStatus::Idle => "Copy link",
            CopyStatus::Copied => "Copied",
            CopyStatus::Failed => "Copy failed",
        }
    }
}

fn status_after(result: Result<(), String>) -> CopyStatus {
    match result {
        Ok(()) => CopyStatus::Copied,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            CopyStatus::Failed
        }
    }
}

/// Write `text` to the system clipboard.
async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

#[component]
pub fn CoordinateInput(
    lat_text: Signal<String>,
    lng_text: Signal<String>,
    share_url: Option<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let mut copy_status = use_signal(|| CopyStatus::Idle);

    rsx! {
        form {
            class: "input-bar",
            onsubmit: move |evt: Event<FormData>| {
                evt.prevent_default();
                on_submit.call(());
            },
            label { r#for: "lat-input", "Latitude" }
            input {
                id: "lat-input",
                r#type: "text",
                placeholder: "e.g. 40.7128",
                value: "{lat_text}",
                oninput: move |evt: Event<FormData>| {
                    lat_text.set(evt.value().to_string());
                },
                onkeydown: move |evt: Event<KeyboardData>| evt.stop_propagation(),
            }
            label { r#for: "lng-input", "Longitude" }
            input {
                id: "lng-input",
                r#type: "text",
                placeholder: "e.g. -74.0060",
                value: "{lng_text}",
                oninput: move |evt: Event<FormData>| {
                    lng_text.set(evt.value().to_string());
                },
                onkeydown: move |evt: Event<KeyboardData>| evt.stop_propagation(),
            }
            button { r#type: "submit", "Scan Area" }

            if let Some(url) = &share_url {
                div { class: "share-link",
                    input {
                        r#type: "text",
                        readonly: true,
                        value: "{url}",
                        onkeydown: move |evt: Event<KeyboardData>| evt.stop_propagation(),
                    }
                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: {
                            let url = url.clone();
                            move |_| {
                                let url = url.clone();
                                wasm_bindgen_futures::spawn_local(async move {
                                    copy_status.set(status_after(copy_to_clipboard(&url).await));
                                    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                                    copy_status.set(CopyStatus::Idle);
                                });
                            }
                        },
                        "{copy_status.read().label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_labels() {
        assert_eq!(CopyStatus::Idle.label(), "Copy link");
        assert_eq!(CopyStatus::Copied.label(), "Copied");
        assert_eq!(CopyStatus::Failed.label(), "Copy failed");
    }

    #[test]
    fn test_failed_write_is_not_reported_as_copied() {
        assert_eq!(
            status_after(Err("NotAllowedError".to_string())),
            CopyStatus::Failed
        );
        assert_eq!(status_after(Ok(())), CopyStatus::Copied);
    }
}
