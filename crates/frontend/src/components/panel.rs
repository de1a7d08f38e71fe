use dioxus::prelude::*;

/// Sidebar panel whose body can be folded away under its title.
#[component]
pub fn CollapsiblePanel(
    title: String,
    #[props(default = true)] initially_open: bool,
    children: Element,
) -> Element {
    let mut open = use_signal(|| initially_open);
    let is_open = *open.read();

    rsx! {
        div { class: if is_open { "panel" } else { "panel collapsed" },
            button {
                class: "panel-toggle",
                r#type: "button",
                "aria-expanded": "{is_open}",
                onclick: move |_| open.set(!is_open),
                h3 { "{title}" }
                span { class: "chevron", if is_open { "\u{25be}" } else { "\u{25b8}" } }
            }
            if is_open {
                div { class: "panel-body", {children} }
            }
        }
    }
}
