#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn ModeToggle(dark: bool, ontoggle: EventHandler<()>) -> Element {
    let label = if dark { "Light mode" } else { "Dark mode" };
    rsx! {
        button {
            class: "mode-toggle",
            onclick: move |_| {
                tracing::info!("toggle clicked");
                ontoggle.call(());
            },
            "{label}"
        }
    }
}
