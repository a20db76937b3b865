#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::Level;

mod browser;
mod theme;
mod toggle;

use browser::{BodyClasses, LocalStore};
use theme::Theme;

fn main() {
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("logger failed to init");

    launch(App);
}

const CSS: &str = "
body {
    margin: 0;
    font-family: system-ui, sans-serif;
    background: #f8fafc;
    color: #1e293b;
    transition: background 0.2s, color 0.2s;
}
body.dark-mode {
    background: #18181b;
    color: #f4f4f5;
}
main.page {
    max-width: 36rem;
    margin: 0 auto;
    padding: 4rem 1rem;
}
button.mode-toggle {
    height: 3rem;
    width: 100%;
    border: 1px solid #94a3b8;
    border-radius: 0.5rem;
    background: inherit;
    color: inherit;
    font-size: 1rem;
    cursor: pointer;
}
";

#[component]
fn App() -> Element {
    let mut theme = use_signal(|| Theme::new(LocalStore, BodyClasses));
    let mut dark = use_signal(|| false);

    use_effect(move || {
        let restored = {
            let mut theme = theme.write();
            theme.initialize();
            theme.is_dark()
        };
        *dark.write() = restored;
    });

    rsx! {
        style { {CSS} }
        main { class: "page",
            h1 { "dusk" }
            p { "Flip the switch below and reload, the page keeps the mode you picked." }
            toggle::ModeToggle {
                dark: *dark.read(),
                ontoggle: move |_| {
                    *dark.write() = theme.write().toggle();
                },
            }
        }
    }
}
