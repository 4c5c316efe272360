//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(optional)]
    id: Option<String>,
    /// Extra classes appended after the pico ones.
    #[props(default)]
    class: String,
}

/// A versatile button component. Without `on_click` it renders but does nothing.
pub fn Button(props: ButtonProps) -> Element {
    let mut classes = vec![props.button_type.to_class()];
    if props.outline {
        classes.push("outline");
    }
    classes.push(&props.class);
    let class_str = classes
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    rsx! {
        button {
            r#type: "button",
            id: props.id.clone(),
            class: "{class_str}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

// A titled modal that closes via its X control, a backdrop click, or the Escape key.
// The caller decides whether it is mounted at all.
#[derive(Props, PartialEq, Clone)]
pub struct DialogProps {
    title: String,
    on_close: EventHandler,
    /// id of the root element. The heading, backdrop and close control derive theirs from it.
    #[props(default = "modal".to_string())]
    id: String,
    #[props(default)]
    class: String,
    children: Element,
}

pub fn Dialog(props: DialogProps) -> Element {
    let on_close = props.on_close;
    let id = props.id;

    rsx! {
        div {
            id: "{id}",
            class: "modal-root",
            tabindex: "-1",
            // focus this element as soon as it is rendered into the DOM,
            // so Escape reaches it without a click first.
            autofocus: true,
            // Listen for keyboard events to close on "Escape".
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            // The backdrop is a sibling of the panel, so clicks inside the
            // panel never reach it.
            div {
                id: "{id}-backdrop",
                class: "modal-backdrop",
                "aria-hidden": "true",
                onclick: move |_| on_close.call(()),
            }
            article {
                class: "modal-panel {props.class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "{id}-title",
                header {
                    class: "modal-header",
                    h2 { id: "{id}-title", "{props.title}" }
                    button {
                        id: "{id}-close",
                        r#type: "button",
                        class: "modal-close",
                        "aria-label": "Close modal",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                {props.children}
            }
        }
    }
}
