//! Layout component wrapping the page with its stylesheet and head elements.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

#[component]
pub fn Layout(props: LayoutProps) -> Element {
    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{props.title}" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1"
        }
        document::Link {
            rel: "stylesheet",
            href: asset!("/public/site.css")
        }

        div { class: "page",
            {props.children}
        }
    }
}
