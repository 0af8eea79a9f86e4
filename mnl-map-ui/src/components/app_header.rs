//! Application header with title and data-source note.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AppHeaderProps {
    /// Application title
    pub title: String,
    /// Short note under the title (e.g. data provenance)
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for the explorer showing title and an optional subtitle.
#[component]
pub fn AppHeader(props: AppHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
