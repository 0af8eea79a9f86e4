//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a load error in a styled box.
///
/// Failed loads are terminal for the session (nothing is retried), so the
/// banner tells the user to reload the page.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error loading data: " }
            "{props.message}"
            p {
                style: "margin: 6px 0 0 0; font-size: 12px;",
                "Reload the page to try again."
            }
        }
    }
}
