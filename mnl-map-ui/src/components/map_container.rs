//! Map container component.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Leaflet renders into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 600)]
    pub min_height: u32,
}

/// A container div the Leaflet map mounts into.
///
/// The div must keep a stable id across re-renders; Leaflet owns its
/// contents once initialized.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; height: {}px; width: 100%; border-radius: 4px; border: 1px solid #E0E0E0;",
        props.min_height, props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
