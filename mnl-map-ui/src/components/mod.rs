//! Reusable Dioxus RSX components for the lakes explorer.

mod app_header;
mod county_selector;
mod error_display;
mod fish_survey;
mod lake_detail;
mod loading_spinner;
mod map_container;
mod result_list;
mod search_box;

pub use app_header::AppHeader;
pub use county_selector::CountySelector;
pub use error_display::ErrorDisplay;
pub use fish_survey::FishSurveyPanel;
pub use lake_detail::LakeDetailPanel;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use result_list::ResultList;
pub use search_box::SearchBox;
