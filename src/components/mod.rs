pub mod app_header;
pub mod error_banner;
pub mod input_panel;
pub mod lookup_screen;
pub mod result_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use app_header::{APP_SUBTITLE, APP_TITLE, AppHeader};
pub use error_banner::{ERROR_BANNER_HEIGHT, ERROR_ICON, ErrorBanner, ErrorBannerProps};
pub use input_panel::{InputPanel, InputPanelProps, LOADING_LABEL, SUBMIT_LABEL};
pub use lookup_screen::{ATTRIBUTION, LookupScreen, LookupScreenProps};
pub use result_panel::{RESULT_PANEL_HEIGHT, ResultPanel, ResultPanelProps};
