pub mod api_utils;
pub mod components;
pub mod format;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod receipt;
