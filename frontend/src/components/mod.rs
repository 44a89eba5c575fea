// Building blocks shared by the dashboard pages.

pub mod article_form;
pub mod article_row;
pub mod error_banner;
pub mod filter_bar;
pub mod loading_spinner;
pub mod pagination;
