pub mod common {
    pub const LOADING: &str = "Loading...";
}

pub mod layout {
    pub const BRAND: &str = "Dashboard";
    pub const NAV_ARTICLES: &str = "Articles";
    pub const NAV_ARIA: &str = "Main navigation";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "Pagination";
    pub const PREV: &str = "Previous";
    pub const NEXT: &str = "Next";
    pub const PAGE_OF_TEMPLATE: &str = "Page {} / {}";
    pub const LIMIT_LABEL: &str = "Per page";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod articles_list {
    pub const TITLE: &str = "Articles";
    pub const SUBTITLE: &str = "Manage the articles you have written.";
    pub const CREATE: &str = "New article";
    pub const FILTER_HEADING: &str = "Filter";
    pub const FILTER_TITLE: &str = "Title";
    pub const FILTER_TITLE_PLACEHOLDER: &str = "Search title";
    pub const FILTER_CATEGORY: &str = "Category";
    pub const FILTER_CATEGORY_PLACEHOLDER: &str = "Category";
    pub const FILTER_STATUS: &str = "Status";
    pub const FILTER_STATUS_ANY: &str = "All";
    pub const RESET: &str = "Reset";
    pub const LIST_HEADING: &str = "Article list";
    pub const EMPTY: &str = "No data";
    pub const EDIT: &str = "Edit";
    pub const DELETE: &str = "Delete";
    pub const DELETE_CONFIRM: &str = "Delete this article?";
    pub const META_TEMPLATE: &str = "Category: {}";
    pub const LOAD_FAILED_TEMPLATE: &str = "Failed to load articles: {}";
    pub const DELETE_FAILED_TEMPLATE: &str = "Failed to delete article: {}";
}

pub mod article_form {
    pub const CREATE_TITLE: &str = "New article";
    pub const EDIT_TITLE: &str = "Edit article";
    pub const BACK: &str = "Back to list";
    pub const TITLE: &str = "Title";
    pub const TITLE_PLACEHOLDER: &str = "Article title";
    pub const CATEGORY: &str = "Category";
    pub const CATEGORY_PLACEHOLDER: &str = "Category";
    pub const STATUS: &str = "Status";
    pub const CONTENT: &str = "Content";
    pub const CONTENT_PLACEHOLDER: &str = "Write the article content";
    pub const SUBMIT: &str = "Save";
    pub const SUBMITTING: &str = "Saving...";
    pub const SAVE_FAILED: &str = "Failed to save";
    pub const LOAD_FAILED: &str = "Failed to load";
    pub const NOT_FOUND: &str = "This article does not exist or has been deleted.";
    pub const CHAR_COUNT_TEMPLATE: &str = "{} / {} characters";
}

pub mod not_found {
    pub const TITLE: &str = "Page not found";
    pub const BACK: &str = "Back to articles";
}
