pub mod article_create;
pub mod article_edit;
pub mod articles_list;
pub mod not_found;

pub use article_create::ArticleCreatePage;
pub use article_edit::ArticleEditPage;
pub use articles_list::ArticlesListPage;
pub use not_found::NotFoundPage;
