// 重新导出shared crate的数据模型
pub use article_admin_shared::{Article, ArticleStatus};
#[cfg(feature = "mock")]
use article_admin_shared::{ArticlePage, ArticlePatch, ArticlePayload, FetchParams, PaginationMeta};
#[cfg(feature = "mock")]
use std::cell::RefCell;

// =============== Mock 数据 ===============

#[cfg(feature = "mock")]
thread_local! {
    static MOCK_STORE: RefCell<MockStore> = RefCell::new(MockStore::seeded());
}

/// In-memory stand-in for the article backend.
#[cfg(feature = "mock")]
struct MockStore {
    articles: Vec<Article>,
    next_id: u64,
}

#[cfg(feature = "mock")]
impl MockStore {
    /// 23 articles: enough for three pages at the default limit.
    fn seeded() -> Self {
        let categories = ["Finance", "Engineering", "Marketing", "Operations", "People"];
        let topics = [
            "Quarterly budget review and forecast",
            "Migrating the billing service to Rust",
            "Spring campaign retrospective notes",
            "Warehouse onboarding checklist update",
            "Hiring plan for the platform team",
        ];
        let statuses = [ArticleStatus::Publish, ArticleStatus::Draft, ArticleStatus::Thrash];

        let articles = (1..=23u64)
            .map(|id| {
                let idx = (id as usize) % categories.len();
                let stamp = format!("2024-03-{:02}T09:{:02}:00Z", (id % 28) + 1, id % 60);
                Article {
                    id,
                    title: format!("{} #{}", topics[idx], id),
                    content: sample_content(topics[idx]),
                    category: categories[idx].to_string(),
                    status: statuses[(id as usize) % statuses.len()],
                    created_at: stamp.clone(),
                    updated_at: stamp,
                }
            })
            .collect();

        Self {
            articles,
            next_id: 24,
        }
    }

    /// Same semantics as the server: case-insensitive substring match on
    /// title and category, exact status, newest first.
    fn list(&self, params: &FetchParams) -> ArticlePage {
        let contains = |haystack: &str, needle: &Option<String>| {
            needle
                .as_ref()
                .map(|needle| haystack.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(true)
        };

        let mut matching: Vec<&Article> = self
            .articles
            .iter()
            .filter(|article| contains(&article.title, &params.title))
            .filter(|article| contains(&article.category, &params.category))
            .filter(|article| params.status.map_or(true, |status| article.status == status))
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));

        let limit = params.limit.max(1) as usize;
        let page = params.page.max(1) as usize;
        let start = limit.saturating_mul(page - 1);
        let total = matching.len();
        let items = matching.into_iter().skip(start).take(limit).cloned().collect();

        ArticlePage {
            items,
            meta: PaginationMeta {
                limit: params.limit,
                page: params.page,
                total: total as u64,
                has_next: start.saturating_add(limit) < total,
            },
        }
    }

    fn create(&mut self, payload: &ArticlePayload) -> Article {
        let now = now_iso();
        let article = Article {
            id: self.next_id,
            title: payload.title.clone(),
            content: payload.content.clone(),
            category: payload.category.clone(),
            status: payload.status,
            created_at: now.clone(),
            updated_at: now,
        };
        self.next_id += 1;
        self.articles.push(article.clone());
        article
    }

    fn update(&mut self, id: u64, patch: &ArticlePatch) -> Option<Article> {
        let article = self.articles.iter_mut().find(|article| article.id == id)?;
        if let Some(title) = &patch.title {
            article.title = title.clone();
        }
        if let Some(content) = &patch.content {
            article.content = content.clone();
        }
        if let Some(category) = &patch.category {
            article.category = category.clone();
        }
        if let Some(status) = patch.status {
            article.status = status;
        }
        article.updated_at = now_iso();
        Some(article.clone())
    }

    fn delete(&mut self, id: u64) -> bool {
        let before = self.articles.len();
        self.articles.retain(|article| article.id != id);
        self.articles.len() != before
    }
}

#[cfg(feature = "mock")]
fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(feature = "mock")]
fn sample_content(topic: &str) -> String {
    format!(
        "{topic}. This draft collects the context, the decisions taken so far and the open \
         points that still need an owner. Each section links the supporting documents and \
         lists who reviewed it. Comments are welcome until the end of the week, after which \
         the article is frozen and published to the internal handbook for everyone."
    )
}

/// 按条件返回一页文章
#[cfg(feature = "mock")]
pub fn mock_list_articles(params: &FetchParams) -> ArticlePage {
    MOCK_STORE.with(|store| store.borrow().list(params))
}

#[cfg(feature = "mock")]
pub fn mock_get_article(id: u64) -> Option<Article> {
    MOCK_STORE.with(|store| store.borrow().articles.iter().find(|a| a.id == id).cloned())
}

#[cfg(feature = "mock")]
pub fn mock_create_article(payload: &ArticlePayload) -> Article {
    MOCK_STORE.with(|store| store.borrow_mut().create(payload))
}

#[cfg(feature = "mock")]
pub fn mock_update_article(id: u64, patch: &ArticlePatch) -> Option<Article> {
    MOCK_STORE.with(|store| store.borrow_mut().update(id, patch))
}

#[cfg(feature = "mock")]
pub fn mock_delete_article(id: u64) -> bool {
    MOCK_STORE.with(|store| store.borrow_mut().delete(id))
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use article_admin_shared::QueryState;

    use super::*;

    #[test]
    fn seeded_store_spans_three_pages() {
        let store = MockStore::seeded();
        let page = store.list(&QueryState::default().fetch_params());
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.meta.total, 23);
        assert_eq!(page.meta.total_pages(), 3);
        assert!(page.meta.has_next);

        let last = store.list(&QueryState::initialize("page=3").fetch_params());
        assert_eq!(last.items.len(), 3);
        assert!(!last.meta.has_next);
    }

    #[test]
    fn filters_match_case_insensitively() {
        let store = MockStore::seeded();
        let page = store.list(&QueryState::initialize("category=finance&limit=50").fetch_params());
        assert!(!page.items.is_empty());
        assert!(page.items.iter().all(|a| a.category == "Finance"));

        let page = store.list(&QueryState::initialize("status=thrash&limit=50").fetch_params());
        assert!(page.items.iter().all(|a| a.status == ArticleStatus::Thrash));
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let mut store = MockStore::seeded();
        let params = QueryState::initialize("page=3").fetch_params();
        let ids: Vec<u64> = store.list(&params).items.iter().map(|a| a.id).collect();
        for id in ids {
            assert!(store.delete(id));
        }
        let page = store.list(&params);
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total, 20);
        assert_eq!(page.meta.page, 3);
    }
}
