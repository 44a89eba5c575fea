#[cfg(not(feature = "mock"))]
use article_admin_shared::{ApiEnvelope, ErrorBody};
use article_admin_shared::{ApiError, Article, ArticlePage, ArticlePatch, ArticlePayload, FetchParams};
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};
#[cfg(not(feature = "mock"))]
use serde::de::DeserializeOwned;

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
#[cfg(feature = "mock")]
use crate::models;

/// 获取文章列表，按标题/分类/状态过滤并分页
pub async fn list_articles(params: &FetchParams) -> Result<ArticlePage, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_list_articles(params));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/articles?{}", API_BASE, params.to_query());
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        decode::<ArticlePage>(response).await?.into_data()
    }
}

/// 获取单篇文章（编辑页预填）
pub async fn get_article(id: u64) -> Result<Article, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_get_article(id).ok_or(ApiError::NotFound);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/articles/{}", API_BASE, id);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        decode::<Article>(response)
            .await
            .and_then(ApiEnvelope::into_data)
            .map_err(single_article_error)
    }
}

pub async fn create_article(payload: &ArticlePayload) -> Result<Article, ApiError> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_create_article(payload));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/articles", API_BASE);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        decode::<Article>(response).await?.into_data()
    }
}

pub async fn update_article(id: u64, patch: &ArticlePatch) -> Result<Article, ApiError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_update_article(id, patch).ok_or(ApiError::NotFound);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/articles/{}", API_BASE, id);
        let response = Request::put(&url)
            .header("Content-Type", "application/json")
            .json(patch)
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        decode::<Article>(response)
            .await
            .and_then(ApiEnvelope::into_data)
            .map_err(single_article_error)
    }
}

pub async fn delete_article(id: u64) -> Result<(), ApiError> {
    #[cfg(feature = "mock")]
    {
        return if models::mock_delete_article(id) { Ok(()) } else { Err(ApiError::NotFound) };
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/articles/{}", API_BASE, id);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        decode::<()>(response)
            .await
            .and_then(ApiEnvelope::into_unit)
            .map_err(single_article_error)
    }
}

/// Turn a response into an envelope, or into an error carrying the server's
/// `error`/`message` when the status is not 2xx.
#[cfg(not(feature = "mock"))]
async fn decode<T: DeserializeOwned>(response: Response) -> Result<ApiEnvelope<T>, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.json::<ErrorBody>().await.ok();
        return Err(ApiError::from_status(status, body));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    ApiEnvelope::from_json(&body)
}

#[cfg(not(feature = "mock"))]
fn single_article_error(err: ApiError) -> ApiError {
    if err.is_not_found() {
        ApiError::NotFound
    } else {
        err
    }
}
