//! Content handlers - thin adapters over the content repository.

use actix_web::{HttpResponse, web};

use folio_core::domain::{PageKind, PostFilters, SortOrder};
use folio_shared::ApiResponse;
use folio_shared::dto::{PostsQuery, RecentQuery};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/author
pub async fn author(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let author = state.content.get_author().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(author)))
}

/// GET /api/posts?search=&year=&month=&sort=&page=&perPage=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostsQuery>,
) -> AppResult<HttpResponse> {
    let filters = to_filters(query.into_inner())?;
    let posts = state.content.get_posts(&filters).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/recent?limit=
pub async fn recent_posts(
    state: web::Data<AppState>,
    query: web::Query<RecentQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.content.get_recent_posts(query.limit()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/dates
pub async fn available_dates(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let dates = state.content.get_available_dates().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(dates)))
}

/// GET /api/posts/{slug}
pub async fn post_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .content
        .get_post_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post '{}' not found", slug)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// GET /api/pages/{page}/{locale}
pub async fn page_content(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (page, locale) = path.into_inner();
    let page: PageKind = page.parse()?;
    let content = state.content.get_page_content(page, &locale).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(content)))
}

fn to_filters(query: PostsQuery) -> AppResult<PostFilters> {
    let sort_order = match query.sort.as_deref() {
        Some(sort) => sort.parse()?,
        None => SortOrder::default(),
    };

    Ok(PostFilters {
        search: query.search,
        year: query.year,
        month: query.month,
        sort_order,
        page: query.page,
        per_page: query.per_page,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use folio_infra::mock::MockContentRepository;
    use serde_json::Value;

    use super::*;
    use crate::handlers::configure_routes;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Arc::new(MockContentRepository::default())))
    }

    #[actix_web::test]
    async fn test_list_posts_returns_envelope() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/posts?page=3&sort=desc")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["total"], 25);
        assert_eq!(body["data"]["totalPages"], 3);
        assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn test_month_without_year_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/posts?month=2").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_sort_is_bad_request() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/posts?sort=sideways")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_slug_round_trip_and_missing_slug() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/posts/recent?limit=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let slug = body["data"][0]["slug"].as_str().unwrap().to_string();
        let id = body["data"][0]["id"].clone();

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{slug}"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["id"], id);

        let req = test::TestRequest::get()
            .uri("/api/posts/definitely-missing")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_negative_limit_yields_empty_list() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/posts/recent?limit=-2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_page_content_routes() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/pages/home/fr").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["title"], "Bienvenue");

        for uri in ["/api/pages/blog/en", "/api/pages/home/de"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_dates_and_author() {
        let app =
            test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/posts/dates").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(!body["data"].as_array().unwrap().is_empty());

        let req = test::TestRequest::get().uri("/api/author").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
