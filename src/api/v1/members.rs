//! Member search endpoint handlers

use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, MemberDto, MemberTeamDto, PageResponse, Query, SearchMembersParams,
};
use crate::domain::member::MemberId;

/// GET /v1/members
///
/// Paginated member/team search. Every present filter narrows the result;
/// a request without filters pages over all members.
pub async fn search_members(
    State(state): State<AppState>,
    Query(params): Query<SearchMembersParams>,
) -> Result<Json<PageResponse<MemberTeamDto>>, ApiError> {
    let condition = params.condition();
    let page_request = params.page_request()?;

    debug!(
        ?condition,
        page = page_request.page(),
        size = page_request.size(),
        "Searching members"
    );

    let page = state
        .member_repository
        .search_page(&condition, &page_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(PageResponse::from_page(page, MemberTeamDto::from)))
}

/// GET /v1/members/{member_id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<MemberDto>, ApiError> {
    debug!(member_id, "Getting member");

    let member = state
        .member_repository
        .find_by_id(MemberId::new(member_id))
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Member '{}' not found", member_id)))?;

    Ok(Json(MemberDto::from(member)))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::api::router::create_router;
    use crate::{create_in_memory_state, seed_demo_data};

    async fn demo_app() -> axum::Router {
        let state = create_in_memory_state();
        seed_demo_data(&state).await.unwrap();
        create_router(state)
    }

    async fn get_json(
        app: axum::Router,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap();

        (status, json)
    }

    #[tokio::test]
    async fn test_search_without_filters_pages_all_members() {
        let (status, json) = get_json(demo_app().await, "/v1/members").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalElements"], 4);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["number"], 0);
        assert_eq!(json["content"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_search_with_age_and_team_filters() {
        let (status, json) =
            get_json(demo_app().await, "/v1/members?age_goe=20&team_name=teamB").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalElements"], 2);

        let content = json["content"].as_array().unwrap();
        assert_eq!(content[0]["username"], "member3");
        assert_eq!(content[0]["age"], 30);
        assert_eq!(content[0]["teamName"], "teamB");
        assert_eq!(content[1]["username"], "member4");
    }

    #[tokio::test]
    async fn test_second_page_sorted_by_username_descending() {
        let (status, json) = get_json(
            demo_app().await,
            "/v1/members?size=2&page=1&sort_by=username&sort_dir=desc",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalElements"], 4);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["number"], 1);
        assert_eq!(json["size"], 2);

        let content = json["content"].as_array().unwrap();
        assert_eq!(content[0]["username"], "member2");
        assert_eq!(content[1]["username"], "member1");
    }

    #[tokio::test]
    async fn test_blank_filters_match_everything() {
        let (status, json) =
            get_json(demo_app().await, "/v1/members?username=&team_name=%20%20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalElements"], 4);
    }

    #[tokio::test]
    async fn test_no_matches_returns_empty_page() {
        let (status, json) = get_json(demo_app().await, "/v1/members?username=nobody").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalElements"], 0);
        assert_eq!(json["content"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_unknown_sort_field_is_a_json_400() {
        let (status, json) = get_json(demo_app().await, "/v1/members?sort_by=height").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["param"], "sort_by");
    }

    #[tokio::test]
    async fn test_malformed_age_is_a_json_400() {
        let (status, json) = get_json(demo_app().await, "/v1/members?age_goe=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "query_parse_error");
    }

    #[tokio::test]
    async fn test_get_member_by_id() {
        let (status, json) = get_json(demo_app().await, "/v1/members/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "member1");
        assert_eq!(json["age"], 10);
    }

    #[tokio::test]
    async fn test_get_missing_member_is_a_json_404() {
        let (status, json) = get_json(demo_app().await, "/v1/members/999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["type"], "not_found_error");
    }
}
