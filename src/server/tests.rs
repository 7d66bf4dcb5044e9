//! Router tests driving the handlers against a mocked gateway.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use mockall::predicate::always;
use rstest::rstest;
use tower::ServiceExt;

use super::handlers::{COMMIT_COMMENT_BODY, COMMIT_COMMENT_POSITION, PULL_REQUEST_COMMENT_BODY};
use super::{AppState, JSON_CONTENT_TYPE, router};
use crate::github::{
    CreatedComment, GatewayError, GitHubUser, MockSourceControlGateway, RepositorySummary,
};

fn octocat() -> GitHubUser {
    GitHubUser {
        login: "octocat".to_owned(),
        id: 583_231,
    }
}

fn repositories(count: u64) -> Vec<RepositorySummary> {
    (1..=count)
        .map(|id| RepositorySummary {
            id,
            name: format!("repo-{id}"),
            full_name: None,
        })
        .collect()
}

fn not_found() -> GatewayError {
    GatewayError::Api {
        message: "not found".to_owned(),
    }
}

async fn send(gateway: MockSourceControlGateway, method: Method, uri: &str) -> Response {
    let app = router(AppState::new(Arc::new(gateway)));
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("router is infallible")
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable")
        .to_vec()
}

async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body should be JSON")
}

#[tokio::test]
async fn count_returns_first_page_length() {
    let mut gateway = MockSourceControlGateway::new();
    gateway
        .expect_list_repositories()
        .withf(|owner| owner.as_str() == "octocat")
        .times(1)
        .returning(|_| Ok(repositories(8)));

    let response = send(gateway, Method::GET, "/octocat/repos/count").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some(JSON_CONTENT_TYPE)
    );
    assert_eq!(body_bytes(response).await, b"8");
}

#[tokio::test]
async fn count_reports_listing_failure() {
    let mut gateway = MockSourceControlGateway::new();
    gateway
        .expect_list_repositories()
        .with(always())
        .times(1)
        .returning(|_| {
            Err(GatewayError::Network {
                message: "connection reset".to_owned(),
            })
        });

    let response = send(gateway, Method::GET, "/octocat/repos/count").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(
        body.get("error").and_then(serde_json::Value::as_str).is_some(),
        "expected error key, got {body}"
    );
}

#[tokio::test]
async fn commit_comment_stops_when_user_lookup_fails() {
    let mut gateway = MockSourceControlGateway::new();
    gateway
        .expect_user()
        .withf(|login| login.as_str() == "octocat")
        .times(1)
        .returning(|_| Err(not_found()));
    gateway.expect_create_commit_comment().never();

    let response = send(gateway, Method::POST, "/octocat/repos/myrepo/abc123/comment").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_bytes(response).await, br#"{"error":"not found"}"#);
}

#[rstest]
#[case::created(true)]
#[case::rejected(false)]
#[tokio::test]
async fn commit_comment_returns_empty_ok_after_user_lookup(#[case] created: bool) {
    let mut gateway = MockSourceControlGateway::new();
    gateway
        .expect_user()
        .times(1)
        .returning(|_| Ok(octocat()));
    gateway
        .expect_create_commit_comment()
        .withf(|locator, comment| {
            locator.owner().as_str() == "octocat"
                && locator.repository().as_str() == "myrepo"
                && comment.commit.as_str() == "abc123"
                && comment.author == octocat()
                && comment.body == COMMIT_COMMENT_BODY
                && comment.position == COMMIT_COMMENT_POSITION
        })
        .times(1)
        .returning(move |_, _| {
            if created {
                Ok(CreatedComment {
                    id: 1,
                    html_url: None,
                })
            } else {
                Err(GatewayError::Authentication {
                    message: "Resource not accessible".to_owned(),
                })
            }
        });

    let response = send(gateway, Method::POST, "/octocat/repos/myrepo/abc123/comment").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty(), "body should be empty");
}

#[rstest]
#[case::created(true)]
#[case::rejected(false)]
#[tokio::test]
async fn pull_comment_submits_parsed_path(#[case] created: bool) {
    let mut gateway = MockSourceControlGateway::new();
    gateway
        .expect_user()
        .withf(|login| login.as_str() == "octocat")
        .times(1)
        .returning(|_| Ok(octocat()));
    gateway
        .expect_create_pull_request_comment()
        .withf(|comment| {
            comment.owner.as_str() == "octocat"
                && comment.repository.is_none()
                && comment.number.get() == 42
                && comment.commit.as_str() == "abc123"
                && comment.path == "src/main.go"
                && comment.position == 5
                && comment.body == PULL_REQUEST_COMMENT_BODY
                && comment.author == octocat()
        })
        .times(1)
        .returning(move |_| {
            if created {
                Ok(CreatedComment {
                    id: 7,
                    html_url: Some("https://github.com/octocat/pull/42#r7".to_owned()),
                })
            } else {
                Err(GatewayError::MissingRepository)
            }
        });

    let response = send(
        gateway,
        Method::POST,
        "/octocat/pulls/42/abc123/src/main.go/5/comment",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty(), "body should be empty");
}

#[tokio::test]
async fn pull_comment_takes_repository_from_query() {
    let mut gateway = MockSourceControlGateway::new();
    gateway.expect_user().returning(|_| Ok(octocat()));
    gateway
        .expect_create_pull_request_comment()
        .withf(|comment| {
            comment
                .repository
                .as_ref()
                .is_some_and(|repository| repository.as_str() == "myrepo")
        })
        .times(1)
        .returning(|_| {
            Ok(CreatedComment {
                id: 8,
                html_url: None,
            })
        });

    let response = send(
        gateway,
        Method::POST,
        "/octocat/pulls/42/abc123/README.md/3/comment?repo=myrepo",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn pull_comment_stops_when_user_lookup_fails() {
    let mut gateway = MockSourceControlGateway::new();
    gateway
        .expect_user()
        .times(1)
        .returning(|_| Err(not_found()));
    gateway.expect_create_pull_request_comment().never();

    let response = send(
        gateway,
        Method::POST,
        "/octocat/pulls/42/abc123/main.go/5/comment",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "error": "not found" })
    );
}

#[rstest]
#[case::non_numeric_number("/octocat/pulls/abc/abc123/main.go/5/comment")]
#[case::non_numeric_position("/octocat/pulls/42/abc123/main.go/five/comment")]
#[case::missing_comment_suffix("/octocat/pulls/42/abc123/main.go/5")]
#[case::unknown_route("/octocat/issues/42")]
#[tokio::test]
async fn unroutable_paths_are_not_found(#[case] uri: &str) {
    let gateway = MockSourceControlGateway::new();

    let response = send(gateway, Method::POST, uri).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case::number_overflow("/octocat/pulls/99999999999999999999/abc123/main.go/5/comment", "number")]
#[case::zero_number("/octocat/pulls/0/abc123/main.go/5/comment", "number")]
#[case::position_overflow(
    "/octocat/pulls/42/abc123/main.go/99999999999999999999/comment",
    "position"
)]
#[tokio::test]
async fn unusable_numbers_are_bad_requests(#[case] uri: &str, #[case] parameter: &str) {
    let gateway = MockSourceControlGateway::new();

    let response = send(gateway, Method::POST, uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    assert!(
        message.starts_with(&format!("invalid {parameter}")),
        "unexpected message: {message}"
    );
}

#[tokio::test]
async fn count_rejects_wrong_method() {
    let gateway = MockSourceControlGateway::new();

    let response = send(gateway, Method::POST, "/octocat/repos/count").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[rstest]
#[case::non_numeric_number("/octocat/pulls/abc/x/f/5/comment", StatusCode::NOT_FOUND)]
#[case::missing_comment_suffix("/octocat/pulls/42/abc123/main.go/5", StatusCode::NOT_FOUND)]
#[case::well_formed("/octocat/pulls/42/abc123/src/main.go/5/comment", StatusCode::METHOD_NOT_ALLOWED)]
#[tokio::test]
async fn pull_comment_wrong_method_depends_on_path_shape(
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let gateway = MockSourceControlGateway::new();

    let response = send(gateway, Method::GET, uri).await;

    assert_eq!(response.status(), expected);
}
