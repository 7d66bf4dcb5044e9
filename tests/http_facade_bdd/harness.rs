//! Mock GitHub endpoints for the HTTP façade BDD tests.

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PREFIX: &str = "/api/v3";

pub(crate) fn mount_repositories(owner: &str, count: u64) -> Mock {
    let repositories: Vec<_> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("repo-{id}"),
                "full_name": format!("{owner}/repo-{id}")
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/users/{owner}/repos")))
        .respond_with(ResponseTemplate::new(200).set_body_json(repositories))
}

pub(crate) fn mount_user(login: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/users/{login}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "login": login, "id": 583_231 })),
        )
}

pub(crate) fn mount_missing_user(login: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(format!("{API_PREFIX}/users/{login}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
}

pub(crate) fn mount_rejected_commit_comments(full_name: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path_regex(format!(
            r"^{API_PREFIX}/repos/{full_name}/commits/[^/]+/comments$"
        )))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "documentation_url": "https://docs.github.com/rest"
        })))
}

pub(crate) fn mount_review_comment_endpoint(full_name: &str, number: u64) -> Mock {
    Mock::given(method("POST"))
        .and(path(format!(
            "{API_PREFIX}/repos/{full_name}/pulls/{number}/comments"
        )))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "html_url": format!("https://github.com/{full_name}/pull/{number}#discussion_r1")
        })))
}

/// JSON bodies of every review comment submission the server received.
pub(crate) async fn received_review_comments(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| {
            request.method.as_str() == "POST" && request.url.path().contains("/pulls/")
        })
        .filter_map(|request| serde_json::from_slice(&request.body).ok())
        .collect()
}
