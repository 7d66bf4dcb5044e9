//! Support modules for the HTTP façade BDD tests.

pub(crate) mod harness;
pub(crate) mod state;

pub(crate) use harness::{
    mount_missing_user, mount_rejected_commit_comments, mount_repositories,
    mount_review_comment_endpoint, mount_user, received_review_comments,
};
pub(crate) use state::{FacadeState, ensure_runtime_and_server, send_request};
