//! Scenario state and request dispatch for the HTTP façade BDD tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use octofacade::{AppState, GatewayError, OctocrabGateway, PersonalAccessToken, router};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use tower::ServiceExt;
use wiremock::MockServer;

const TOKEN: &str = "valid-token";

/// Shared runtime wrapper that can be stored in rstest-bdd Slot.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub(crate) fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Status and body of a response returned by the router.
#[derive(Clone, Debug)]
pub(crate) struct CapturedResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

#[derive(ScenarioState, Default)]
pub(crate) struct FacadeState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) response: Slot<CapturedResponse>,
}

/// Ensures the runtime and server are initialised in `FacadeState`.
pub(crate) fn ensure_runtime_and_server(facade_state: &FacadeState) -> SharedRuntime {
    if facade_state.runtime.with_ref(|_| ()).is_none() {
        let runtime = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        facade_state.runtime.set(SharedRuntime::new(runtime));
    }

    let shared_runtime = facade_state
        .runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if facade_state.server.with_ref(|_| ()).is_none() {
        facade_state
            .server
            .set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Sends one request through a router backed by the real Octocrab gateway.
///
/// The gateway points at the mock server's `/api/v3` prefix, matching a
/// GitHub Enterprise style base URL.
pub(crate) fn send_request(
    facade_state: &FacadeState,
    method: Method,
    uri: &str,
) -> Result<CapturedResponse, GatewayError> {
    let server_url = facade_state
        .server
        .with_ref(MockServer::uri)
        .ok_or_else(|| GatewayError::Api {
            message: "mock server URL missing".to_owned(),
        })?;
    let runtime = facade_state.runtime.get().ok_or_else(|| GatewayError::Api {
        message: "runtime not initialised".to_owned(),
    })?;

    runtime.block_on(async {
        let token = PersonalAccessToken::new(TOKEN)?;
        let gateway = OctocrabGateway::for_token(&token, &format!("{server_url}/api/v3"))?;
        let app = router(AppState::new(Arc::new(gateway)));

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .map_err(|error| GatewayError::Api {
                message: format!("invalid request {uri}: {error}"),
            })?;
        let Ok(response) = app.oneshot(request).await;
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|error| GatewayError::Io {
                message: format!("failed to read response body: {error}"),
            })?;

        Ok(CapturedResponse {
            status,
            body: body.to_vec(),
        })
    })
}
