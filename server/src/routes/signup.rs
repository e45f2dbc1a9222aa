use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Redirect,
};
use common::signup::NATIONALITIES;
use common::{FlowAction, FlowKind, Network, SignupFlow, Stage};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{ApiPath, JsonBody};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartSignup {
    pub kind: FlowKind,
    pub job_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub flow: SignupFlow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NetworkOption {
    pub id: Network,
    pub name: &'static str,
    pub configured: bool,
}

#[derive(Debug, Serialize)]
pub struct SignupOptions {
    pub nationalities: &'static [&'static str],
    pub networks: Vec<NetworkOption>,
}

/// GET /api/signup/options
pub async fn options_handler(State(state): State<AppState>) -> Json<SignupOptions> {
    let networks = Network::ALL
        .into_iter()
        .map(|network| NetworkOption {
            id: network,
            name: network.display_name(),
            configured: state.network_links.get(network).is_some(),
        })
        .collect();

    Json(SignupOptions {
        nationalities: NATIONALITIES,
        networks,
    })
}

/// POST /api/signup
/// Opens the first dialog of a new flow.
pub async fn start_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<StartSignup>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let mut flow = match (req.kind, req.job_id) {
        (FlowKind::JobSeeker, Some(job_id)) => {
            if state.catalog.listing(&job_id).is_none() {
                return Err(AppError::NotFound(format!("job '{job_id}'")));
            }
            SignupFlow::for_job(job_id)
        }
        (kind, None) => SignupFlow::new(kind),
        (FlowKind::Employer, Some(_)) => {
            return Err(AppError::Validation(
                "employer signups are not tied to a job".into(),
            ));
        }
    };
    flow.apply(FlowAction::Open, &state.network_links)?;

    let session_id = Uuid::new_v4();
    {
        let mut sessions = state.sessions.write().await;
        if sessions.len() >= state.max_sessions {
            return Err(AppError::SessionsExhausted);
        }
        sessions.insert(session_id, flow.clone());
    }
    info!("Opened {:?} signup session {}", flow.kind(), session_id);

    Ok((
        StatusCode::CREATED,
        Json(SessionSnapshot {
            session_id,
            flow,
            redirect: None,
        }),
    ))
}

/// GET /api/signup/{session}
pub async fn get_handler(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let sessions = state.sessions.read().await;
    let flow = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("signup session '{session_id}'")))?;

    Ok(Json(SessionSnapshot {
        session_id,
        flow: flow.clone(),
        redirect: None,
    }))
}

/// POST /api/signup/{session}/actions
/// A flow that ends up `Closed` is dropped; its final snapshot is still returned.
pub async fn action_handler(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<Uuid>,
    JsonBody(action): JsonBody<FlowAction>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let mut sessions = state.sessions.write().await;
    let flow = sessions
        .get_mut(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("signup session '{session_id}'")))?;

    let outcome = flow.apply(action, &state.network_links)?;
    let snapshot = flow.clone();

    if snapshot.stage() == Stage::Closed {
        sessions.remove(&session_id);
        info!("Closed signup session {}", session_id);
    }

    Ok(Json(SessionSnapshot {
        session_id,
        flow: snapshot,
        redirect: outcome.redirect,
    }))
}

/// DELETE /api/signup/{session}
pub async fn delete_handler(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .write()
        .await
        .remove(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("signup session '{session_id}'")))?;

    info!("Discarded signup session {}", session_id);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /go/{network}
/// Sends the visitor to the network's verification link.
pub async fn redirect_handler(
    State(state): State<AppState>,
    ApiPath(network): ApiPath<String>,
) -> Result<Redirect, AppError> {
    let network: Network = network
        .parse()
        .map_err(|e: common::signup::ParseNetworkError| AppError::Validation(e.to_string()))?;

    let url = state
        .network_links
        .get(network)
        .ok_or_else(|| AppError::NotFound(format!("no link configured for {network}")))?;

    Ok(Redirect::temporary(url))
}
