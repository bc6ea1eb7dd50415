// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod live;

use axum::{
    Json, Router,
    extract::{FromRef, Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use serde::{Deserialize, Serialize};
use shift_relief_api::{
    ApiError, CreateLeaveRequest, EligibilityOverviewRequest, EligibilityOverviewResponse,
    OpportunityPlan, PeriodRequest, RestOverviewResponse, ShiftLookupResponse,
    eligibility_overview, parse_leave_event, plan_cancellation, plan_opportunity, rest_overview,
    shift_lookup, translate_domain_error,
};
use shift_relief_domain::{
    Candidate, CandidateSource, CancellationSelection, LeaveEvent as DomainLeaveEvent, Member,
    MemberRole, Roster, RosterSnapshot, ShiftCalendar, Team, parse_iso_date,
};
use shift_relief_notify::{
    DispatchSummary, HttpPushTransport, Recipient, cancellation_text, dispatch, opportunity_text,
};
use shift_relief_store::{Binding, BindingStore, LeaveRecord, LeaveStore, ProvisionalStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use time::Date;
use time::macros::date;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Shift Relief Server - HTTP server for shift-leave management and
/// overtime-opportunity notification
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Path to a roster JSON file (an array of dated snapshots). If not
    /// provided, uses the built-in default roster.
    #[arg(short, long)]
    roster: Option<String>,

    /// Chat push endpoint URL
    #[arg(long, default_value = "https://push.example.com/v1/messages")]
    push_endpoint: String,

    /// Bearer token for the chat push endpoint
    #[arg(long, default_value = "")]
    push_token: String,

    /// Base URL embedded in notification deep links
    #[arg(long, default_value = "http://localhost:3000")]
    link_base: String,
}

/// Application state shared across handlers.
///
/// Mutable stores are wrapped in a Mutex to allow safe concurrent access;
/// the roster and calendar are immutable after startup.
#[derive(Clone)]
struct AppState {
    /// Leave records.
    leaves: Arc<Mutex<LeaveStore>>,
    /// Chat-identity bindings.
    bindings: Arc<Mutex<BindingStore>>,
    /// Provisional selections per event date.
    provisional: Arc<Mutex<ProvisionalStore>>,
    /// The versioned roster.
    roster: Arc<Roster>,
    /// The shift calendar.
    calendar: Arc<ShiftCalendar>,
    /// The chat push transport.
    transport: Arc<HttpPushTransport>,
    /// Broadcaster for the live event feed.
    broadcaster: Arc<LiveEventBroadcaster>,
    /// Base URL for notification deep links.
    link_base: Arc<String>,
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(state: &AppState) -> Self {
        state.broadcaster.clone()
    }
}

/// The leave period as supplied on the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum PeriodApiRequest {
    /// The leave covers the whole day.
    FullDay,
    /// The leave covers a window within the day.
    Partial {
        /// Window start, ISO 8601 time (e.g., "09:00:00").
        start: String,
        /// Window end, ISO 8601 time.
        end: String,
    },
}

/// API request for creating a leave.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateLeaveApiRequest {
    /// The leave date (ISO 8601).
    date: String,
    /// The requester's roster name.
    requester_name: String,
    /// The requester's team letter.
    requester_team: String,
    /// The leave period.
    period: PeriodApiRequest,
    /// The team suggested to cover the opportunity, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    suggested_team: Option<String>,
}

/// API response for creating a leave.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateLeaveApiResponse {
    /// The store-assigned leave identifier.
    leave_id: i64,
    /// Whether the opportunity broadcast was suppressed.
    suppressed: bool,
    /// Aggregate dispatch outcome.
    summary: DispatchSummary,
}

/// API request for cancelling a leave.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelLeaveApiRequest {
    /// Roster names excluded from the cancellation notice.
    exclude_names: Vec<String>,
}

/// API response for cancelling a leave.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CancelLeaveApiResponse {
    /// The store-assigned leave identifier.
    leave_id: i64,
    /// Aggregate dispatch outcome of the cancellation notice.
    summary: DispatchSummary,
}

/// Query parameters for listing leaves.
#[derive(Debug, Deserialize)]
struct ListLeavesQuery {
    /// The leave date (ISO 8601).
    date: String,
}

/// One leave record in a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LeaveRecordApiResponse {
    /// The store-assigned leave identifier.
    leave_id: i64,
    /// The leave date (ISO 8601).
    date: String,
    /// The requester's roster name.
    requester_name: String,
    /// The requester's team letter.
    requester_team: String,
    /// The record status ("active" or "cancelled").
    status: String,
}

/// Query parameters for a single shift lookup.
#[derive(Debug, Deserialize)]
struct ShiftQuery {
    /// The query date (ISO 8601).
    date: String,
    /// The team letter.
    team: String,
}

/// API response for a single shift lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShiftApiResponse {
    /// The query date (ISO 8601).
    date: String,
    /// The team letter.
    team: String,
    /// The team's shift state on the date.
    shift: String,
    /// Whether the state is a rest day.
    is_rest: bool,
}

/// Query parameters for the rest overview.
#[derive(Debug, Deserialize)]
struct RestQuery {
    /// The query date (ISO 8601).
    date: String,
}

/// One member in a rest overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RestMemberApiResponse {
    /// The member's team letter.
    team: String,
    /// The member's roster name.
    name: String,
    /// The member's role.
    role: String,
}

/// API response for the rest overview of a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RestApiResponse {
    /// The query date (ISO 8601).
    date: String,
    /// The rest team for the date, if any.
    rest_team: Option<String>,
    /// The rest team's shift state, if any.
    rest_shift: Option<String>,
    /// All members whose team is on big-rest on the date.
    big_rest_members: Vec<RestMemberApiResponse>,
}

/// Query parameters for the eligibility dry run.
#[derive(Debug, Deserialize)]
struct EligibilityQuery {
    /// The leave date (ISO 8601).
    date: String,
    /// The requester's roster name.
    requester: String,
    /// The requester's team letter.
    team: String,
}

/// One eligible member in an eligibility dry run.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EligibleMemberApiResponse {
    /// The member's roster name.
    name: String,
    /// The member's team letter.
    team: String,
    /// The member's role.
    role: String,
    /// Why the member is eligible.
    reason: String,
}

/// API response for the eligibility dry run.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EligibilityApiResponse {
    /// The leave date (ISO 8601).
    date: String,
    /// The requester's team letter.
    requester_team: String,
    /// Eligible members in stable roster order.
    members: Vec<EligibleMemberApiResponse>,
}

/// API request for upserting a chat-identity binding.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BindingApiRequest {
    /// The roster member name.
    member_name: String,
    /// The chat identity notifications are delivered to.
    channel_identity: String,
    /// Whether notifications are enabled (defaults to true).
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_enabled: Option<bool>,
}

/// API response for a binding lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BindingApiResponse {
    /// The roster member name.
    member_name: String,
    /// The chat identity notifications are delivered to.
    channel_identity: String,
    /// Whether notifications are enabled.
    notification_enabled: bool,
}

/// API request for recording a provisional selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ClaimApiRequest {
    /// The event date (ISO 8601).
    date: String,
    /// The member's roster name.
    member_name: String,
    /// The chat identity recorded with the selection.
    channel_identity: String,
}

/// API response for write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Success indicator.
    success: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Resolves a member-name list into dispatch recipients.
///
/// A member with an enabled binding becomes deliverable; a member without
/// any binding is unreachable; a member whose binding has notifications
/// disabled is excluded from dispatch entirely.
fn resolve_recipients(bindings: &BindingStore, names: &[String]) -> (Vec<Recipient>, usize) {
    let mut recipients: Vec<Recipient> = Vec::with_capacity(names.len());
    let mut excluded: usize = 0;
    for name in names {
        match bindings.find(name) {
            Some(binding) if binding.notification_enabled => {
                recipients.push(Recipient::new(
                    name.clone(),
                    binding.channel_identity.clone(),
                ));
            }
            Some(_) => excluded += 1,
            None => recipients.push(Recipient::unreachable(name.clone())),
        }
    }
    (recipients, excluded)
}

/// Handler for POST `/leaves` endpoint.
///
/// Creates a leave record, plans the opportunity broadcast, resolves chat
/// bindings, and dispatches the opportunity notice.
async fn handle_create_leave(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<CreateLeaveApiRequest>,
) -> Result<Json<CreateLeaveApiResponse>, HttpError> {
    info!(
        date = %req.date,
        requester = %req.requester_name,
        team = %req.requester_team,
        "Handling create_leave request"
    );

    let period: PeriodRequest = match req.period {
        PeriodApiRequest::FullDay => PeriodRequest::FullDay,
        PeriodApiRequest::Partial { start, end } => PeriodRequest::Partial { start, end },
    };
    let request: CreateLeaveRequest = CreateLeaveRequest {
        date: req.date,
        requester_name: req.requester_name,
        requester_team: req.requester_team,
        period,
        suggested_team: req.suggested_team,
    };

    let event: DomainLeaveEvent = parse_leave_event(&request)?;
    let plan: OpportunityPlan = plan_opportunity(&event, &state.roster, &state.calendar)?;

    let mut leaves = state.leaves.lock().await;
    let record: LeaveRecord = leaves.insert(event);
    drop(leaves);

    state.broadcaster.broadcast(&LiveEvent::LeaveCreated {
        leave_id: record.leave_id,
        date: plan.date.to_string(),
        requester_name: plan.requester_name.clone(),
    });

    let summary: DispatchSummary = if plan.suppressed {
        DispatchSummary::suppressed()
    } else if let Some(broadcast) = &plan.broadcast {
        let bindings = state.bindings.lock().await;
        let (recipients, excluded) = resolve_recipients(&bindings, &broadcast.member_names);
        drop(bindings);

        let text: String = opportunity_text(
            plan.date,
            &plan.requester_name,
            plan.requester_team,
            broadcast.team,
            broadcast.team_shift,
            &state.link_base,
        );
        let summary: DispatchSummary = dispatch(state.transport.as_ref(), &recipients, &text)
            .await
            .with_excluded(excluded);

        state
            .broadcaster
            .broadcast(&LiveEvent::OpportunityDispatched {
                date: plan.date.to_string(),
                team: broadcast.team.to_string(),
                notified: summary.notified,
            });
        summary
    } else {
        DispatchSummary::default()
    };

    info!(
        leave_id = record.leave_id,
        suppressed = plan.suppressed,
        notified = summary.notified,
        "Successfully created leave"
    );

    Ok(Json(CreateLeaveApiResponse {
        leave_id: record.leave_id,
        suppressed: plan.suppressed,
        summary,
    }))
}

/// Handler for POST `/leaves/{leave_id}/cancel` endpoint.
///
/// Cancels a leave record and dispatches cancellation notices to the
/// remaining candidate pool, minus the supplied exclusion set.
async fn handle_cancel_leave(
    AxumState(state): AxumState<AppState>,
    Path(leave_id): Path<i64>,
    Json(req): Json<CancelLeaveApiRequest>,
) -> Result<Json<CancelLeaveApiResponse>, HttpError> {
    info!(
        leave_id = leave_id,
        excluded = req.exclude_names.len(),
        "Handling cancel_leave request"
    );

    let mut leaves = state.leaves.lock().await;
    let record: LeaveRecord = leaves.cancel(leave_id).map_err(ApiError::from)?;
    drop(leaves);

    state
        .broadcaster
        .broadcast(&LiveEvent::LeaveCancelled { leave_id });

    // Rebuild the broadcast target to source the profile half of the pool
    let plan: OpportunityPlan = plan_opportunity(&record.event, &state.roster, &state.calendar)?;

    let profile: Vec<Candidate> = if let Some(broadcast) = &plan.broadcast {
        let bindings = state.bindings.lock().await;
        let profile = bindings
            .find_enabled(&broadcast.member_names)
            .into_iter()
            .map(|b| {
                Candidate::new(
                    b.member_name.clone(),
                    b.channel_identity.clone(),
                    CandidateSource::Profile,
                )
            })
            .collect();
        drop(bindings);
        profile
    } else {
        Vec::new()
    };

    let mut provisional_store = state.provisional.lock().await;
    let provisional: Vec<Candidate> = provisional_store
        .list_for(record.event.date)
        .into_iter()
        .map(|p| {
            Candidate::new(
                p.member_name.clone(),
                p.channel_identity.clone(),
                CandidateSource::Provisional,
            )
        })
        .collect();
    provisional_store.clear_for(record.event.date);
    drop(provisional_store);

    let selection: CancellationSelection =
        plan_cancellation(profile, provisional, &req.exclude_names);

    let recipients: Vec<Recipient> = selection
        .recipients
        .iter()
        .map(|c| Recipient::new(c.member_name.clone(), c.channel_identity.clone()))
        .collect();
    let text: String = cancellation_text(
        record.event.date,
        &record.event.requester_name,
        record.event.requester_team,
    );
    let summary: DispatchSummary = dispatch(state.transport.as_ref(), &recipients, &text)
        .await
        .with_excluded(selection.excluded_count);

    state
        .broadcaster
        .broadcast(&LiveEvent::CancellationDispatched {
            leave_id,
            notified: summary.notified,
        });

    info!(
        leave_id = leave_id,
        notified = summary.notified,
        excluded = summary.excluded,
        "Successfully cancelled leave"
    );

    Ok(Json(CancelLeaveApiResponse { leave_id, summary }))
}

/// Handler for GET `/leaves` endpoint.
///
/// Lists leave records for a date.
async fn handle_list_leaves(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ListLeavesQuery>,
) -> Result<Json<Vec<LeaveRecordApiResponse>>, HttpError> {
    info!(date = %query.date, "Handling list_leaves request");

    let date: Date = parse_iso_date(&query.date)
        .map_err(translate_domain_error)
        .map_err(HttpError::from)?;

    let leaves = state.leaves.lock().await;
    let records: Vec<LeaveRecordApiResponse> = leaves
        .find_by_date(date)
        .into_iter()
        .map(|r| LeaveRecordApiResponse {
            leave_id: r.leave_id,
            date: r.event.date.to_string(),
            requester_name: r.event.requester_name.clone(),
            requester_team: r.event.requester_team.to_string(),
            status: match r.status {
                shift_relief_store::LeaveStatus::Active => String::from("active"),
                shift_relief_store::LeaveStatus::Cancelled => String::from("cancelled"),
            },
        })
        .collect();
    drop(leaves);

    Ok(Json(records))
}

/// Handler for GET `/shifts` endpoint.
///
/// Looks up one team's shift state on a date.
async fn handle_get_shift(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ShiftQuery>,
) -> Result<Json<ShiftApiResponse>, HttpError> {
    info!(date = %query.date, team = %query.team, "Handling get_shift request");

    let response: ShiftLookupResponse = shift_lookup(&query.date, &query.team, &state.calendar)?;

    Ok(Json(ShiftApiResponse {
        date: response.date.to_string(),
        team: response.team.to_string(),
        shift: response.shift.to_string(),
        is_rest: response.is_rest,
    }))
}

/// Handler for GET `/shifts/rest` endpoint.
///
/// Returns the rest team and all big-rest members for a date.
async fn handle_get_rest_overview(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<RestQuery>,
) -> Result<Json<RestApiResponse>, HttpError> {
    info!(date = %query.date, "Handling get_rest_overview request");

    let response: RestOverviewResponse =
        rest_overview(&query.date, &state.roster, &state.calendar)?;

    Ok(Json(RestApiResponse {
        date: response.date.to_string(),
        rest_team: response.rest_team.map(|(team, _)| team.to_string()),
        rest_shift: response.rest_team.map(|(_, shift)| shift.to_string()),
        big_rest_members: response
            .big_rest_members
            .into_iter()
            .map(|m| RestMemberApiResponse {
                team: m.team.to_string(),
                name: m.name,
                role: m.role.to_string(),
            })
            .collect(),
    }))
}

/// Handler for GET `/eligibility` endpoint.
///
/// Runs the eligibility engine for a hypothetical leave and returns every
/// eligible member with its reason.
async fn handle_get_eligibility(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<EligibilityQuery>,
) -> Result<Json<EligibilityApiResponse>, HttpError> {
    info!(
        date = %query.date,
        requester = %query.requester,
        team = %query.team,
        "Handling get_eligibility request"
    );

    let request: EligibilityOverviewRequest = EligibilityOverviewRequest {
        date: query.date,
        requester_name: query.requester,
        requester_team: query.team,
    };
    let overview: EligibilityOverviewResponse =
        eligibility_overview(&request, &state.roster, &state.calendar)?;

    Ok(Json(EligibilityApiResponse {
        date: overview.date.to_string(),
        requester_team: overview.requester_team.to_string(),
        members: overview
            .members
            .into_iter()
            .map(|m| EligibleMemberApiResponse {
                name: m.name,
                team: m.team.to_string(),
                role: m.role.to_string(),
                reason: m.reason.to_string(),
            })
            .collect(),
    }))
}

/// Handler for POST `/bindings` endpoint.
///
/// Creates or replaces a chat-identity binding for a member.
async fn handle_upsert_binding(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<BindingApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(member = %req.member_name, "Handling upsert_binding request");

    let binding: Binding = Binding {
        member_name: req.member_name.clone(),
        channel_identity: req.channel_identity,
        notification_enabled: req.notification_enabled.unwrap_or(true),
    };

    let mut bindings = state.bindings.lock().await;
    bindings.upsert(binding);
    drop(bindings);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(format!("Bound member '{}'", req.member_name)),
    }))
}

/// Handler for GET `/bindings/{member_name}` endpoint.
///
/// Looks up a member's chat-identity binding.
async fn handle_get_binding(
    AxumState(state): AxumState<AppState>,
    Path(member_name): Path<String>,
) -> Result<Json<BindingApiResponse>, HttpError> {
    info!(member = %member_name, "Handling get_binding request");

    let bindings = state.bindings.lock().await;
    let binding: Binding = bindings
        .find(&member_name)
        .cloned()
        .ok_or_else(|| HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("No binding exists for member '{member_name}'"),
        })?;
    drop(bindings);

    Ok(Json(BindingApiResponse {
        member_name: binding.member_name,
        channel_identity: binding.channel_identity,
        notification_enabled: binding.notification_enabled,
    }))
}

/// Handler for POST `/claims` endpoint.
///
/// Records a provisional selection against an event date.
async fn handle_create_claim(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<ClaimApiRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(
        date = %req.date,
        member = %req.member_name,
        "Handling create_claim request"
    );

    let date: Date = parse_iso_date(&req.date)
        .map_err(translate_domain_error)
        .map_err(HttpError::from)?;

    let mut provisional = state.provisional.lock().await;
    provisional.record(date, req.member_name.clone(), req.channel_identity);
    drop(provisional);

    Ok(Json(WriteResponse {
        success: true,
        message: Some(format!(
            "Recorded provisional selection for '{}'",
            req.member_name
        )),
    }))
}

/// The built-in roster used when no roster file is supplied.
fn default_roster() -> Result<Roster, shift_relief_domain::DomainError> {
    let mut teams: BTreeMap<Team, Vec<Member>> = BTreeMap::new();
    teams.insert(
        Team::A,
        vec![
            Member::new(String::from("張一"), MemberRole::Lead),
            Member::new(String::from("李二"), MemberRole::Regular),
        ],
    );
    teams.insert(
        Team::B,
        vec![
            Member::new(String::from("瑋"), MemberRole::Regular),
            Member::new(String::from("王五"), MemberRole::Regular),
        ],
    );
    teams.insert(
        Team::C,
        vec![
            Member::new(String::from("陳六"), MemberRole::Lead),
            Member::new(String::from("趙七"), MemberRole::Regular),
        ],
    );
    teams.insert(
        Team::D,
        vec![Member::new(String::from("錢八"), MemberRole::Regular)],
    );

    let snapshot: RosterSnapshot = RosterSnapshot::new(date!(2025 - 01 - 01), teams);
    Roster::new(vec![snapshot])
}

/// Loads the roster from a JSON file holding an array of dated snapshots.
fn load_roster(path: &str) -> Result<Roster, Box<dyn std::error::Error>> {
    let contents: String = std::fs::read_to_string(path)?;
    let snapshots: Vec<RosterSnapshot> = serde_json::from_str(&contents)?;
    Ok(Roster::new(snapshots)?)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/leaves", post(handle_create_leave))
        .route("/leaves", get(handle_list_leaves))
        .route("/leaves/{leave_id}/cancel", post(handle_cancel_leave))
        .route("/shifts", get(handle_get_shift))
        .route("/shifts/rest", get(handle_get_rest_overview))
        .route("/eligibility", get(handle_get_eligibility))
        .route("/bindings", post(handle_upsert_binding))
        .route("/bindings/{member_name}", get(handle_get_binding))
        .route("/claims", post(handle_create_claim))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shift Relief Server");

    // Load the roster (file-based or built-in based on CLI argument)
    let roster: Roster = if let Some(path) = &args.roster {
        info!("Loading roster from: {}", path);
        load_roster(path)?
    } else {
        info!("Using built-in default roster");
        default_roster()?
    };

    let app_state: AppState = AppState {
        leaves: Arc::new(Mutex::new(LeaveStore::new())),
        bindings: Arc::new(Mutex::new(BindingStore::new())),
        provisional: Arc::new(Mutex::new(ProvisionalStore::new())),
        roster: Arc::new(roster),
        calendar: Arc::new(ShiftCalendar::default()),
        transport: Arc::new(HttpPushTransport::new(args.push_endpoint, args.push_token)),
        broadcaster: Arc::new(LiveEventBroadcaster::new()),
        link_base: Arc::new(args.link_base),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
