use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

use crate::engine;
use crate::error::LeaveError;
use crate::model::leave_policy::{LeaveTypeId, PolicyCatalog};
use crate::model::leave_record::{EditContext, LeaveRecord};
use crate::model::leave_request::{LeaveDuration, LeaveRequest};

/// Candidate request as typed into the leave form.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LeaveRequestBody {
    #[schema(example = "annual", value_type = String)]
    pub leave_type_id: LeaveTypeId,
    #[schema(example = "2026-03-06", format = "date", value_type = String)]
    pub from_date: String,
    /// Ignored for half-day requests
    #[schema(example = "2026-03-09", format = "date", value_type = String)]
    #[serde(default)]
    pub to_date: String,
    #[schema(example = "FULL_DAY")]
    #[serde(default)]
    pub duration: LeaveDuration,
}

impl LeaveRequestBody {
    fn to_request(&self) -> Result<LeaveRequest, LeaveError> {
        LeaveRequest::parse(
            self.leave_type_id.clone(),
            &self.from_date,
            &self.to_date,
            self.duration,
        )
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ComputeDaysBody {
    pub request: LeaveRequestBody,
    /// Overrides the server catalog for this call
    #[schema(value_type = Option<Vec<crate::model::leave_policy::LeavePolicy>>)]
    pub policies: Option<PolicyCatalog>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComputeDaysResponse {
    #[schema(example = "annual", value_type = String)]
    pub leave_type_id: LeaveTypeId,
    #[schema(example = 2.0)]
    pub days: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BalanceBody {
    #[schema(example = "annual", value_type = String)]
    pub leave_type_id: LeaveTypeId,
    #[serde(default)]
    pub history: Vec<LeaveRecord>,
    pub edit_context: Option<EditContext>,
    #[schema(value_type = Option<Vec<crate::model::leave_policy::LeavePolicy>>)]
    pub policies: Option<PolicyCatalog>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BalancesBody {
    #[serde(default)]
    pub history: Vec<LeaveRecord>,
    #[schema(value_type = Option<Vec<crate::model::leave_policy::LeavePolicy>>)]
    pub policies: Option<PolicyCatalog>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct EvaluateBody {
    pub request: LeaveRequestBody,
    #[serde(default)]
    pub history: Vec<LeaveRecord>,
    /// Prior state of the record when re-evaluating an edit
    pub edit_context: Option<EditContext>,
    #[schema(value_type = Option<Vec<crate::model::leave_policy::LeavePolicy>>)]
    pub policies: Option<PolicyCatalog>,
}

/// Catalog supplied with the call, else the one the server was started with.
/// A supplied catalog gets the same checks as the one loaded at startup.
fn pick_catalog<'a>(
    supplied: &'a Option<PolicyCatalog>,
    default: &'a PolicyCatalog,
) -> Result<&'a PolicyCatalog, LeaveError> {
    match supplied {
        Some(catalog) => {
            catalog.check()?;
            Ok(catalog)
        }
        None => Ok(default),
    }
}

fn log_fault(err: LeaveError) -> actix_web::Error {
    warn!(error = %err, "Leave calculation refused");
    err.into()
}

/// List the server's default leave policies
#[utoipa::path(
    get,
    path = "/api/leave/policies",
    responses(
        (status = 200, description = "Configured leave policies",
         body = Vec<crate::model::leave_policy::LeavePolicy>)
    ),
    tag = "Leave"
)]
pub async fn list_policies(catalog: web::Data<PolicyCatalog>) -> impl Responder {
    HttpResponse::Ok().json(catalog.get_ref())
}

/// Count the chargeable days of a leave request
#[utoipa::path(
    post,
    path = "/api/leave/days",
    request_body(
        content = ComputeDaysBody,
        description = "Leave request and optional policy catalog",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Chargeable days", body = ComputeDaysResponse),
        (status = 400, description = "Malformed date or reversed range", body = Object,
         example = json!({
            "message": "invalid date range: 2026-03-02 is before 2026-03-06"
        })),
        (status = 404, description = "Unknown leave type", body = Object, example = json!({
            "message": "unknown leave type: sabbatical"
        }))
    ),
    tag = "Leave"
)]
#[instrument(skip_all, fields(leave_type = %payload.request.leave_type_id))]
pub async fn compute_days(
    catalog: web::Data<PolicyCatalog>,
    payload: web::Json<ComputeDaysBody>,
) -> actix_web::Result<impl Responder> {
    let catalog = pick_catalog(&payload.policies, catalog.get_ref()).map_err(log_fault)?;
    let request = payload.request.to_request().map_err(log_fault)?;
    let policy = engine::resolve(&request.leave_type_id, catalog).map_err(log_fault)?;
    let days = engine::compute_days(&request, policy).map_err(log_fault)?;

    debug!(days, "Computed chargeable days");

    Ok(HttpResponse::Ok().json(ComputeDaysResponse {
        leave_type_id: request.leave_type_id,
        days,
    }))
}

/// Balance of one leave type for the supplied history
#[utoipa::path(
    post,
    path = "/api/leave/balance",
    request_body(
        content = BalanceBody,
        description = "Leave type, history and optional edit context",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Balance snapshot",
         body = crate::model::balance::BalanceSnapshot),
        (status = 400, description = "Invalid day amount, policy cap or edit context"),
        (status = 404, description = "Unknown leave type")
    ),
    tag = "Leave"
)]
#[instrument(skip_all, fields(leave_type = %payload.leave_type_id))]
pub async fn balance(
    catalog: web::Data<PolicyCatalog>,
    payload: web::Json<BalanceBody>,
) -> actix_web::Result<impl Responder> {
    let catalog = pick_catalog(&payload.policies, catalog.get_ref()).map_err(log_fault)?;
    let policy = engine::resolve(&payload.leave_type_id, catalog).map_err(log_fault)?;
    let snapshot = engine::compute_balance(
        &payload.leave_type_id,
        policy,
        &payload.history,
        payload.edit_context.as_ref(),
    )
    .map_err(log_fault)?;

    Ok(HttpResponse::Ok().json(snapshot))
}

/// Balances of every leave type in the catalog
#[utoipa::path(
    post,
    path = "/api/leave/balances",
    request_body(
        content = BalancesBody,
        description = "History and optional policy catalog",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "One snapshot per leave type",
         body = Vec<crate::model::balance::BalanceSnapshot>),
        (status = 400, description = "Invalid day amount or policy cap")
    ),
    tag = "Leave"
)]
pub async fn balances(
    catalog: web::Data<PolicyCatalog>,
    payload: web::Json<BalancesBody>,
) -> actix_web::Result<impl Responder> {
    let catalog = pick_catalog(&payload.policies, catalog.get_ref()).map_err(log_fault)?;
    let snapshots = engine::summarize_balances(catalog, &payload.history).map_err(log_fault)?;

    Ok(HttpResponse::Ok().json(snapshots))
}

/// Count, balance and decide a leave request in one call
#[utoipa::path(
    post,
    path = "/api/leave/evaluate",
    request_body(
        content = EvaluateBody,
        description = "Leave request, history and optional edit context",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Verdict; rejections are returned here, not as errors",
         body = crate::engine::Evaluation,
         example = json!({
            "policy": {
                "leave_type_id": "annual",
                "max_days_allowed": 10.0,
                "includes_weekends": false,
                "is_sandwich_leave": false,
                "is_paid": true
            },
            "balance": {
                "leave_type_id": "annual",
                "allowed": 10.0,
                "consumed_approved": 8.0,
                "consumed_pending": 0.0,
                "remaining": 2.0
            },
            "verdict": {
                "accepted": false,
                "days": 3.0,
                "message": "requested 3 days exceeds the available balance, only 2 days available for this leave type",
                "reason": "balance_exceeded",
                "remaining_after": null
            }
         })
        ),
        (status = 400,
         description = "Malformed date, reversed range, invalid day amount or edit context"),
        (status = 404, description = "Unknown leave type")
    ),
    tag = "Leave"
)]
#[instrument(skip_all, fields(leave_type = %payload.request.leave_type_id))]
pub async fn evaluate(
    catalog: web::Data<PolicyCatalog>,
    payload: web::Json<EvaluateBody>,
) -> actix_web::Result<impl Responder> {
    let catalog = pick_catalog(&payload.policies, catalog.get_ref()).map_err(log_fault)?;
    let request = payload.request.to_request().map_err(log_fault)?;
    let evaluation = engine::evaluate(
        &request,
        catalog,
        &payload.history,
        payload.edit_context.as_ref(),
    )
    .map_err(log_fault)?;

    info!(
        accepted = evaluation.verdict.accepted,
        days = evaluation.verdict.days,
        "Leave request evaluated"
    );

    Ok(HttpResponse::Ok().json(evaluation))
}
