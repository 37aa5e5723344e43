use actix_web::{web, HttpResponse, Responder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::StableMatcher;
use crate::models::{StableMatchRequest, StableMatchResponse, HealthResponse, ErrorResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: StableMatcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(matching: MatchingSettings) -> Self {
        Self {
            matcher: StableMatcher::new(matching.candidate_policy),
            matching,
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/stable", web::post().to(stable_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Stable pairing endpoint
///
/// POST /api/v1/matches/stable
///
/// Request body:
/// ```json
/// {
///   "scores": [[0, 3.5], [2.0, 0]],
///   "identities": ["Male", "Female"],
///   "preferences": ["Women", "Men"],
///   "seed": 42,
///   "candidatePolicy": "compatible_only"
/// }
/// ```
async fn stable_match(
    state: web::Data<AppState>,
    req: web::Json<StableMatchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for stable_match request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let participants = req.participant_count();
    if participants > state.matching.max_participants {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Population too large".to_string(),
            message: format!(
                "{} participants exceeds the limit of {}",
                participants, state.matching.max_participants
            ),
            status_code: 400,
        });
    }

    let run_id = uuid::Uuid::new_v4();
    let matcher = req
        .candidate_policy
        .map(StableMatcher::new)
        .unwrap_or(state.matcher);

    tracing::info!(
        "Pairing run {}: {} participants, policy {:?}",
        run_id,
        participants,
        matcher.policy()
    );

    let seed = req.seed.or(state.matching.seed);
    let request = req.into_inner();

    // Matching is CPU bound; keep it off the async worker
    let result = web::block(move || match seed {
        Some(seed) => matcher.run(&request.scores, &request.identities, &request.preferences, &mut StdRng::seed_from_u64(seed)),
        None => matcher.run(&request.scores, &request.identities, &request.preferences, &mut rand::rng()),
    })
    .await;

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Pairing run {} failed to complete: {}", run_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Pairing failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::info!("Pairing run {} rejected: {}", run_id, e);
            return HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Invalid population".to_string(),
                message: e.to_string(),
                status_code: 422,
            });
        }
    };

    let stable = outcome.is_stable();
    if !stable {
        tracing::error!("Pairing run {} produced a blocking pair: {:?}", run_id, outcome.blocking_pair());
    }

    let response = StableMatchResponse {
        run_id,
        pairs: outcome.pairs,
        unmatched_proposers: outcome.unmatched_proposers,
        unmatched_receivers: outcome.unmatched_receivers,
        proposals: outcome.proposals,
        stable,
    };

    tracing::info!("Returning {} pairs for run {}", response.pairs.len(), run_id);

    HttpResponse::Ok().json(response)
}
