use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use roster::{
    database::{DatabaseError, DatabaseManager},
    draw::{assign_seats, DrawConfig},
    error::DrawError,
    export::{build_chart, build_deck, render_csv, SeatingChart, SlideDeck},
    models::{
        ChapterProfile, ChapterProfileUpdate, Member, MemberUpdate, NewMember, NewRole, Role,
        SeatAssignment,
    },
};

// Application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseManager>,
}

// API types
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

#[derive(Deserialize)]
pub struct DrawRequest {
    pub speaker1: String,
    pub speaker2: String,
}

/// Draw response shape consumed by the client-side renderers
#[derive(Serialize)]
pub struct DrawResponse {
    pub success: bool,
    pub order: Vec<SeatAssignment>,
    pub unfilled_seats: Vec<i32>,
    pub csv: String,
    pub deck: SlideDeck,
    pub chart: SeatingChart,
}

/// Handler-level error: status code + `{ "error": ... }` JSON body
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(e: DatabaseError) -> Self {
        let status = match &e {
            DatabaseError::NotFound { .. } => StatusCode::NOT_FOUND,
            DatabaseError::Sqlx(_) => {
                warn!("Database failure: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl From<DrawError> for ApiError {
    fn from(e: DrawError) -> Self {
        // Validation failures are user-correctable; a seat conflict means
        // the stored roster itself is inconsistent.
        let status = if e.is_user_correctable() {
            StatusCode::BAD_REQUEST
        } else {
            warn!("Draw failed on inconsistent roster: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "roster_web_server=info,tower_http=debug".to_string()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Database connection
    let db = Arc::new(DatabaseManager::with_default_config().await?);
    db.test_connection().await?;

    // Create application state
    let app_state = AppState { db };

    // Build our application with routes
    let app = create_router(app_state);

    // Determine port
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/members", get(list_members).post(create_member))
        .route(
            "/api/members/:member_id",
            axum::routing::put(update_member).delete(delete_member),
        )
        .route("/api/roles", get(list_roles).post(create_role))
        .route("/api/roles/:role_id", axum::routing::delete(delete_role))
        .route(
            "/api/chapter",
            get(get_chapter).put(update_chapter),
        )
        .route("/api/draw", post(draw_order))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

// Health check endpoint
async fn health_check() -> Json<ApiResponse<String>> {
    ApiResponse::ok("OK".to_string())
}

// ----------------------------------------------------------------------------
// Member CRUD
// ----------------------------------------------------------------------------

async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Member>>>, ApiError> {
    let members = state.db.member_repository().list().await?;
    Ok(ApiResponse::ok(members))
}

async fn create_member(
    State(state): State<AppState>,
    Json(payload): Json<NewMember>,
) -> Result<Json<ApiResponse<Member>>, ApiError> {
    if payload.member_name.trim().is_empty() {
        return Err(ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "member_name must not be empty".to_string(),
        });
    }
    let member = state.db.member_repository().create(payload).await?;
    Ok(ApiResponse::ok(member))
}

async fn update_member(
    Path(member_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<MemberUpdate>,
) -> Result<Json<ApiResponse<Member>>, ApiError> {
    let member = state
        .db
        .member_repository()
        .update(member_id, payload)
        .await?;
    Ok(ApiResponse::ok(member))
}

async fn delete_member(
    Path(member_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.db.member_repository().delete(member_id).await?;
    Ok(ApiResponse::ok(()))
}

// ----------------------------------------------------------------------------
// Role CRUD
// ----------------------------------------------------------------------------

async fn list_roles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Role>>>, ApiError> {
    let roles = state.db.role_repository().list().await?;
    Ok(ApiResponse::ok(roles))
}

async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<NewRole>,
) -> Result<Json<ApiResponse<Role>>, ApiError> {
    let role = state.db.role_repository().create(payload).await?;
    Ok(ApiResponse::ok(role))
}

async fn delete_role(
    Path(role_id): Path<uuid::Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.db.role_repository().delete(role_id).await?;
    Ok(ApiResponse::ok(()))
}

// ----------------------------------------------------------------------------
// Chapter profile
// ----------------------------------------------------------------------------

async fn get_chapter(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Option<ChapterProfile>>>, ApiError> {
    let profile = state.db.chapter_repository().get().await?;
    Ok(ApiResponse::ok(profile))
}

async fn update_chapter(
    State(state): State<AppState>,
    Json(payload): Json<ChapterProfileUpdate>,
) -> Result<Json<ApiResponse<ChapterProfile>>, ApiError> {
    let profile = state.db.chapter_repository().upsert(payload).await?;
    Ok(ApiResponse::ok(profile))
}

// ----------------------------------------------------------------------------
// Presentation draw
// ----------------------------------------------------------------------------

/// Fetch the roster snapshot, run the draw engine, and return the computed
/// order together with every export payload.
async fn draw_order(
    State(state): State<AppState>,
    Json(request): Json<DrawRequest>,
) -> Result<Json<DrawResponse>, ApiError> {
    let roster = state.db.member_repository().list().await?;
    let config = DrawConfig::default();

    let order = assign_seats(
        &roster,
        &request.speaker1,
        &request.speaker2,
        &config,
        &mut rand::thread_rng(),
    )?;

    info!(
        speakers = %format!("{} / {}", request.speaker1, request.speaker2),
        placed = order.assignments.len(),
        gaps = order.unfilled_seats.len(),
        "Draw computed"
    );

    let deck_title = state
        .db
        .chapter_repository()
        .get()
        .await?
        .map(|profile| format!("Ordem de Apresentação - {}", profile.chapter_name))
        .unwrap_or_else(|| "Ordem de Apresentação".to_string());

    let csv = render_csv(&order.assignments).map_err(|e| ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: e.to_string(),
    })?;
    let deck = build_deck(&deck_title, Utc::now().date_naive(), &order.assignments);
    let chart = build_chart(&order.assignments, roster.len() as i32, &config);

    Ok(Json(DrawResponse {
        success: true,
        order: order.assignments,
        unfilled_seats: order.unfilled_seats,
        csv,
        deck,
        chart,
    }))
}
