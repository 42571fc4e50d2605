//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::domain::InvalidStation;
use crate::graph::UnknownStation;
use crate::network::Network;
use crate::planner::RouteFinder;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/route", get(route_api))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Map page, with a route if one was asked for.
async fn index_page(State(state): State<AppState>, Query(query): Query<RouteQuery>) -> Response {
    match render_index(&state.network, &query) {
        Ok(html) => Html(html).into_response(),
        Err(err) => err.into_html_response(),
    }
}

/// Render the map page for a query.
///
/// Form mistakes (blank or identical stations) and missing routes are shown
/// in the side panel. Stations that don't exist are request errors.
fn render_index(network: &Network, query: &RouteQuery) -> Result<String, AppError> {
    let (message, route) = match query.input()? {
        RouteInput::Absent => (None, None),
        RouteInput::Incomplete => (Some(PanelMessage::missing_input()), None),
        RouteInput::SameStation => (Some(PanelMessage::same_station()), None),
        RouteInput::Stations { from, to } => {
            match RouteFinder::new(network.graph()).find_route(&from, &to)? {
                Some(route) => (None, Some(route)),
                None => (Some(PanelMessage::no_route()), None),
            }
        }
    };

    let page = IndexTemplate {
        map: MapView::build(network, route.as_ref()),
        options: StationOption::list(
            network,
            query.from.as_deref().map(str::trim),
            query.to.as_deref().map(str::trim),
        ),
        message,
        route: route.as_ref().map(RouteView::from_route),
    };

    page.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// List every station, sorted by name.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .network
        .graph()
        .stations()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    Json(StationsResponse { stations })
}

/// Find the shortest route between two stations.
async fn route_api(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let (from, to) = match query.input()? {
        RouteInput::Stations { from, to } => (from, to),
        RouteInput::Absent | RouteInput::Incomplete => {
            return Err(AppError::BadRequest {
                message: PanelMessage::missing_input().text,
            });
        }
        RouteInput::SameStation => {
            return Err(AppError::BadRequest {
                message: PanelMessage::same_station().text,
            });
        }
    };

    let route = RouteFinder::new(state.network.graph()).find_route(&from, &to)?;

    Ok(Json(RouteResponse::from_result(route.as_ref())))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.as_str()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.as_str()),
        }
    }

    fn log(&self) {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }
    }

    /// Render the error as an HTML page, for browser-facing routes.
    fn into_html_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();

        let page = ErrorTemplate {
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.to_string(),
        };
        let body = page
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e));

        (status, Html(body)).into_response()
    }
}

impl From<InvalidStation> for AppError {
    fn from(e: InvalidStation) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<UnknownStation> for AppError {
    fn from(e: UnknownStation) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let (status, message) = self.status_and_message();

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Position;

    fn metro_state() -> AppState {
        AppState::new(Network::metro().unwrap())
    }

    fn query(from: &str, to: &str) -> Query<RouteQuery> {
        Query(RouteQuery {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
        })
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn stations_are_sorted() {
        let Json(response) = list_stations(State(metro_state())).await;

        assert_eq!(response.stations.len(), 20);
        assert_eq!(response.stations[0], "Station A");
        assert_eq!(response.stations[19], "Station T");
    }

    #[tokio::test]
    async fn api_finds_route() {
        let Json(response) = route_api(State(metro_state()), query("Station A", "Station J"))
            .await
            .unwrap();

        assert!(response.found);
        assert_eq!(response.distance, Some(19));
        assert_eq!(
            response.path.unwrap(),
            vec!["Station A", "Station B", "Station C", "Station F", "Station J"]
        );
    }

    #[tokio::test]
    async fn api_rejects_same_station() {
        let err = route_api(State(metro_state()), query("Station A", "Station A"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, AppError::BadRequest { message } if message == "Both stations cannot be same.")
        );
    }

    #[tokio::test]
    async fn api_rejects_missing_station() {
        let err = route_api(State(metro_state()), query("Station A", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn api_rejects_unknown_station() {
        let err = route_api(State(metro_state()), query("Station Z", "Station A"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, AppError::BadRequest { message } if message == "unknown station: Station Z")
        );
    }

    #[tokio::test]
    async fn api_reports_no_route() {
        let network = Network::from_parts(
            vec![
                ("North", vec![("South", 1)]),
                ("South", vec![("North", 1)]),
                ("Island", vec![]),
            ],
            vec![
                ("North", Position::new(0, 0)),
                ("South", Position::new(0, 100)),
                ("Island", Position::new(200, 50)),
            ],
        )
        .unwrap();

        let Json(response) = route_api(State(AppState::new(network)), query("North", "Island"))
            .await
            .unwrap();

        assert_eq!(response, RouteResponse::from_result(None));
    }

    #[tokio::test]
    async fn index_without_query_shows_map() {
        let response = index_page(State(metro_state()), Query(RouteQuery::default())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("<svg"));
        assert!(body.contains("Find Route"));
        assert!(!body.contains("Shortest Distance"));
    }

    #[tokio::test]
    async fn index_shows_route() {
        let response = index_page(State(metro_state()), query("Station A", "Station T")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Shortest Distance: 35"));
        assert!(body.contains("→ Station N"));
    }

    #[tokio::test]
    async fn index_warns_on_missing_input() {
        let response = index_page(State(metro_state()), query("", "Station T")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Choose both start and end stations."));
    }

    #[tokio::test]
    async fn index_unknown_station_is_bad_request() {
        let response = index_page(State(metro_state()), query("Station Z", "Station T")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_text(response).await;
        assert!(body.contains("unknown station: Station Z"));
    }

    #[test]
    fn app_error_status() {
        let response = AppError::Internal {
            message: "boom".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::BadRequest {
            message: "bad".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
