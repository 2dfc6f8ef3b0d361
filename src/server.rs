use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use maud::html;

use crate::button::{Button, ButtonSize, ButtonVariant, IconName, Resolution, StyleInput, resolve};
use crate::config::AppConfig;
use crate::error::ButtonError;
use crate::gallery;

/// Build the application state: the gallery page is rendered once and
/// shared by every request.
pub fn build_state(config: Arc<AppConfig>) -> AppState {
    let page = gallery::render_page(&config.gallery).into_string();
    info!(
        name: "gallery.rendered",
        bytes = page.len(),
        "Gallery page rendered"
    );

    AppState {
        config,
        gallery: Arc::from(page),
    }
}

/// Build the router.
pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.gallery.static_dir);

    Router::new()
        .route("/", get(gallery_handler))
        .route("/api/resolve", get(api_resolve))
        .route("/api/render", get(api_render))
        .route("/api/catalog", get(api_catalog))
        .route("/healthz", get(|| async { "ok" }))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let app = router(build_state(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Error body returned by the API.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// API errors, all mapped to a `400 Bad Request` with a JSON body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A name in the query is not a known variant, size or icon.
    #[error(transparent)]
    Button(#[from] ButtonError),

    /// The query string itself could not be deserialized.
    #[error("{}", .0.body_text())]
    Query(#[from] QueryRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejected button query");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Query accepted by the resolve and render endpoints.
///
/// Names are parsed by hand so unknown values produce a descriptive error
/// rather than a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ButtonQuery {
    variant: Option<String>,
    size: Option<String>,
    destructive: bool,
    disabled: bool,
    loading: bool,
    class: Option<String>,
    aria_label: Option<String>,
    label: Option<String>,
    left_icon: Option<String>,
    right_icon: Option<String>,
}

impl ButtonQuery {
    fn style(&self) -> Result<StyleInput, ButtonError> {
        Ok(StyleInput {
            variant: parse_or_default::<ButtonVariant>(self.variant.as_deref())?,
            size: parse_or_default::<ButtonSize>(self.size.as_deref())?,
            destructive: self.destructive,
            disabled: self.disabled,
            loading: self.loading,
        })
    }

    fn button(&self) -> Result<Button, ButtonError> {
        let mut button = Button::from_style(self.style()?);

        if let Some(class) = &self.class {
            button = button.class(class.as_str());
        }
        if let Some(label) = &self.aria_label {
            button = button.aria_label(label.as_str());
        }
        if let Some(icon) = parse_icon(self.left_icon.as_deref())? {
            button = button.left_icon(icon.render());
        }
        if let Some(icon) = parse_icon(self.right_icon.as_deref())? {
            button = button.right_icon(icon.render());
        }
        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            button = button.child(html! { (label) });
        }

        Ok(button)
    }
}

/// Empty values fall back to the default, as an unselected form field does.
fn parse_or_default<T>(value: Option<&str>) -> Result<T, ButtonError>
where
    T: std::str::FromStr<Err = ButtonError> + Default,
{
    match value {
        Some(v) if !v.is_empty() => v.parse(),
        _ => Ok(T::default()),
    }
}

fn parse_icon(value: Option<&str>) -> Result<Option<IconName>, ButtonError> {
    value.filter(|v| !v.is_empty()).map(str::parse).transpose()
}

/// GET / - Documentation gallery.
async fn gallery_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.gallery.to_string())
}

/// GET /api/resolve - Resolve classes and ARIA attributes.
async fn api_resolve(
    query: Result<Query<ButtonQuery>, QueryRejection>,
) -> Result<Json<Resolution>, ApiError> {
    let Query(query) = query?;
    let style = query.style()?;
    Ok(Json(resolve(
        style,
        query.class.as_deref().unwrap_or_default(),
        query.aria_label.as_deref(),
    )))
}

/// GET /api/render - Render one button as an HTML fragment.
async fn api_render(
    query: Result<Query<ButtonQuery>, QueryRejection>,
) -> Result<Html<String>, ApiError> {
    let Query(query) = query?;
    let button = query.button()?;
    Ok(Html(button.render().into_string()))
}

/// Names accepted by the API.
#[derive(Debug, Serialize)]
struct Catalog {
    variants: Vec<ButtonVariant>,
    sizes: Vec<ButtonSize>,
    icons: Vec<IconName>,
}

/// GET /api/catalog - List variants, sizes and icons.
async fn api_catalog() -> Json<Catalog> {
    Json(Catalog {
        variants: ButtonVariant::ALL.to_vec(),
        sizes: ButtonSize::ALL.to_vec(),
        icons: IconName::ALL.to_vec(),
    })
}
