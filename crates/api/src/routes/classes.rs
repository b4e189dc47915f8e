use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/classes",
        get(handlers::classes::list_classes).post(handlers::classes::create_class),
    )
}
