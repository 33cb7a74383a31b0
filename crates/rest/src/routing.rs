//! Route configuration for the blog post API.
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |-------------|-------------|-------------|
//! | list | GET | `/posts` |
//! | create | POST | `/posts` |
//! | read | GET | `/posts/{id}` |
//! | update | PUT | `/posts/{id}` |
//! | delete | DELETE | `/posts/{id}` |
//! | health | GET | `/health` |

use axum::{Router, routing::get};
use quill_store::DocumentStore;

use crate::handlers;
use crate::state::AppState;

/// Builds the router with all blog post routes.
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .route(
            "/posts",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/posts/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        )
        .with_state(state)
}
