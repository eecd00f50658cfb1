pub mod auth_handlers;
pub mod client_handlers;
pub mod dashboard;
pub mod employee_handlers;
pub mod participant_handlers;
pub mod project_handlers;
pub mod report_handlers;
pub mod review_handlers;
pub mod topic_handlers;
pub mod vote_handlers;

use actix_web::web;
use rusqlite::Connection;

use crate::auth::middleware::{require_auth, require_json_content_type};
use crate::errors::AppError;
use crate::models::review::{self, Review};

/// Today's date in the YYYY-MM-DD form review dates are stored in.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub(crate) fn load_review(conn: &Connection, id: i64) -> Result<Review, AppError> {
    review::find_by_id(conn, id)?.ok_or(AppError::NotFound)
}

/// Configure all API routes. Shared between `main` and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/login", web::post().to(auth_handlers::login));
    cfg.service(
        web::scope("/api/v1")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .wrap(actix_web::middleware::from_fn(require_auth))
            .route("/logout", web::post().to(auth_handlers::logout))
            .route("/me", web::get().to(auth_handlers::me))
            .route("/dashboard", web::get().to(dashboard::index))
            // Clients
            .route("/clients", web::get().to(client_handlers::list))
            .route("/clients", web::post().to(client_handlers::create))
            .route("/clients/{id}", web::get().to(client_handlers::read))
            .route("/clients/{id}", web::delete().to(client_handlers::delete))
            // Projects
            .route("/projects", web::get().to(project_handlers::list))
            .route("/projects", web::post().to(project_handlers::create))
            .route("/projects/{id}", web::get().to(project_handlers::read))
            .route("/projects/{id}", web::delete().to(project_handlers::delete))
            // Employees and roles
            .route("/employees", web::get().to(employee_handlers::list))
            .route("/employees", web::post().to(employee_handlers::create))
            .route("/employees/{id}", web::get().to(employee_handlers::read))
            .route("/roles", web::get().to(participant_handlers::roles))
            // Reviews — /reviews/recent BEFORE /reviews/{id} to avoid routing conflict
            .route("/reviews", web::get().to(review_handlers::list))
            .route("/reviews", web::post().to(review_handlers::create))
            .route("/reviews/recent", web::get().to(review_handlers::recent))
            .route("/reviews/{id}", web::get().to(review_handlers::detail))
            .route("/reviews/{id}", web::put().to(review_handlers::update))
            .route("/reviews/{id}", web::delete().to(review_handlers::delete))
            .route("/reviews/{id}/complete", web::post().to(review_handlers::complete))
            // Report
            .route("/reviews/{id}/report", web::get().to(report_handlers::read))
            .route("/reviews/{id}/report", web::post().to(report_handlers::submit))
            // Participants
            .route("/reviews/{id}/participants", web::get().to(participant_handlers::list))
            .route("/reviews/{id}/participants", web::post().to(participant_handlers::assign))
            .route(
                "/reviews/{id}/participants/{participant_id}",
                web::delete().to(participant_handlers::remove),
            )
            // Topics
            .route("/reviews/{id}/topics", web::get().to(topic_handlers::list))
            .route("/reviews/{id}/topics/drafts", web::get().to(topic_handlers::draft_list))
            .route("/reviews/{id}/topics/drafts", web::post().to(topic_handlers::draft_add))
            .route(
                "/reviews/{id}/topics/drafts/{index}",
                web::delete().to(topic_handlers::draft_remove),
            )
            .route("/reviews/{id}/topics/commit", web::post().to(topic_handlers::commit))
            .route(
                "/reviews/{id}/topics/{topic_id}/toggle",
                web::post().to(topic_handlers::toggle),
            )
            .route(
                "/reviews/{id}/topics/{topic_id}",
                web::delete().to(topic_handlers::remove),
            )
            // Votes
            .route("/reviews/{id}/votes", web::get().to(vote_handlers::list))
            .route("/reviews/{id}/votes", web::post().to(vote_handlers::cast)),
    );
}
