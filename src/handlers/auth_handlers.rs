use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::password::verify_password;
use crate::auth::session::{CurrentUser, current_user, set_current_user};
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::employee;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/login — email + password, establishes the cookie session.
pub async fn login(
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let denied = || AppError::PermissionDenied("Invalid email or password".to_string());

    let emp = employee::find_by_email(&conn, body.email.trim())?.ok_or_else(denied)?;
    let ok = verify_password(&body.password, &emp.password_hash).map_err(AppError::Hash)?;
    if !ok {
        log::warn!("failed login for {}", emp.email);
        return Err(denied());
    }

    session.renew();
    let user = CurrentUser {
        id: emp.id,
        name: emp.name.clone(),
        is_manager: emp.is_manager,
    };
    set_current_user(&session, &user)?;
    log::info!("employee {} logged in", emp.id);
    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/v1/logout
pub async fn logout(session: Session) -> Result<HttpResponse, AppError> {
    session.purge();
    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

/// GET /api/v1/me — the logged-in employee.
pub async fn me(session: Session) -> Result<HttpResponse, AppError> {
    let user = current_user(&session)?;
    Ok(HttpResponse::Ok().json(user))
}
