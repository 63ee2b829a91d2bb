use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::job_posting::JobForm,
    errors::AppError,
    repositories::identity::IdentityProvider,
    use_cases::extractors::CurrentUser,
    AppState,
};

#[instrument(skip(state, user, data))]
pub async fn create_job(
    state: web::Data<AppState>,
    user: CurrentUser,
    data: web::Json<JobForm>,
) -> Result<impl Responder, AppError> {
    let response = state.job_board
        .create_job(&data.into_inner(), user.current_user_id())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn list_jobs(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let postings = state.job_board.list_jobs().await?;

    Ok(HttpResponse::Ok().json(postings))
}
