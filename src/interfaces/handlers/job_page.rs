use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::job_posting::JobForm,
    use_cases::extractors::CurrentUser,
    view::{controller::JobBoardView, render::render_page, state::ViewState},
    AppState,
};

/// Each page load is a fresh mount: one fetch of every posting.
#[instrument(skip(state, user))]
pub async fn show_job_page(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> impl Responder {
    let mut view = JobBoardView::new(state.job_board.clone(), user);
    view.mount();

    html_response(view.settle().await)
}

/// Runs the create to completion, then mounts the listing for the response page.
#[instrument(skip(state, user, form))]
pub async fn submit_job_page(
    state: web::Data<AppState>,
    user: CurrentUser,
    form: web::Form<JobForm>,
) -> impl Responder {
    let mut view = JobBoardView::with_state(
        state.job_board.clone(),
        user,
        ViewState::with_form(form.into_inner()),
    );

    view.submit();
    view.settle().await;

    view.mount();
    html_response(view.settle().await)
}

fn html_response(state: &ViewState) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(render_page(state))
}
