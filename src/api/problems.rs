use actix_web::{
    get,
    http::header,
    post,
    web::{self, Data, Form, Path},
    HttpResponse,
};
use serde::{Deserialize, Serialize};

use super::err::Error;

use crate::{
    config::Config,
    persistent::models::{self, Problem},
    view::{Page, View},
    DbPool,
};

#[derive(Serialize)]
struct ProblemsPage {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    solution: String,
}

#[get("/problems")]
pub async fn get_problems(pool: Data<DbPool>, view: Data<View>) -> Result<HttpResponse, Error> {
    const TARGET: &str = "GET /problems";
    log::info!(target: TARGET, "Request received");

    let problems = web::block(move || {
        let mut conn = pool.get()?;
        models::get_problems(&mut conn)
    })
    .await??;

    let page = view.render(Page::Problems, &ProblemsPage { problems })?;
    log::info!(target: TARGET, "Request done");
    Ok(super::html(page))
}

#[get("/problems/{id}")]
/// Show a problem along with the form for submitting a solution
pub async fn get_problem(
    id: Path<i32>,
    pool: Data<DbPool>,
    view: Data<View>,
) -> Result<HttpResponse, Error> {
    const TARGET: &str = "GET /problems/{id}";
    log::info!(target: TARGET, "Request received");

    let id = id.into_inner();
    let problem = web::block(move || {
        let mut conn = pool.get()?;
        models::get_problem(&mut conn, id)
    })
    .await??;

    let page = view.render(Page::Submit, &problem)?;
    log::info!(target: TARGET, "Request done");
    Ok(super::html(page))
}

#[post("/problems/{id}")]
/// Store a new submission and send the user to the submissions list
pub async fn submit(
    id: Path<i32>,
    form: Form<SubmitForm>,
    config: Data<Config>,
    pool: Data<DbPool>,
) -> Result<HttpResponse, Error> {
    const TARGET: &str = "POST /problems/{id}";
    log::info!(target: TARGET, "Request received");

    let problem_id = id.into_inner();
    let solution = form.into_inner().solution;
    let (allocation, submitter) = (config.id_allocation, config.submitter_id);

    let submission_id = web::block(move || {
        let mut conn = pool.get()?;
        models::new_submission(&mut conn, allocation, submitter, problem_id, &solution)
    })
    .await??;
    log::info!(target: TARGET, "Submission {submission_id} created for problem {problem_id}");

    log::info!(target: TARGET, "Request done");
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/submissions"))
        .finish())
}
