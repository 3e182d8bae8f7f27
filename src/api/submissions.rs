use actix_web::{
    get,
    web::{self, Data, Path},
    HttpResponse,
};
use serde::Serialize;

use super::err::Error;

use crate::{
    persistent::models::{self, SubmissionSummary},
    status,
    view::{Page, View},
    DbPool,
};

#[derive(Serialize)]
struct SubmissionRow {
    id: i32,
    problem_id: i32,
    problem_title: String,
    solution: String,
    status_title: &'static str,
    checker_message: String,
}

impl From<SubmissionSummary> for SubmissionRow {
    fn from(submission: SubmissionSummary) -> Self {
        Self {
            id: submission.id,
            problem_id: submission.problem_id,
            problem_title: submission.problem_title,
            solution: submission.solution,
            status_title: status::describe(&submission.status),
            checker_message: submission.checker_message.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct SubmissionsPage {
    submissions: Vec<SubmissionRow>,
}

#[get("/submission/{id}")]
pub async fn get_submission(
    id: Path<i32>,
    pool: Data<DbPool>,
    view: Data<View>,
) -> Result<HttpResponse, Error> {
    const TARGET: &str = "GET /submission/{id}";
    log::info!(target: TARGET, "Request received");

    let id = id.into_inner();
    let submission = web::block(move || {
        let mut conn = pool.get()?;
        models::get_submission_detail(&mut conn, id)
    })
    .await??;

    let page = view.render(Page::Submission, &submission)?;
    log::info!(target: TARGET, "Request done");
    Ok(super::html(page))
}

#[get("/submissions")]
pub async fn get_submissions(pool: Data<DbPool>, view: Data<View>) -> Result<HttpResponse, Error> {
    const TARGET: &str = "GET /submissions";
    log::info!(target: TARGET, "Request received");

    let submissions = web::block(move || {
        let mut conn = pool.get()?;
        models::get_submissions(&mut conn)
    })
    .await??;

    let submissions = submissions.into_iter().map(SubmissionRow::from).collect();
    let page = view.render(Page::Submissions, &SubmissionsPage { submissions })?;
    log::info!(target: TARGET, "Request done");
    Ok(super::html(page))
}
