use diesel::{prelude::*, sql_types::Integer};
use serde::Serialize;

use crate::api::err::{Error, Reason};
use crate::config::IdAllocation;
use crate::persistent::schema::{problems, submission_statuses, submissions};

/// A submission together with the title of its problem
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Queryable)]
pub struct SubmissionDetail {
    pub id: i32,
    pub problem_title: String,
    pub solution: String,
}

/// A row of the submissions list, `status` is the raw status code
#[derive(Clone, Debug, PartialEq, Eq, Queryable)]
pub struct SubmissionSummary {
    pub id: i32,
    pub problem_id: i32,
    pub problem_title: String,
    pub solution: String,
    pub status: String,
    pub checker_message: Option<String>,
}

/// Get a submission joined with its problem
pub fn get_submission_detail(
    conn: &mut SqliteConnection,
    sid: i32,
) -> Result<SubmissionDetail, Error> {
    submissions::table
        .inner_join(problems::table)
        .filter(submissions::id.eq(sid))
        .select((submissions::id, problems::title, submissions::solution))
        .first(conn)
        .optional()?
        .ok_or_else(|| Error::new(Reason::NotFound, format!("Submission {sid} not found.")))
}

/// Get all submissions ordered by id, with problem and status joined in
pub fn get_submissions(conn: &mut SqliteConnection) -> Result<Vec<SubmissionSummary>, Error> {
    Ok(submissions::table
        .inner_join(problems::table)
        .inner_join(submission_statuses::table)
        .select((
            submissions::id,
            problems::id,
            problems::title,
            submissions::solution,
            submission_statuses::title,
            submissions::checker_message,
        ))
        .order(submissions::id.asc())
        .load(conn)?)
}

/// Add a new submission and return its id.
///
/// The initial status comes from the column default, the checker moves it on from there.
pub fn new_submission(
    conn: &mut SqliteConnection,
    allocation: IdAllocation,
    submitter: i32,
    pid: i32,
    text: &str,
) -> Result<i32, Error> {
    use self::submissions::dsl::*;

    // IMMEDIATE takes the write lock up front, so nobody can sneak in
    // between reading the id and inserting the row
    conn.immediate_transaction(|conn| match allocation {
        IdAllocation::Sequence => {
            diesel::insert_into(submissions)
                .values((
                    user_account_id.eq(submitter),
                    problem_id.eq(pid),
                    solution.eq(text),
                ))
                .execute(conn)?;
            let last_insert_rowid = diesel::dsl::sql::<Integer>("last_insert_rowid()");
            Ok(diesel::select(last_insert_rowid).get_result(conn)?)
        }
        IdAllocation::MaxPlusOne => {
            let current: Option<i32> = submissions
                .select(diesel::dsl::max(id))
                .get_result(conn)?;
            let next = current.unwrap_or(0) + 1;
            diesel::insert_into(submissions)
                .values((
                    id.eq(next),
                    user_account_id.eq(submitter),
                    problem_id.eq(pid),
                    solution.eq(text),
                ))
                .execute(conn)?;
            Ok(next)
        }
    })
}
