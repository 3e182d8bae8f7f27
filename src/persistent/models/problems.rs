use diesel::prelude::*;
use serde::Serialize;

use crate::api::err::{Error, Reason};
use crate::persistent::schema::problems;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Queryable)]
pub struct Problem {
    pub id: i32,
    pub title: String,
    pub description: String,
}

/// Get all problems ordered by id
pub fn get_problems(conn: &mut SqliteConnection) -> Result<Vec<Problem>, Error> {
    use self::problems::dsl::*;

    Ok(problems.order(id.asc()).load(conn)?)
}

/// Get problem by id
pub fn get_problem(conn: &mut SqliteConnection, pid: i32) -> Result<Problem, Error> {
    use self::problems::dsl::*;

    problems
        .find(pid)
        .first(conn)
        .optional()?
        .ok_or_else(|| Error::new(Reason::NotFound, format!("Problem {pid} not found.")))
}
