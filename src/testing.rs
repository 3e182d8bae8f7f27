//! Fixtures shared by the unit tests.

use std::path::PathBuf;

use diesel::{
    prelude::*,
    r2d2::{ConnectionManager, PooledConnection},
};
use temp_dir::TempDir;

use crate::persistent::{
    establish_pool,
    schema::{problems, submission_statuses, submissions},
};
use crate::view::View;
use crate::DbPool;

/// A migrated database in a temporary directory, removed on drop
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let pool = establish_pool(dir.child("judge.db").to_str().unwrap(), 8).unwrap();
        Self { pool, _dir: dir }
    }

    /// A database whose schema was never created, so every query fails
    pub fn broken() -> Self {
        let dir = TempDir::new().unwrap();
        let url = dir.child("judge.db");
        let manager = ConnectionManager::<SqliteConnection>::new(url.to_str().unwrap());
        let pool = r2d2::Pool::builder().max_size(2).build(manager).unwrap();
        Self { pool, _dir: dir }
    }

    pub fn conn(&self) -> PooledConnection<ConnectionManager<SqliteConnection>> {
        self.pool.get().unwrap()
    }
}

pub fn insert_problems(conn: &mut SqliteConnection, rows: &[(i32, &str, &str)]) {
    for &(pid, title, description) in rows {
        diesel::insert_into(problems::table)
            .values((
                problems::id.eq(pid),
                problems::title.eq(title),
                problems::description.eq(description),
            ))
            .execute(conn)
            .unwrap();
    }
}

/// Do what the checker does when it finishes with a submission
pub fn set_status(conn: &mut SqliteConnection, sid: i32, code: &str, message: Option<&str>) {
    let status: i32 = submission_statuses::table
        .filter(submission_statuses::title.eq(code))
        .select(submission_statuses::id)
        .first(conn)
        .unwrap();
    diesel::update(submissions::table.find(sid))
        .set((
            submissions::status_id.eq(status),
            submissions::checker_message.eq(message),
        ))
        .execute(conn)
        .unwrap();
}

pub fn template_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn view() -> View {
    View::load(&template_dir()).unwrap()
}

/// Build a test service wired like `main`, minus the request logger
macro_rules! test_app {
    ($db:expr, $config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($config))
                .app_data(actix_web::web::Data::new($db.pool.clone()))
                .app_data(actix_web::web::Data::new($crate::testing::view()))
                .configure($crate::api::configure),
        )
        .await
    };
}

pub(crate) use test_app;

pub async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
    let body = actix_web::test::read_body(resp).await;
    String::from_utf8(body.to_vec()).unwrap()
}
