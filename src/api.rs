use actix_web::{
    http::header::ContentType,
    web::{FormConfig, PathConfig, ServiceConfig},
    HttpResponse,
};

pub mod problems;
pub mod submissions;

pub mod err;

use err::{Error, Reason};

/// Register every route together with the extractor configs they rely on
pub fn configure(cfg: &mut ServiceConfig) {
    // Malformed ids and form bodies end up on the same error page as everything else
    let path_cfg = PathConfig::default()
        .error_handler(|err, _| Error::new(Reason::InvalidArgument, err.to_string()).into());
    let form_cfg = FormConfig::default()
        .error_handler(|err, _| Error::new(Reason::InvalidArgument, err.to_string()).into());

    cfg.app_data(path_cfg)
        .app_data(form_cfg)
        .service(problems::get_problems)
        .service(problems::get_problem)
        .service(problems::submit)
        .service(submissions::get_submission)
        .service(submissions::get_submissions);
}

fn html(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}
