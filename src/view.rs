use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

use crate::api::err::Error;

const LAYOUT: &str = "layout.html";

/// A page of the site, each one a body template extending the layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Problems,
    Submit,
    Submission,
    Submissions,
}

impl Page {
    const ALL: [Page; 4] = [Page::Problems, Page::Submit, Page::Submission, Page::Submissions];

    fn template(self) -> &'static str {
        match self {
            Page::Problems => "problems.html",
            Page::Submit => "submit.html",
            Page::Submission => "submission.html",
            Page::Submissions => "submissions.html",
        }
    }
}

/// Templates compiled once at startup
pub struct View {
    tera: Tera,
}

impl View {
    /// Compile every template under `dir`, failing if any page is missing or broken
    pub fn load(dir: &Path) -> Result<Self, tera::Error> {
        let glob = dir.join("**").join("*.html");
        let glob = glob
            .to_str()
            .ok_or_else(|| tera::Error::msg(format!("Invalid template path: {}", dir.display())))?;
        let tera = Tera::new(glob)?;

        let required = std::iter::once(LAYOUT).chain(Page::ALL.iter().map(|page| page.template()));
        for name in required {
            if !tera.get_template_names().any(|loaded| loaded == name) {
                return Err(tera::Error::template_not_found(name));
            }
        }

        Ok(Self { tera })
    }

    /// Render a whole page into memory
    pub fn render<T: Serialize>(&self, page: Page, data: &T) -> Result<String, Error> {
        let context = Context::from_serialize(data)?;
        Ok(self.tera.render(page.template(), &context)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use serde_json::json;
    use temp_dir::TempDir;

    use super::*;
    use crate::api::err::Reason;
    use crate::testing::{template_dir, view};

    #[test]
    fn problems_page_uses_layout() {
        let html = view()
            .render(
                Page::Problems,
                &json!({ "problems": [{ "id": 4, "title": "Join two tables", "description": "" }] }),
            )
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Join two tables"));
        assert!(html.contains(r#"href="/problems/4""#));
    }

    #[test]
    fn output_is_escaped() {
        let html = view()
            .render(
                Page::Submission,
                &json!({ "id": 1, "problem_title": "T", "solution": "<script>alert(1)</script>" }),
            )
            .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn payload_must_match_template() {
        let err = view().render(Page::Submission, &json!({ "id": 1 })).unwrap_err();
        assert_eq!(err.reason(), Reason::Render);

        // Only maps can become a template context
        let err = view().render(Page::Problems, &vec![1, 2, 3]).unwrap_err();
        assert_eq!(err.reason(), Reason::Render);
    }

    #[test]
    fn missing_page_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::copy(template_dir().join("layout.html"), dir.child("layout.html")).unwrap();
        fs::copy(template_dir().join("problems.html"), dir.child("problems.html")).unwrap();

        assert!(View::load(dir.path()).is_err());
    }

    #[test]
    fn broken_template_is_fatal() {
        let dir = TempDir::new().unwrap();
        for entry in fs::read_dir(template_dir()).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), dir.path().join(entry.file_name())).unwrap();
        }
        let broken = "{% extends \"layout.html\" %}{% block body %}{{ ";
        fs::write(dir.child("submit.html"), broken).unwrap();

        assert!(View::load(dir.path()).is_err());
    }

    #[test]
    fn empty_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        assert!(View::load(dir.path()).is_err());
    }
}
