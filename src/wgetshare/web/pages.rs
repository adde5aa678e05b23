//! # HTML Pages
//!
//! Page layout lives in `templates/*.html`, embedded at compile time with
//! `include_str!()` and rendered through minijinja. Every template name ends in
//! `.html`, so minijinja escapes interpolated values: snippet bodies and
//! filenames land in the page as text, never as markup.
//!
//! [`Pages::share`] matches on every [`ViewState`] variant; adding a state
//! means deciding how it renders.

use crate::commands::links::RAW_PREFIX;
use crate::commands::view::ViewState;
use crate::error::Result;
use crate::web::routes::PUBLISH_PATH;
use chrono::{DateTime, Utc};
use minijinja::{context, Environment};

const BASE_TEMPLATE: &str = include_str!("templates/base.html");
const EDITOR_TEMPLATE: &str = include_str!("templates/editor.html");
const SHARE_TEMPLATE: &str = include_str!("templates/share.html");
const ERROR_TEMPLATE: &str = include_str!("templates/error.html");
const LOADING_TEMPLATE: &str = include_str!("templates/loading.html");

pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template("editor.html", EDITOR_TEMPLATE)?;
        env.add_template("share.html", SHARE_TEMPLATE)?;
        env.add_template("error.html", ERROR_TEMPLATE)?;
        env.add_template("loading.html", LOADING_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn editor(&self) -> Result<String> {
        let tmpl = self.env.get_template("editor.html")?;
        Ok(tmpl.render(context! { publish_path => PUBLISH_PATH })?)
    }

    /// Renders the viewer page for `state`. `id` feeds the raw link.
    pub fn share(&self, state: &ViewState, id: Option<&str>) -> Result<String> {
        match state {
            ViewState::Loading => {
                let tmpl = self.env.get_template("loading.html")?;
                Ok(tmpl.render(context! {})?)
            }
            ViewState::Found {
                code,
                filename,
                created_at,
            } => {
                let tmpl = self.env.get_template("share.html")?;
                let raw_path = format!("{}{}", RAW_PREFIX, id.unwrap_or_default());
                Ok(tmpl.render(context! {
                    code => code,
                    filename => filename,
                    shared_ago => format_time_ago(*created_at),
                    raw_path => raw_path,
                })?)
            }
            ViewState::NotFound | ViewState::Error(_) => {
                self.error(state.error_message().unwrap_or_default())
            }
        }
    }

    pub fn error(&self, message: &str) -> Result<String> {
        let tmpl = self.env.get_template("error.html")?;
        Ok(tmpl.render(context! { message => message })?)
    }
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
