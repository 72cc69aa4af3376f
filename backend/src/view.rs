//! Page rendering
//!
//! The form template is compiled into the binary and rendered with minijinja.
//! `.html` templates are auto-escaped.

use std::sync::Arc;

use minijinja::{context, Environment};
use serde::Serialize;
use shared::Feature;

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

/// One input of the form
#[derive(Debug, Serialize)]
struct FormField {
    name: &'static str,
    label: String,
}

fn form_fields() -> Vec<FormField> {
    Feature::ALL
        .iter()
        .map(|feature| FormField {
            name: feature.form_field(),
            label: feature.to_string(),
        })
        .collect()
}

/// Template environment shared by all handlers
#[derive(Clone)]
pub struct Views {
    env: Arc<Environment<'static>>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { env: Arc::new(env) })
    }

    /// Render the form page, with the result area filled when `result` is set
    pub fn render_index(&self, result: Option<&str>) -> Result<String, minijinja::Error> {
        let template = self.env.get_template(INDEX_TEMPLATE_NAME)?;
        template.render(context! {
            fields => form_fields(),
            result => result,
        })
    }
}
