use minijinja::Environment;
use serde::Serialize;

const INDEX_TEMPLATE: &str = "index.html";

/// Everything the page template can show.
#[derive(Debug, Default, Serialize)]
pub struct PageView {
    /// Echo of the submitted text
    pub code: String,
    /// Bug report lines, or the syntax diagnostic lines
    pub issues: Option<Vec<String>>,
    pub fixed_code: Option<String>,
    pub error: Option<String>,
    pub warning: Option<String>,
    /// Turns already stored for this browser session
    pub turns: usize,
}

pub fn templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(env)
}

pub fn render(env: &Environment<'static>, view: &PageView) -> Result<String, minijinja::Error> {
    env.get_template(INDEX_TEMPLATE)?.render(view)
}
