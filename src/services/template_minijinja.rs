use std::sync::OnceLock;

use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};

use crate::domain::AppError;
use crate::domain::prompt::TemplateContext;
use crate::ports::TemplateRenderer;

/// Template renderer using Minijinja.
///
/// Undefined values are errors and output is never auto-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template_name: &str,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_auto_escape_callback(|_| AutoEscape::None);
            env
        });

        env.render_named_str(template_name, template, context)
            .map_err(|err| template_error(template_name, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn template_error(template_name: &str, err: minijinja::Error) -> AppError {
    let template = template_name.to_string();
    let reason = err.to_string();
    match err.kind() {
        ErrorKind::SyntaxError => AppError::TemplateSyntax { template, reason },
        _ => AppError::TemplateRender { template, reason },
    }
}
