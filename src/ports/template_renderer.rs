use crate::domain::AppError;
use crate::domain::prompt::TemplateContext;

/// Trait for rendering prompt templates.
///
/// Keeps the template engine (minijinja) out of the assembly logic.
/// Implementations must not HTML-escape output: prompt text is sent verbatim.
pub trait TemplateRenderer: Send + Sync {
    /// Render a template string against the generation context.
    ///
    /// # Arguments
    /// * `template_name` - Prompt name, used in error reports.
    /// * `template` - The template source.
    /// * `context` - Values visible to the template.
    fn render(
        &self,
        template_name: &str,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, AppError>;
}
