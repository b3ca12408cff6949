mod host;
mod template_renderer;

pub use host::{BackendResponse, ConnectionProfile, HostError, HostPort};
pub use template_renderer::TemplateRenderer;
