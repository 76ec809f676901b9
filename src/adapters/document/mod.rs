//! Document adapters - report rendering.

mod template_renderer;

pub use template_renderer::{TemplateReportRenderer, FOOTER, PREAMBLE, SUBTITLE, TITLE};
