// Text measurement for the template renderer. The renderer pre-wraps long
// text (summary, bullets) into lines so the produced document tree is
// layout-ready for any rasterizer.

pub mod metrics;

pub use metrics::{default_page_config, wrap_text, FontFamily, FontMetrics, PageConfig};
