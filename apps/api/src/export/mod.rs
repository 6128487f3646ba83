// PDF export: template presets, line layout and pagination, page assembly.
// The layout/pagination split keeps the arithmetic testable without
// touching the PDF writer.

pub mod handlers;
pub mod layout;
pub mod pdf;
pub mod template;
