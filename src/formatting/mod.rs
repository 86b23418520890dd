// Formatting and highlighting of boundary condition strings

pub mod formatter;
mod renderer;
mod syntax;
mod terminal;

// Re-export all public symbols
pub use renderer::render;
pub use syntax::*;
pub use terminal::Terminal;
