//! Sheet writer adapters.

mod memory;
mod text;

pub use memory::MemorySheetWriter;
pub use text::TextSheetWriter;
