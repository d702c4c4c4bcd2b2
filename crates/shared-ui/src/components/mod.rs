// Standalone components (no primitives)
pub mod button;
pub mod card;
pub mod input;

// Primitive wrappers
pub mod label;

// Composite widgets
pub mod file_upload;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use file_upload::*;
pub use input::*;
pub use label::*;
