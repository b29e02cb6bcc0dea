mod bubbles;
pub use bubbles::Bubbles;
