pub mod app;
pub mod canvas;
pub mod runner;
pub mod session;
pub mod theme;

pub use eframe;
pub use eframe::egui;

// Re-exports
pub use app::CalcvisApp;
pub use runner::run_native;
pub use session::{Reply, Session, BLANK_INPUT_MESSAGE, FAILED_MESSAGE};
