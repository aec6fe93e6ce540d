use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
    #[error("invalid domain [{0}, {1}]")]
    InvalidDomain(f64, f64),

    #[error("invalid range [{0}, {1}]")]
    InvalidRange(f64, f64),

    #[error("viewport {width}x{height} has no drawable area")]
    EmptyViewport { width: f64, height: f64 },
}
