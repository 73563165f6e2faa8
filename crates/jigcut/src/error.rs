use crate::edge::Orientation;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid size {rows}x{cols} is outside the supported range 2..=20")]
    InvalidGridSize { rows: u32, cols: u32 },

    #[error("image size {width}x{height} must be finite and positive")]
    InvalidImageSize { width: f64, height: f64 },

    #[error("parameter `{name}` = {value} is outside its range {min}..={max}")]
    InvalidParam {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{orientation} edge grid has no slot ({row}, {col})")]
    EdgeGridMismatch {
        orientation: Orientation,
        row: usize,
        col: usize,
    },

    #[error("unknown cut strategy: {tag}")]
    UnknownStrategy { tag: String },

    #[error("invalid cut parameters JSON: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
