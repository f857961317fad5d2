//! 투자 회수/현재가치 계산.

pub mod roi;

pub use roi::{compute_roi, roi_percent, RoiResult};
