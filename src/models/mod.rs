pub mod receipt;

pub use receipt::{Item, PointsResponse, ProcessReceiptResponse, Receipt};
