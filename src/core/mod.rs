pub mod assembler;
pub mod batch;
pub mod estimator;
pub mod etl;
pub mod extended;
pub mod geo;
pub mod image;
pub mod pipeline;
pub mod scoring;
pub mod slug;

pub use crate::domain::model::{EnrichmentResult, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
