//! Lead enrichment: email discovery across a website's common pages, record
//! assembly, and the end-to-end prompt-to-leads run.

pub mod assemble;
pub mod email;
pub mod error;
pub mod pipeline;

pub use assemble::assemble;
pub use email::{candidate_urls, EmailResolver, CANDIDATE_PATHS};
pub use error::PipelineError;
pub use pipeline::{LeadPipeline, RunReport};

#[cfg(test)]
mod test_support;
