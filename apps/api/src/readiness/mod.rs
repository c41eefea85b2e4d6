//! Job readiness: scoring, breakdown, roadmap and the analysis pipeline that
//! ties them to the remote inference service.

pub mod breakdown;
pub mod gaps;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod remote;
pub mod resources;
pub mod roadmap;
pub mod scorer;
pub mod store;
