pub mod chat;
pub mod job_flow;
pub mod location;
pub mod upload;
