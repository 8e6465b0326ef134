//! The ranking pipeline: PDF text extraction → sentence embedding →
//! cosine similarity → LLM-generated HR critique.
//!
//! Steps are strictly sequential per request; the only shared state is the
//! embedding model handle, which is read-only after load.

pub mod embedding;
pub mod extract;
pub mod handlers;
pub mod similarity;
