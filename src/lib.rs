//! readstash: the extraction and summarization core of a "read later"
//! service.
//!
//! Data flow: URL -> [`fetcher`] -> raw page text -> [`extractor`] ->
//! `(title, body, language)` -> [`summarizer`] / [`categorizer`] ->
//! [`pipeline::SaveReady`] -> a [`store::RecordStore`] collaborator.

pub mod cache;
pub mod categorizer;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod store;
pub mod summarizer;

pub use pipeline::{Pipeline, PipelineError, SaveReady};
