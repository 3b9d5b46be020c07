// Skill extraction: taxonomy table, compiled matchers, the keyword pipeline,
// and the pluggable backends the HTTP API dispatches to.
// The pipeline itself performs no I/O; LLM and remote calls live in backends.

pub mod backends;
pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod taxonomy;
