//! Core library for uigen
//!
//! This crate implements the **Functional Core** of the uigen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The uigen project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`uigen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`uigen`**: LLM calls, the HTTP server and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`codegen`]: Prompts, transcript handling, fence stripping, file
//!   extraction and selection, and the SSE event model with its wire format
//!
//! # Example Usage
//!
//! ```rust
//! use uigen_core::codegen::{extract_files, select_files, FileSelection, SseEvent};
//!
//! // Agent reply as fixture data (no LLM required)
//! let reply = "```json\n{\"package.json\": \"{}\", \"src/App.tsx\": \"export default App;\"}\n```";
//!
//! let files = extract_files(reply).unwrap();
//! let events: Vec<SseEvent> = select_files(files, &FileSelection::All)
//!     .into_iter()
//!     .map(|(path, content)| SseEvent::file(path, content))
//!     .collect();
//!
//! assert_eq!(events.len(), 2);
//! assert_eq!(events[0], SseEvent::file("package.json", "{}"));
//! ```

pub mod codegen;
