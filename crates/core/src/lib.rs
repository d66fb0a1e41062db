//! Core library for reportforge
//!
//! This crate implements the **Functional Core** of the reportforge
//! application, following the Functional Core - Imperative Shell
//! architectural pattern.
//!
//! # Architecture Overview
//!
//! The reportforge project uses a multi-crate architecture to enforce
//! separation of concerns:
//!
//! - **`reportforge_core`** (this crate): Pure transformation functions with
//!   zero I/O
//! - **`pdf`**: Text normalization, layout, and PDF serialization
//! - **`reportforge`**: I/O operations and orchestration (the Imperative
//!   Shell): LLM calls, web search, SMTP delivery, CLI
//!
//! All functions in this crate are pure: same input, same output, no side
//! effects. They are tested with simple fixture data and no mocking.
//!
//! # Module Organization
//!
//! - [`crew`]: Agent/task descriptors for the research pipeline and the
//!   prompt assembly functions that turn them into model inputs.

pub mod crew;
