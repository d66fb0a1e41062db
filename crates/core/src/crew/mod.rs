//! Descriptors and prompt assembly for the research crew.
//!
//! A crew is a fixed sequence of (agent, task) pairs executed in order, each
//! task receiving the previous task's output as context. The descriptors are
//! plain data; turning them into model calls is the shell's job.

pub mod prompt;
pub mod roster;
pub mod types;

pub use prompt::{build_preamble, build_task_prompt, interpolate, report_header};
pub use roster::{agents, tasks};
pub use types::{AgentSpec, TaskSpec};
