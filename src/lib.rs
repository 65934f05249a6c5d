//! csvprobe - Feed random CSV samples to a target executable
//!
//! A thin test-harness driver: it picks one uniformly-random string from the
//! second column of a CSV dataset and invokes an external executable with
//! that string as its sole argument, reporting the captured output or the
//! failure. Strictly sequential, one sample and one invocation per run.

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod sampler;
pub mod util;
