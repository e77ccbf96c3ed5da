//! Highway route planner CLI library.
//!
//! Holds the output formatting shared by the `roadplanner` binary's
//! subcommands.

pub mod output;
