//! The update run: look the record up, fetch the address, write it.

mod outcome;
mod update;


pub use outcome::UpdateOutcome;
pub use update::UpdateWorkflow;
