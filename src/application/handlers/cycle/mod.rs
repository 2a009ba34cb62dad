//! Cycle command and query handlers.
//!
//! Handlers for schedule generation, the beneficiary draw, cycle
//! completion, administrative patches and the schedule query.

// Command handlers
mod complete_cycle;
mod draw_beneficiaries;
mod initialize_schedule;
mod update_cycle;

// Query handlers
mod list_cycles;

pub use complete_cycle::{
    CompleteCycleCommand, CompleteCycleError, CompleteCycleHandler, CompleteCycleResult,
};
pub use draw_beneficiaries::{
    DrawBeneficiariesCommand, DrawBeneficiariesError, DrawBeneficiariesHandler,
    DrawBeneficiariesResult,
};
pub use initialize_schedule::{
    InitializeScheduleCommand, InitializeScheduleError, InitializeScheduleHandler,
    InitializeScheduleResult,
};
pub use update_cycle::{
    UpdateCycleCommand, UpdateCycleError, UpdateCycleHandler, UpdateCycleResult,
};

// Query handlers
pub use list_cycles::ListCyclesHandler;
