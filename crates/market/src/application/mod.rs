//! Engine actor, its handle and the intake trigger

mod command;
mod engine;
mod handle;
mod scheduler;

pub use command::MarketCommand;
pub use engine::{EnginePorts, MarketEngine, MarketEngineConfig};
pub use handle::MarketHandle;
pub use scheduler::IntakeScheduler;
