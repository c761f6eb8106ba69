//! League state and the market operations on it

mod auctions;
mod clause;
mod entity_store;
mod intake;
mod league;
mod offers;
mod transfer;
mod valuation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use entity_store::EntityStore;
pub use league::League;
