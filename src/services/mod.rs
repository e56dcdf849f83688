// MangaMark services
// Services provide the sync machinery: listing parsing, fetch coordination,
// and the network-backed sync driver.

pub mod fetch;
pub mod listing_parser;
pub mod sync_coordinator;
pub mod sync_service;
