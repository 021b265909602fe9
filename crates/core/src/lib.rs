//! Domain rules shared by the ideaboard store and HTTP layers.
//!
//! Nothing in here touches the database or the network: slug generation,
//! the category vocabulary, idea/comment field rules, and the domain error
//! type all live here so both `ideaboard-db` and `ideaboard-api` agree on them.

pub mod categories;
pub mod error;
pub mod idea;
pub mod naming;
pub mod types;
