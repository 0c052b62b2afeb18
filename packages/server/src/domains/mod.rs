// Business domains
pub mod assistant;
pub mod documents;
pub mod session;
