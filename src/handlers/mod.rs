pub mod apps;
pub mod databases;
pub mod helpers;
pub mod public;
pub mod session;
