//! integrated tests
pub mod toolkit;

mod catalogue;
mod chart;
mod coords;
