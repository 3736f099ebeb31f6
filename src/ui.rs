//! UI module for the timer card
//!
//! # Architecture
//!
//! - **Components** (`components`): stateless view functions with Message handling
//! - **Theme** (`theme`): fixed palette and widget style functions

pub mod components;
pub mod theme;
