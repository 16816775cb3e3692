//! Console front end: dispatches script commands to the manager and renders
//! the results as text or JSON.

pub mod report;
pub mod session;
