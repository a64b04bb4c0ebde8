//! Business logic services
//!
//! Services sit between the HTTP handlers and the shared BMI core.

pub mod bmi;

pub use bmi::BmiService;
