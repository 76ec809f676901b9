//! Pinnacle Assessment - Leadership Self-Assessment
//!
//! Walks a leader through a fixed statement catalog rated on a traffic-light
//! scale, collects their own reflections, and drafts a Personal Action Plan
//! through a generative-AI service with a fixed fallback plan.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
