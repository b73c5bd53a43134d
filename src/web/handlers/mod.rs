//! # Web API Request Handlers

pub mod health;
pub mod notifications;
pub mod site;
