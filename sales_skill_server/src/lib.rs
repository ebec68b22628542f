//! # Sales skill server
//! This crate hosts the Alexa skill endpoint. It is responsible for:
//! Listening for incoming Alexa requests.
//! Turning the request envelope into a [`sales_engine::SkillRequest`] and answering it from the store's recent orders.
//! Wrapping the answer in an Alexa response envelope.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/alexa`: The skill endpoint. Alexa POSTs a request envelope here and receives the spoken answer.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
