//! Metro route finder server.
//!
//! Draws a small metro network on a map and answers: "what is the shortest
//! way from this station to that one?"

pub mod config;
pub mod domain;
pub mod graph;
pub mod network;
pub mod planner;
pub mod web;
