//! HTTP transport layer
//!
//! Handlers for the `/product` resource and the public health probe.

pub mod handlers;
