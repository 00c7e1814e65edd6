//! Core contracts for the cask mobile app
//!
//! This crate holds the shapes shared with the backend: the success/error
//! response envelope and the route-not-found body.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;

pub use api::{
    route_not_found, ApiError, ApiResponse, NotFoundResponse, RouteNotFound, RouteTable,
    AVAILABLE_ROUTES, NOT_FOUND_STATUS,
};
