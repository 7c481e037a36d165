//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope for the resource routes
/// (projects, profiles, billing).
///
/// The generation endpoints answer with their own top-level keys
/// (`blueprint`, `pitchDeck`, ...) instead.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
