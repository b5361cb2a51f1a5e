//! Wire types shared by the HTTP ingress and its callers.

pub mod api;
