//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;
