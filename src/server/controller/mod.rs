//! HTTP request handlers.
//!
//! Controllers extract and validate the path id and request body, call into the service
//! layer, and convert domain models into DTOs for the response.

pub mod dog;
pub mod param;
pub mod root;

#[cfg(test)]
mod test;
