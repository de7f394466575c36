// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! Client-side request handling. The [`RequestWrapper`] gives redirect and
//! retry logic a mutable view of a request, leaving the caller's request
//! untouched.

pub mod error;
pub mod wrapper;

pub use error::Error;
pub use wrapper::RequestWrapper;
