// Copyright (C) 2023 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

//! This crate contains the HTTP message model used by the client: methods,
//! versions, header fields, URI references, request-lines and the original
//! request shapes a client pipeline starts from.

pub mod abnf;
pub mod error;
pub mod header_map;
pub mod header_name;
pub mod header_value;
pub mod method;
pub mod params;
pub mod request;
pub mod request_line;
pub mod syntax;
pub mod uri;
pub mod version;

pub use error::*;
pub use header_map::*;
pub use header_name::*;
pub use header_value::*;
pub use method::*;
pub use params::*;
pub use request::*;
pub use request_line::*;
pub use uri::*;
pub use version::*;
