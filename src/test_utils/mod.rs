#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{must_create_test_server, must_create_test_state, parse_json_body};
