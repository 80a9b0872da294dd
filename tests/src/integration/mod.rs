//! Integration tests over the public `sha1_bloom` API

pub mod concurrency;
