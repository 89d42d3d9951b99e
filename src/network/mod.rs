//! 出站 HTTP：镜像请求的抽象与基于 reqwest 的实现。

pub mod client;

pub use client::{ClientOptions, FetchError, HttpMirrorClient, MirrorClient};
