//! SafeDocGen blog: a server-rendered listing page over a read-only post source.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
