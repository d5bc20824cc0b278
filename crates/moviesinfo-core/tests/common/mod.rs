#![allow(dead_code)]

pub mod movie_server;
