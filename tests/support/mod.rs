#![allow(dead_code)]

pub mod listing;
pub mod pipeline;
