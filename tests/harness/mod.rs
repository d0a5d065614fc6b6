#![allow(dead_code)]

pub mod manual_clock;
pub mod recording_notifier;
pub mod scripted_feed;
