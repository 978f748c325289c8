// Shared by several test binaries; not every binary uses every helper
#![allow(dead_code)]

pub mod factories;
pub mod helpers;
