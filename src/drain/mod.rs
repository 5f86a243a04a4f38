// @file mod.rs

mod discard;
mod report;

#[cfg(test)]
mod mock;

pub(crate) use self::discard::DiscardDrain;
pub(crate) use self::report::{LogReport, Report};


// end of mod.rs
