pub mod keys;
pub mod schedule;
pub mod scroll;
pub mod storage;
pub mod time;
