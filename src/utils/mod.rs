pub(crate) mod timer;

pub(crate) use timer::{ElapsedTimer, timed};
