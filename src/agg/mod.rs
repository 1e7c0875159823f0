pub(crate) mod max;

pub(crate) use max::MaxAccumulator;
