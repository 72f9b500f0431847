pub(crate) mod query;
pub(crate) mod seed;
pub(crate) mod serve;
