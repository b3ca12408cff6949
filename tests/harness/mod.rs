#![allow(dead_code, unused_imports)]

pub(crate) mod stub_host;
pub(crate) mod test_context;

pub(crate) use stub_host::StubHost;
pub(crate) use test_context::TestContext;
