use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn store<'a>(&'a mut self) -> StoreFixtures<'a> {
        StoreFixtures { context: self }
    }
}

pub struct StoreFixtures<'a> {
    pub context: &'a mut TestContext,
}
