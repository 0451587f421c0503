use crate::config::Config;
use instagram_client::{GetClient, Ig};

use implementation::Impl;
use std::sync::Arc;

#[derive(Clone)]
pub struct App {
    pub config: Arc<Config>,
    pub client: Impl<Ig>,
}

// Import the client "entrait module"
impl GetClient for Impl<App> {
    type Target = Impl<Ig>;

    fn get_client(&self) -> &Self::Target {
        &self.client
    }
}
