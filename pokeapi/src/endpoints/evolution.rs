use crate::{error::Error, model::evolution::EvolutionChain, Client};

pub struct EvolutionEndpoints<'a> {
    client: &'a Client,
}

impl<'a> EvolutionEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch an evolution chain by the absolute URL referenced from a species.
    pub async fn get_evolution_chain(&self, url: &str) -> Result<EvolutionChain, Error> {
        self.client.get_json("/evolution-chain", url).await
    }
}
