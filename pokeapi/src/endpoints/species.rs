use crate::{error::Error, model::species::Species, Client};

pub struct SpeciesEndpoints<'a> {
    client: &'a Client,
}

impl<'a> SpeciesEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch a species by the absolute URL referenced from a Pokémon record.
    pub async fn get_species(&self, url: &str) -> Result<Species, Error> {
        self.client.get_json("/pokemon-species", url).await
    }
}
