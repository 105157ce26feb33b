use crate::{
    error::Error,
    model::{pokemon::Pokemon, resource::ResourceList},
    Client,
};

pub struct PokemonEndpoints<'a> {
    client: &'a Client,
}

impl<'a> PokemonEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch a Pokémon by name or numeric id. The identifier is lower-cased.
    pub async fn get_pokemon(&self, identifier: &str) -> Result<Pokemon, Error> {
        let endpoint = format!("/pokemon/{}", identifier.trim().to_lowercase());
        let url = self.client.url(&endpoint);

        self.client.get_json(&endpoint, &url).await
    }

    /// Fetch the first `limit` entries of the Pokémon index.
    pub async fn get_pokemon_list(&self, limit: u32) -> Result<ResourceList, Error> {
        let endpoint = format!("/pokemon?limit={limit}");
        let url = self.client.url(&endpoint);

        self.client.get_json(&endpoint, &url).await
    }
}
