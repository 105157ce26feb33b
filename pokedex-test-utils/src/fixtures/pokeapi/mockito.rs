//! Mock PokéAPI endpoints.
//!
//! Each helper registers a GET endpoint on the mock server that answers with
//! JSON and expects to be called exactly `expected_requests` times.

use mockito::{Matcher, Mock};
use pokeapi::model::{
    evolution::EvolutionChain, pokemon::Pokemon, resource::ResourceList, species::Species,
};

use crate::fixtures::pokeapi::{factory, PokeApiFixtures};

impl<'a> PokeApiFixtures<'a> {
    /// `/pokemon/{identifier}`
    pub fn create_pokemon_endpoint(
        &mut self,
        identifier: &str,
        pokemon: &Pokemon,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/pokemon/{}", identifier.to_lowercase());

        self.json_endpoint(&url, serde_json::to_string(pokemon).unwrap(), expected_requests)
    }

    /// `/pokemon-species/{id}/`
    pub fn create_species_endpoint(&mut self, species: &Species, expected_requests: usize) -> Mock {
        let url = factory::species_path(species.id);

        self.json_endpoint(&url, serde_json::to_string(species).unwrap(), expected_requests)
    }

    /// `/evolution-chain/{id}/`
    pub fn create_evolution_chain_endpoint(
        &mut self,
        chain: &EvolutionChain,
        expected_requests: usize,
    ) -> Mock {
        let url = factory::evolution_chain_path(chain.id);

        self.json_endpoint(&url, serde_json::to_string(chain).unwrap(), expected_requests)
    }

    /// `/pokemon?limit=...`
    pub fn create_pokemon_list_endpoint(
        &mut self,
        list: &ResourceList,
        expected_requests: usize,
    ) -> Mock {
        let body = serde_json::to_string(list).unwrap();

        self.setup
            .server
            .mock("GET", "/pokemon")
            .match_query(Matcher::Regex("limit=\\d+".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// `/type`
    pub fn create_type_list_endpoint(
        &mut self,
        list: &ResourceList,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint("/type", serde_json::to_string(list).unwrap(), expected_requests)
    }

    /// `/sprites/{id}.png` answering with raw PNG bytes.
    pub fn create_sprite_endpoint(&mut self, id: i32, body: &[u8], expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", factory::sprite_path(id).as_str())
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Any status without a body, e.g. 404 or 500.
    pub fn create_status_endpoint(&mut self, path: &str, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Pokémon, species and a single-stage evolution chain for one lookup.
    ///
    /// `identifier` is the path segment the client will request, name or id.
    pub fn create_lookup_endpoints(
        &mut self,
        identifier: &str,
        id: i32,
        name: &str,
        expected_requests: usize,
    ) -> Vec<Mock> {
        let base_url = self.setup.server.url();
        let pokemon = factory::mock_pokemon(&base_url, id, name);
        let species = factory::mock_species(&base_url, id, name);
        let chain = factory::mock_evolution_chain(id, &[&name.to_lowercase()]);

        vec![
            self.create_pokemon_endpoint(identifier, &pokemon, expected_requests),
            self.create_species_endpoint(&species, expected_requests),
            self.create_evolution_chain_endpoint(&chain, expected_requests),
        ]
    }

    fn json_endpoint(
        &mut self,
        path: &str,
        body: String,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
