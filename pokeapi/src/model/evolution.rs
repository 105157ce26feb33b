use serde::{Deserialize, Serialize};

use super::resource::NamedResource;

/// `GET /evolution-chain/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: i32,
    pub chain: ChainLink,
}

/// A node of the evolution tree; branching species have several `evolves_to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// Species names in depth-first pre-order.
    pub fn species_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect(&mut names);
        names
    }

    fn collect<'a>(&'a self, names: &mut Vec<&'a str>) {
        names.push(&self.species.name);
        for next in &self.evolves_to {
            next.collect(names);
        }
    }
}
