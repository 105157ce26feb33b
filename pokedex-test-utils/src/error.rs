use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    PokeApiError(#[from] pokeapi::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error("Fixture setup failed: {0}")]
    Fixture(String),
}
