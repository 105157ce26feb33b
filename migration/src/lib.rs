pub use sea_orm_migration::prelude::*;

mod m20251017_000001_roles;
mod m20251017_000002_users;
mod m20251017_000003_trainers;
mod m20251017_000004_team_pokemon;
mod m20251017_000005_search_history;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_roles::Migration),
            Box::new(m20251017_000002_users::Migration),
            Box::new(m20251017_000003_trainers::Migration),
            Box::new(m20251017_000004_team_pokemon::Migration),
            Box::new(m20251017_000005_search_history::Migration),
        ]
    }
}
