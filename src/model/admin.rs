use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::user::Role;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub trainer_name: Option<String>,
    pub total_searches: i64,
    pub total_pokemon: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetailsDto {
    pub user: AdminUserDto,
    pub trainer_age: Option<i32>,
    pub trainer_region: Option<String>,
    pub recent_searches: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentUserDto {
    pub username: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountDto {
    pub name: String,
    pub count: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatsDto {
    pub total_users: i64,
    pub total_trainers: i64,
    pub total_pokemon: i64,
    pub total_searches: i64,
    pub users_by_role: BTreeMap<String, i64>,
    /// Searches per day over the last seven days
    pub searches_by_day: Vec<(NaiveDate, i64)>,
    pub recent_users: Vec<RecentUserDto>,
    pub popular_pokemon: Vec<CountDto>,
    pub popular_regions: Vec<CountDto>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Search,
    TeamAddition,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLogDto {
    pub kind: ActivityKind,
    pub username: String,
    pub description: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLogDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub search_term: String,
    pub searched_at: NaiveDateTime,
}
