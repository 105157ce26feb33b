mod add_pokemon;
mod remove_pokemon;
mod search_team;
mod update_nickname;
