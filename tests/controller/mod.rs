//! Controller tests: the functions the views call, checked through their
//! `Reply` messages and `ErrorDto` kinds.

mod admin;
mod pokemon;
mod profile;
mod team;
