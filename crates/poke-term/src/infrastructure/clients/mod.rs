mod poke_api;

pub use poke_api::PokeApi;
