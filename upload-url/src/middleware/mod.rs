/// CORS preflight handling
pub mod cors;

pub use cors::answer_preflight;
