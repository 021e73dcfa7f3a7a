// Terminal presentation of clustering results.

pub mod terminal;
