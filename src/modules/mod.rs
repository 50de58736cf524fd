pub mod document;
pub mod provider;
pub mod screamsheet;
pub mod summary;
