mod json_file_contact_repository;
mod traits;

pub use json_file_contact_repository::JsonFileContactRepository;
pub use traits::ContactRepository;
