//! Repository Layer
//!
//! Data access abstractions and their JSON file implementations.

mod json_file;
mod reservation_repo;
mod traits;
mod wish_repo;


pub use json_file::JsonFile;
pub use reservation_repo::ReservationRepository;
pub use traits::Repository;
pub use wish_repo::WishRepository;
