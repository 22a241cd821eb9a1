pub mod face_service;
pub mod person_group_service;
pub mod traits;
