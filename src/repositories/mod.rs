pub mod contact_repository;
