pub mod rental_service;
