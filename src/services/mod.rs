//! Servicios - cliente de PPL MyAPI
//!
//! `PplClient` es la capa de traducción entre el dominio y las operaciones
//! remotas. `mapping` contiene las funciones entidad → registro de petición.

pub mod mapping;
pub mod ppl_client;
pub mod queries;

pub use ppl_client::{Credentials, PplClient, HEALTHY_STATUS};
pub use queries::{CityRoutingQuery, PackageQuery, ParcelShopQuery};
