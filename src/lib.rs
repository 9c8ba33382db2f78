//! Cliente para PPL MyAPI
//!
//! Construye órdenes, paquetes y órdenes de recogida validadas, las envía al
//! servicio SOAP de PPL y devuelve resultados tipados. El token de
//! autenticación se cachea entre llamadas.

pub mod cache;
pub mod clients;
pub mod config;
pub mod dto;
pub mod enums;
pub mod models;
pub mod services;
pub mod utils;

pub use config::PplConfig;
pub use services::{CityRoutingQuery, Credentials, PackageQuery, ParcelShopQuery, PplClient};
pub use utils::{PplError, PplResult};
