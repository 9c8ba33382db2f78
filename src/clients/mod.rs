//! Clientes - transporte SOAP hacia PPL MyAPI
//!
//! El servicio solo habla SOAP 1.1. `SoapTransport` abstrae la invocación de
//! una operación por nombre para poder sustituir la red en los tests.

pub mod envelope;
pub mod soap_transport;

pub use soap_transport::{HttpSoapTransport, SoapTransport, TransportError};
