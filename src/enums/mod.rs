//! Tablas de enums
//!
//! Conjuntos cerrados de valores que acepta PPL MyAPI. Se usan para validar
//! las peticiones antes de enviarlas.

pub mod access_point_type;
pub mod country;
pub mod currency;
pub mod product;
pub mod wrap_code;

pub use access_point_type::AccessPointType;
pub use country::Country;
pub use currency::Currency;
pub use product::Product;
pub use wrap_code::WrapCode;
