//! Modelos del dominio
//!
//! Entidades que construye el llamador (órdenes, paquetes, recogidas) y los
//! objetos de valor anidados. Todas validan sus campos al construirse y se
//! exponen de solo lectura a la capa de traducción.
//!
//! Las entidades no implementan `Deserialize`: el único camino para crearlas
//! pasa por sus constructores validados.
//!
//! ```compile_fail
//! let _ = serde_json::from_value::<ppl_myapi::models::Order>(serde_json::json!({}));
//! ```
//!
//! ```compile_fail
//! let _ = serde_json::from_value::<ppl_myapi::models::Package>(serde_json::json!({}));
//! ```
//!
//! ```compile_fail
//! let _ = serde_json::from_value::<ppl_myapi::models::PickupOrder>(serde_json::json!({}));
//! ```

pub mod address;
pub mod address_for_service;
pub mod flag;
pub mod order;
pub mod package;
pub mod package_extras;
pub mod pallet_info;
pub mod payment_info;
pub mod pickup_order;
pub mod special_delivery;
pub mod weighted_package_info;

pub use address::{Address, AddressLimits, Recipient, Sender, RECIPIENT_LIMITS, SENDER_LIMITS};
pub use address_for_service::AddressForService;
pub use flag::Flag;
pub use order::{Order, SendTimeWindow};
pub use package::Package;
pub use package_extras::{ExternalNumber, PackageService, PackageSet};
pub use pallet_info::{Colli, PalletInfo};
pub use payment_info::{CashOnDelivery, Insurance, PaymentInfo};
pub use pickup_order::PickupOrder;
pub use special_delivery::SpecialDelivery;
pub use weighted_package_info::{Route, WeightedPackageInfo};
