//! Registros de petición de PPL MyAPI
//!
//! Cada operación remota tiene su propio registro tipado. Los nombres de los
//! campos son los del contrato SOAP; los opcionales `None` no se envían.

use rust_decimal::Decimal;
use serde::Serialize;

/// `Auth { AuthToken }` que acompaña a casi todas las operaciones
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthToken {
    pub auth_token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub auth: LoginAuth,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cust_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetParcelShopsRequest {
    pub filter: ParcelShopFilter,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParcelShopFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_point_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_card_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCitiesRoutingRequest {
    pub auth: AuthToken,
    pub filter: CityRoutingFilter,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityRoutingFilter {
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPackagesRequest {
    pub auth: AuthToken,
    pub filter: PackageFilter,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cust_refs: Option<StringList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_numbers: Option<StringList>,
}

/// Array de strings serializado como elementos `<string>` repetidos
#[derive(Debug, Clone, Serialize)]
pub struct StringList {
    #[serde(rename = "string")]
    pub items: Vec<String>,
}

impl StringList {
    /// `None` cuando no hay elementos, para omitir el campo
    pub fn non_empty(items: &[String]) -> Option<Self> {
        (!items.is_empty()).then(|| Self {
            items: items.to_vec(),
        })
    }
}

/// Dirección tal y como la espera el servicio (remitente o destinatario)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressIn {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub street: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOrdersRequest {
    pub auth: AuthToken,
    pub orders: OrderList,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderList {
    #[serde(rename = "MyApiOrderIn")]
    pub items: Vec<OrderIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderIn {
    pub count_pack: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cust_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub ord_ref_id: String,
    pub pack_product_type: u16,
    pub send_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_time_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_time_to: Option<String>,
    pub sender: AddressIn,
    pub recipient: AddressIn,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePackagesRequest {
    pub auth: AuthToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_unique_import_id: Option<String>,
    pub packages: PackageList,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageList {
    #[serde(rename = "MyApiPackageIn")]
    pub items: Vec<PackageIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageIn {
    pub pack_number: String,
    pub pack_product_type: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<AddressIn>,
    pub recipient: AddressIn,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_delivery: Option<SpecDeliveryIn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_info: Option<PaymentInfoIn>,
    pub packages_ext_nums: ExternalNumberList,
    pub package_services: PackageServiceList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_set: Option<PackageSetIn>,
    /// Sin flags se omite el elemento entero, no se manda una lista vacía
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<FlagList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pallet_info: Option<PalletInfoIn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_package_info: Option<WeightedPackageInfoIn>,
    pub addresses_for_services: AddressForServiceList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depo_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecDeliveryIn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel_shop_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_deliv_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_deliv_time_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_deliv_time_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_take_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_take_time_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_take_time_to: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentInfoIn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cod_var_sym: Option<String>,
    #[serde(rename = "IBAN", skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insur_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insur_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExternalNumberList {
    #[serde(rename = "MyApiPackageExtNum")]
    pub items: Vec<ExternalNumberIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExternalNumberIn {
    pub code: String,
    pub ext_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageServiceList {
    #[serde(rename = "MyApiPackageInServices")]
    pub items: Vec<PackageServiceIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageServiceIn {
    pub svc_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageSetIn {
    pub master_pack_number: String,
    pub package_in_set_nr: u32,
    pub packages_in_set: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlagList {
    #[serde(rename = "MyApiFlag")]
    pub items: Vec<FlagIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlagIn {
    pub code: String,
    pub value: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PalletInfoIn {
    pub collies: ColliList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manipulation_type: Option<u32>,
    #[serde(rename = "PEURCount", skip_serializing_if = "Option::is_none")]
    pub peur_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_up_cargo_type_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColliList {
    #[serde(rename = "MyApiPackageInColli")]
    pub items: Vec<ColliIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColliIn {
    pub colli_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_code: Option<u16>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeightedPackageInfoIn {
    pub weight: Decimal,
    pub routes: RouteList,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteList {
    #[serde(rename = "Route")]
    pub items: Vec<RouteIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteIn {
    pub route_type: String,
    pub route_code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddressForServiceList {
    #[serde(rename = "AddressForService")]
    pub items: Vec<AddressForServiceIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressForServiceIn {
    pub service_address_type: String,
    pub recipient: AddressIn,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<FlagList>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePickupOrdersRequest {
    pub auth: AuthToken,
    pub orders: PickupOrderList,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickupOrderList {
    #[serde(rename = "MyApiPickupOrderIn")]
    pub items: Vec<PickupOrderIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PickupOrderIn {
    pub ord_ref_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cust_ref: Option<String>,
    pub count_pack: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub send_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_time_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_time_to: Option<String>,
    pub sender: AddressIn,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetNumberRangeRequest {
    pub auth: AuthToken,
    pub number_ranges: NumberRangeRequestList,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumberRangeRequestList {
    #[serde(rename = "NumberRangeRequest")]
    pub items: Vec<NumberRangeRequestIn>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NumberRangeRequestIn {
    pub pack_product_type: u16,
    pub quantity: u32,
}
