//! Registros de respuesta de PPL MyAPI
//!
//! El servicio puede omitir por completo la lista de resultados cuando no hay
//! coincidencias, y el decodificador XML no distingue una lista de un solo
//! elemento de un objeto suelto. Por eso las listas usan `OneOrMany` y caen a
//! vacío por defecto. Los campos numéricos aceptan número o texto.

use serde::{Deserialize, Serialize};
use serde_with::formats::PreferMany;
use serde_with::{serde_as, DisplayFromStr, OneOrMany, PickFirst};

/// `ResultData` de cualquier operación de consulta
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultEnvelope<T> {
    pub result_data: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IsHealtlyResponse {
    pub is_healtly_result: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionResponse {
    pub version_result: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResponse {
    pub login_result: Option<LoginResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResult {
    pub auth_token: Option<String>,
}

impl LoginResponse {
    pub fn into_token(self) -> Option<String> {
        self.login_result
            .and_then(|result| result.auth_token)
            .filter(|token| !token.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// GetParcelShops
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetParcelShopsResponse {
    pub get_parcel_shops_result: Option<ResultEnvelope<ParcelShopData>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParcelShopData {
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default, rename = "MyApiParcelShop")]
    pub items: Vec<ParcelShop>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParcelShop {
    pub code: Option<String>,
    pub access_point_type: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub active_card_payment: Option<bool>,
    pub name: Option<String>,
    pub name2: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "GPSLocation")]
    pub gps_location: Option<GpsLocation>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GpsLocation {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub latitude: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub longitude: Option<f64>,
}

impl GetParcelShopsResponse {
    pub fn into_items(self) -> Vec<ParcelShop> {
        self.get_parcel_shops_result
            .and_then(|result| result.result_data)
            .map(|data| data.items)
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// GetCitiesRouting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCitiesRoutingResponse {
    pub get_cities_routing_result: Option<ResultEnvelope<CityRoutingData>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityRoutingData {
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default, rename = "MyApiCityRouting")]
    pub items: Vec<CityRouting>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CityRouting {
    pub city: Option<String>,
    pub country: Option<String>,
    pub depo_code: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub highlighted: Option<bool>,
    pub region: Option<String>,
    pub route_code: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
}

impl GetCitiesRoutingResponse {
    pub fn into_items(self) -> Vec<CityRouting> {
        self.get_cities_routing_result
            .and_then(|result| result.result_data)
            .map(|data| data.items)
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// GetPackages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPackagesResponse {
    pub get_packages_result: Option<ResultEnvelope<PackageOutData>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageOutData {
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default, rename = "MyApiPackageOut")]
    pub items: Vec<PackageOut>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageOut {
    pub pack_number: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub pack_product_type: Option<u16>,
    pub cust_ref: Option<String>,
    pub depo_code: Option<String>,
    pub note: Option<String>,
    pub recipient: Option<AddressOut>,
    pub sender: Option<AddressOut>,
    pub package_statuses: Option<PackageStatusList>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageStatusList {
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default, rename = "MyApiPackageOutStatus")]
    pub items: Vec<PackageStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressOut {
    pub city: Option<String>,
    pub contact: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub name2: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageStatus {
    #[serde(rename = "StaDate")]
    pub date: Option<String>,
    #[serde(rename = "StaID")]
    pub status_id: Option<String>,
    #[serde(rename = "StatusName")]
    pub status_name: Option<String>,
}

impl GetPackagesResponse {
    pub fn into_items(self) -> Vec<PackageOut> {
        self.get_packages_result
            .and_then(|result| result.result_data)
            .map(|data| data.items)
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// CreatePackages / CreatePickupOrders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePackagesResponse {
    pub create_packages_result: Option<ResultEnvelope<ItemResultData>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePickupOrdersResponse {
    pub create_pickup_orders_result: Option<ResultEnvelope<ItemResultData>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemResultData {
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default, rename = "ItemResult")]
    pub items: Vec<ItemResult>,
}

/// Resultado por elemento de una creación masiva
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemResult {
    pub code: Option<String>,
    pub item_key: Option<String>,
    pub message: Option<String>,
}

impl CreatePackagesResponse {
    pub fn into_items(self) -> Vec<ItemResult> {
        self.create_packages_result
            .and_then(|result| result.result_data)
            .map(|data| data.items)
            .unwrap_or_default()
    }
}

impl CreatePickupOrdersResponse {
    pub fn into_items(self) -> Vec<ItemResult> {
        self.create_pickup_orders_result
            .and_then(|result| result.result_data)
            .map(|data| data.items)
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// GetNumberRange
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetNumberRangeResponse {
    pub get_number_range_result: Option<ResultEnvelope<NumberRangeData>>,
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NumberRangeData {
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default, rename = "NumberRange")]
    pub items: Vec<NumberRange>,
}

/// Rango de números de paquete reservado para un producto
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NumberRange {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub pack_product_type: Option<u16>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub quantity: Option<u32>,
    #[serde(rename = "From")]
    pub from: Option<String>,
    #[serde(rename = "To")]
    pub to: Option<String>,
}

impl GetNumberRangeResponse {
    pub fn into_items(self) -> Vec<NumberRange> {
        self.get_number_range_result
            .and_then(|result| result.result_data)
            .map(|data| data.items)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_result_data_is_empty() {
        let response: GetParcelShopsResponse =
            serde_json::from_value(json!({ "GetParcelShopsResult": { "ResultData": null } })).unwrap();
        assert!(response.into_items().is_empty());

        let response: GetParcelShopsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_items().is_empty());
    }

    #[test]
    fn test_single_item_is_a_list_of_one() {
        let response: GetNumberRangeResponse = serde_json::from_value(json!({
            "GetNumberRangeResult": { "ResultData": { "NumberRange": {
                "PackProductType": "13", "Quantity": "5", "From": "40950000100", "To": "40950000104"
            } } }
        }))
        .unwrap();

        let ranges = response.into_items();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].pack_product_type, Some(13));
        assert_eq!(ranges[0].quantity, Some(5));
        assert_eq!(ranges[0].to.as_deref(), Some("40950000104"));
    }

    #[test]
    fn test_parcel_shop_numbers_from_text() {
        let response: GetParcelShopsResponse = serde_json::from_value(json!({
            "GetParcelShopsResult": { "ResultData": { "MyApiParcelShop": [
                { "Code": "KM10001", "ActiveCardPayment": "true",
                  "GPSLocation": { "Latitude": "50.0755", "Longitude": 14.4378 } },
                { "Code": "KM10002", "Name2": null }
            ] } }
        }))
        .unwrap();

        let shops = response.into_items();
        assert_eq!(shops.len(), 2);
        assert_eq!(shops[0].active_card_payment, Some(true));
        let gps = shops[0].gps_location.as_ref().unwrap();
        assert_eq!(gps.latitude, Some(50.0755));
        assert_eq!(gps.longitude, Some(14.4378));
        assert_eq!(shops[1].name2, None);
    }

    #[test]
    fn test_blank_login_token_is_rejected() {
        let response: LoginResponse =
            serde_json::from_value(json!({ "LoginResult": { "AuthToken": "  " } })).unwrap();
        assert_eq!(response.into_token(), None);
    }
}
