//! Cliente de PPL MyAPI
//!
//! Traduce las entidades del dominio a las peticiones de cada operación
//! remota, las envía por el transporte SOAP y desenvuelve las respuestas
//! tipadas. Toda validación local ocurre antes de tocar la red.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::cache::{Clock, FileTokenStore, SystemClock, TokenCache, TokenStore};
use crate::clients::{HttpSoapTransport, SoapTransport, TransportError};
use crate::config::PplConfig;
use crate::dto::{
    AuthToken, CityRouting, CityRoutingFilter, CreateOrdersRequest, CreatePackagesRequest,
    CreatePackagesResponse, CreatePickupOrdersRequest, CreatePickupOrdersResponse,
    GetCitiesRoutingRequest, GetCitiesRoutingResponse, GetNumberRangeRequest,
    GetNumberRangeResponse, GetPackagesRequest, GetPackagesResponse, GetParcelShopsRequest,
    GetParcelShopsResponse, IsHealtlyResponse, ItemResult, LoginAuth, LoginRequest, LoginResponse,
    NumberRange, NumberRangeRequestIn, NumberRangeRequestList, OrderList, PackageFilter,
    PackageList, PackageOut, ParcelShop, ParcelShopFilter, PickupOrderList, StringList,
    VersionResponse,
};
use crate::enums::Product;
use crate::models::{Order, Package, PickupOrder};
use crate::services::mapping::{order_in, package_in, pickup_order_in};
use crate::services::queries::{CityRoutingQuery, PackageQuery, ParcelShopQuery};
use crate::utils::errors::{unexpected_response, validation_error, PplError, PplResult};
use crate::utils::formatting::format_date;
use crate::utils::validation::check_positive;

/// Estado que devuelve `IsHealtly` cuando el servicio funciona
pub const HEALTHY_STATUS: &str = "Healthy";

/// Credenciales de la cuenta PPL
#[derive(Debug, Clone, Default, Validate)]
pub struct Credentials {
    #[validate(length(max = 32))]
    pub username: Option<String>,
    #[validate(length(max = 32))]
    pub password: Option<String>,
    pub customer_id: Option<u64>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>, customer_id: Option<u64>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            customer_id,
        }
    }
}

/// Cliente de PPL MyAPI
pub struct PplClient {
    transport: Arc<dyn SoapTransport>,
    credentials: Credentials,
    token_cache: TokenCache,
}

impl PplClient {
    /// Construir el cliente y comprobar que el servicio responde
    pub async fn connect(
        transport: Arc<dyn SoapTransport>,
        credentials: Credentials,
        store: Arc<dyn TokenStore>,
        clock: Arc<dyn Clock>,
    ) -> PplResult<Self> {
        let client = Self::without_health_check(transport, credentials, store, clock)?;

        if !client.is_healthy().await {
            return Err(PplError::Offline(
                "PPL MyAPI did not report a healthy status".to_string(),
            ));
        }
        Ok(client)
    }

    /// Construir el cliente sin llamar a `IsHealtly`
    pub fn without_health_check(
        transport: Arc<dyn SoapTransport>,
        credentials: Credentials,
        store: Arc<dyn TokenStore>,
        clock: Arc<dyn Clock>,
    ) -> PplResult<Self> {
        credentials
            .validate()
            .map_err(|e| PplError::Auth(format!("invalid credentials: {e}")))?;

        let username = credentials.username.as_deref().unwrap_or_default();
        let key = TokenCache::key_for(credentials.customer_id, username);

        Ok(Self {
            transport,
            token_cache: TokenCache::new(store, clock, key),
            credentials,
        })
    }

    /// Transporte HTTP, token en disco y reloj del sistema según `config`
    pub async fn from_config(config: &PplConfig) -> PplResult<Self> {
        let transport = HttpSoapTransport::new(
            config.endpoint.clone(),
            config.namespace.clone(),
            config.action_prefix.clone(),
            config.request_timeout(),
        )?
        .with_trace(config.trace);

        let credentials = Credentials {
            username: config.username.clone(),
            password: config.password.clone(),
            customer_id: config.customer_id,
        };

        info!("🚚 Conectando con PPL MyAPI en {}", config.endpoint);
        let client = Self::connect(
            Arc::new(transport),
            credentials,
            Arc::new(FileTokenStore::new(config.token_storage.clone())),
            Arc::new(SystemClock),
        )
        .await?;
        client.set_token_lifespan(config.token_lifespan());
        Ok(client)
    }

    pub fn set_token_lifespan(&self, lifespan: chrono::Duration) {
        self.token_cache.set_lifespan(lifespan);
    }

    pub fn token_lifespan(&self) -> chrono::Duration {
        self.token_cache.lifespan()
    }

    async fn call<Req, Resp>(&self, operation: &'static str, request: &Req) -> PplResult<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let document = serde_json::to_value(request)
            .map_err(|e| PplError::Transport(TransportError::Xml(e.to_string())))?;
        self.call_document(operation, document).await
    }

    async fn call_document<Resp>(&self, operation: &'static str, document: Value) -> PplResult<Resp>
    where
        Resp: DeserializeOwned,
    {
        debug!("📤 Invocando {}", operation);
        let response = self.transport.invoke(operation, document).await?;
        serde_json::from_value(response).map_err(|e| unexpected_response(operation, e))
    }

    /// `true` solo si el servicio responde `Healthy`; nunca falla
    pub async fn is_healthy(&self) -> bool {
        match self
            .call_document::<IsHealtlyResponse>("IsHealtly", json!({}))
            .await
        {
            Ok(response) => response.is_healtly_result.as_deref() == Some(HEALTHY_STATUS),
            Err(e) => {
                warn!("⚠️ Health check de PPL MyAPI falló: {}", e);
                false
            }
        }
    }

    pub async fn version(&self) -> PplResult<String> {
        let response: VersionResponse = self.call_document("Version", json!({})).await?;
        response
            .version_result
            .ok_or_else(|| unexpected_response("Version", "missing VersionResult"))
    }

    async fn request_login(&self) -> PplResult<String> {
        let request = LoginRequest {
            auth: LoginAuth {
                cust_id: self.credentials.customer_id,
                user_name: self.credentials.username.clone(),
                password: self.credentials.password.clone(),
            },
        };

        info!(
            "🔐 Login en PPL MyAPI para {}",
            self.credentials.username.as_deref().unwrap_or("<sin usuario>")
        );
        let response: LoginResponse = self
            .call("Login", &request)
            .await
            .map_err(|e| PplError::Auth(format!("login failed: {e}")))?;

        response
            .into_token()
            .ok_or_else(|| PplError::Auth("login response without AuthToken".to_string()))
    }

    /// Login explícito; el token obtenido reemplaza al cacheado
    pub async fn login(&self) -> PplResult<String> {
        let token = self.request_login().await?;
        self.token_cache.save(&token).await?;
        Ok(token)
    }

    /// Token vigente del cache o uno nuevo
    pub async fn get_token(&self) -> PplResult<String> {
        self.token_cache
            .get_or_login(|| self.request_login())
            .await
    }

    async fn auth(&self) -> PplResult<AuthToken> {
        Ok(AuthToken {
            auth_token: self.get_token().await?,
        })
    }

    pub async fn get_parcel_shops(&self, query: &ParcelShopQuery) -> PplResult<Vec<ParcelShop>> {
        let request = GetParcelShopsRequest {
            filter: ParcelShopFilter {
                access_point_type: query.access_point_type.map(|kind| kind.to_string()),
                active_card_payment: query.active_card_payment,
                city: query.city.clone(),
                code: query.code.clone(),
                country_code: query.country.to_string(),
                latitude: query.latitude,
                longitude: query.longitude,
                radius: query.radius,
                zip_code: query.zip_code.clone(),
            },
        };

        let response: GetParcelShopsResponse = self.call("GetParcelShops", &request).await?;
        let shops = response.into_items();
        debug!("📍 {} parcel shops para {}", shops.len(), query.country);
        Ok(shops)
    }

    pub async fn get_cities_routing(&self, query: &CityRoutingQuery) -> PplResult<Vec<CityRouting>> {
        let request = GetCitiesRoutingRequest {
            auth: self.auth().await?,
            filter: CityRoutingFilter {
                country_code: query.country.to_string(),
                date_from: query.date_from.map(format_date),
                zip_code: query.zip_code.clone(),
                street: query.street.clone(),
            },
        };

        let response: GetCitiesRoutingResponse = self.call("GetCitiesRouting", &request).await?;
        Ok(response.into_items())
    }

    pub async fn get_packages(&self, query: &PackageQuery) -> PplResult<Vec<PackageOut>> {
        query.check()?;

        let request = GetPackagesRequest {
            auth: self.auth().await?,
            filter: PackageFilter {
                cust_refs: StringList::non_empty(&query.customer_references),
                date_from: query.date_from.map(format_date),
                date_to: query.date_to.map(format_date),
                pack_numbers: StringList::non_empty(&query.package_numbers),
            },
        };

        let response: GetPackagesResponse = self.call("GetPackages", &request).await?;
        Ok(response.into_items())
    }

    /// Crear órdenes; devuelve la respuesta completa del servicio
    pub async fn create_orders(&self, orders: &[Order]) -> PplResult<Value> {
        if orders.is_empty() {
            return Err(validation_error("orders", "required", "at least one order is required"));
        }

        let request = CreateOrdersRequest {
            auth: self.auth().await?,
            orders: OrderList {
                items: orders.iter().map(order_in).collect(),
            },
        };

        info!("📦 Creando {} órdenes en PPL", orders.len());
        self.call("CreateOrders", &request).await
    }

    pub async fn create_packages(
        &self,
        packages: &[Package],
        customer_unique_import_id: Option<&str>,
    ) -> PplResult<Vec<ItemResult>> {
        if packages.is_empty() {
            return Err(validation_error("packages", "required", "at least one package is required"));
        }
        for package in packages {
            package.check_cash_on_delivery()?;
        }

        let request = CreatePackagesRequest {
            auth: self.auth().await?,
            customer_unique_import_id: customer_unique_import_id.map(str::to_string),
            packages: PackageList {
                items: packages.iter().map(package_in).collect(),
            },
        };

        info!("📦 Creando {} paquetes en PPL", packages.len());
        let response: CreatePackagesResponse = self.call("CreatePackages", &request).await?;
        Ok(response.into_items())
    }

    pub async fn create_pickup_orders(&self, orders: &[PickupOrder]) -> PplResult<Vec<ItemResult>> {
        if orders.is_empty() {
            return Err(validation_error(
                "pickup_orders",
                "required",
                "at least one pickup order is required",
            ));
        }

        let request = CreatePickupOrdersRequest {
            auth: self.auth().await?,
            orders: PickupOrderList {
                items: orders.iter().map(pickup_order_in).collect(),
            },
        };

        info!("🚛 Creando {} órdenes de recogida en PPL", orders.len());
        let response: CreatePickupOrdersResponse =
            self.call("CreatePickupOrders", &request).await?;
        Ok(response.into_items())
    }

    /// Reservar `quantity` números de paquete para `product`
    pub async fn get_number_range(&self, product: Product, quantity: u32) -> PplResult<Vec<NumberRange>> {
        check_positive("quantity", quantity)?;

        let request = GetNumberRangeRequest {
            auth: self.auth().await?,
            number_ranges: NumberRangeRequestList {
                items: vec![NumberRangeRequestIn {
                    pack_product_type: product.code(),
                    quantity,
                }],
            },
        };

        let response: GetNumberRangeResponse = self.call("GetNumberRange", &request).await?;
        Ok(response.into_items())
    }

    /// Igual que `get_number_range` con el código numérico del producto
    pub async fn get_number_range_by_code(&self, product_code: u16, quantity: u32) -> PplResult<Vec<NumberRange>> {
        let product = Product::try_from(product_code)?;
        self.get_number_range(product, quantity).await
    }

    pub fn last_request(&self) -> Option<String> {
        self.transport.last_request()
    }

    pub fn last_request_headers(&self) -> Option<String> {
        self.transport.last_request_headers()
    }

    pub fn last_response(&self) -> Option<String> {
        self.transport.last_response()
    }

    pub fn last_response_headers(&self) -> Option<String> {
        self.transport.last_response_headers()
    }
}
