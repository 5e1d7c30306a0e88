//! Access to Petstore orders.

use std::{collections::HashMap, sync::Arc};

use http::Method;
use petstore_model::Order;

use crate::{
    ApiClient, ApiError,
    request::{RequestOptions, RequestSpec},
    response::HttpInfo,
};

#[derive(Debug, Clone)]
pub struct StoreApi {
    api_client: Arc<ApiClient>,
}

impl StoreApi {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        StoreApi { api_client }
    }

    pub fn from_default() -> Result<Self, ApiError> {
        Ok(Self::new(ApiClient::get_default()?))
    }

    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.api_client
    }

    /// Returns pet inventories by status
    pub fn get_inventory(&self) -> Result<HashMap<String, i32>, ApiError> {
        self.get_inventory_with_http_info(&RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn get_inventory_with_http_info(
        &self,
        options: &RequestOptions,
    ) -> Result<HttpInfo<HashMap<String, i32>>, ApiError> {
        let spec = RequestSpec::new(Method::GET, "/store/inventory")
            .accepts(&["application/json"])
            .auth(&["api_key"]);
        self.api_client.execute(spec, options)
    }

    /// Place an order for a pet
    pub fn place_order(&self, order: &Order) -> Result<Order, ApiError> {
        self.place_order_with_http_info(order, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn place_order_with_http_info(
        &self,
        order: &Order,
        options: &RequestOptions,
    ) -> Result<HttpInfo<Order>, ApiError> {
        let spec = RequestSpec::new(Method::POST, "/store/order")
            .json_body(order)?
            .accepts(&["application/xml", "application/json"])
            .content_types(&["application/json"]);
        self.api_client.execute(spec, options)
    }

    /// Find purchase order by ID
    pub fn get_order_by_id(&self, order_id: i64) -> Result<Order, ApiError> {
        self.get_order_by_id_with_http_info(order_id, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn get_order_by_id_with_http_info(
        &self,
        order_id: i64,
        options: &RequestOptions,
    ) -> Result<HttpInfo<Order>, ApiError> {
        let spec = RequestSpec::new(Method::GET, "/store/order/{order_id}")
            .path_param("order_id", order_id)
            .accepts(&["application/xml", "application/json"]);
        self.api_client.execute(spec, options)
    }

    /// Delete purchase order by ID
    pub fn delete_order(&self, order_id: &str) -> Result<(), ApiError> {
        self.delete_order_with_http_info(order_id, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn delete_order_with_http_info(
        &self,
        order_id: &str,
        options: &RequestOptions,
    ) -> Result<HttpInfo<()>, ApiError> {
        let spec = RequestSpec::new(Method::DELETE, "/store/order/{order_id}")
            .path_param("order_id", order_id);
        self.api_client.execute_empty(spec, options)
    }
}
