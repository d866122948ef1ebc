use gloo::net::http::Request;
use shared::{
    Customer, CustomerListRequest, CustomerListResponse, CustomerPayload, MutationResponse,
    RestaurantListRequest, RestaurantListResponse, RestaurantPayload, RewardRequest,
};

use super::session::SessionContext;

/// API client for the platform backend. Every request carries the session's
/// bearer token; an unauthenticated client fails before anything goes out.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    /// Create a client against the default backend address.
    pub fn new(session: SessionContext) -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            session,
        }
    }

    /// Create a client against a custom backend address.
    pub fn with_base_url(base_url: String, session: SessionContext) -> Self {
        Self { base_url, session }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn bearer(&self) -> Result<String, String> {
        match self.session.access_token() {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => Err("Not signed in".to_string()),
        }
    }

    /// Fetch one page of restaurants, optionally filtered by name.
    pub async fn get_restaurants(
        &self,
        request: RestaurantListRequest,
    ) -> Result<RestaurantListResponse, String> {
        let url = format!("{}/productAdmin/getRestaurants", self.base_url);
        let bearer = self.bearer()?;

        match Request::post(&url)
            .header("Authorization", &bearer)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<RestaurantListResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse restaurants: {}", e)),
                    }
                } else {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn add_restaurant(
        &self,
        payload: RestaurantPayload,
    ) -> Result<MutationResponse, String> {
        let url = format!("{}/productAdmin/addRestaurant", self.base_url);
        self.send_restaurant_mutation(Request::post(&url), payload)
            .await
    }

    pub async fn edit_restaurant(
        &self,
        id: &str,
        payload: RestaurantPayload,
    ) -> Result<MutationResponse, String> {
        let url = format!("{}/productAdmin/editRestaurant/{}", self.base_url, id);
        self.send_restaurant_mutation(Request::put(&url), payload)
            .await
    }

    async fn send_restaurant_mutation(
        &self,
        builder: gloo::net::http::RequestBuilder,
        payload: RestaurantPayload,
    ) -> Result<MutationResponse, String> {
        let bearer = self.bearer()?;

        match builder
            .header("Authorization", &bearer)
            .json(&payload)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<MutationResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn delete_restaurant(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/productAdmin/deleteRestaurant/{}", self.base_url, id);
        self.send_expecting_ok(Request::delete(&url)).await
    }

    /// Fetch one page of customers for the session's restaurant, optionally
    /// filtered by phone number.
    pub async fn get_customers(
        &self,
        request: CustomerListRequest,
    ) -> Result<CustomerListResponse, String> {
        let url = format!("{}/common/getCustomers", self.base_url);
        let bearer = self.bearer()?;

        match Request::post(&url)
            .header("Authorization", &bearer)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<CustomerListResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse customers: {}", e)),
                    }
                } else {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn add_customer(&self, payload: CustomerPayload) -> Result<(), String> {
        let url = format!("{}/restaurantAdmin/addCustomer", self.base_url);
        self.send_json_expecting_ok(Request::post(&url), &payload)
            .await
    }

    pub async fn edit_customer(&self, id: &str, payload: CustomerPayload) -> Result<(), String> {
        let url = format!("{}/restaurantAdmin/editCustomer/{}", self.base_url, id);
        self.send_json_expecting_ok(Request::put(&url), &payload)
            .await
    }

    pub async fn delete_customer(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/restaurantAdmin/deleteCustomer/{}", self.base_url, id);
        self.send_expecting_ok(Request::delete(&url)).await
    }

    /// Fetch the full detail record for one customer.
    pub async fn get_customer(&self, id: &str) -> Result<Customer, String> {
        let url = format!("{}/restaurantAdmin/getCustomer/{}", self.base_url, id);
        let bearer = self.bearer()?;

        match Request::get(&url)
            .header("Authorization", &bearer)
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Customer>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse customer details: {}", e)),
                    }
                } else {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Submit a reward adjustment. The body is write-only; a 200 status is
    /// the entire success signal.
    pub async fn add_reward(&self, request: RewardRequest) -> Result<(), String> {
        let url = format!("{}/restaurantAdmin/addReward", self.base_url);
        self.send_json_expecting_ok(Request::post(&url), &request)
            .await
    }

    // Endpoints whose success signal is the status code alone.

    async fn send_expecting_ok(
        &self,
        builder: gloo::net::http::RequestBuilder,
    ) -> Result<(), String> {
        let bearer = self.bearer()?;

        match builder.header("Authorization", &bearer).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    async fn send_json_expecting_ok<T: serde::Serialize>(
        &self,
        builder: gloo::net::http::RequestBuilder,
        body: &T,
    ) -> Result<(), String> {
        let bearer = self.bearer()?;

        match builder
            .header("Authorization", &bearer)
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}
