//! Shared helpers for the HTTP integration tests.
//!
//! [`MemoryStore`] stands in for the database: it implements every
//! repository trait over plain vectors, so the full router runs without
//! Postgres.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use booking_service_lib::api::{create_router, AppState};
use booking_service_lib::repository::{
    BookingRepository, OperatorRepository, Repositories, ServiceRepository, ShopRepository,
};
use common::{AppResult, CorsConfig};
use domain::{
    Booking, DayRange, NewBooking, NewOperator, NewService, NewShop, Operator, Service, Shop,
};

/// In-memory implementation of all repositories.
#[derive(Default)]
pub struct MemoryStore {
    shops: Mutex<Vec<Shop>>,
    operators: Mutex<Vec<Operator>>,
    services: Mutex<Vec<Service>>,
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Store a service record as-is, bypassing validation.
    pub fn insert_service(&self, service: Service) {
        self.services.lock().unwrap().push(service);
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            shops: self.clone(),
            operators: self.clone(),
            services: self.clone(),
            bookings: self.clone(),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[async_trait]
impl ShopRepository for MemoryStore {
    async fn find_by_owner(&self, owner_user_id: &str) -> AppResult<Option<Shop>> {
        let shops = self.shops.lock().unwrap();
        Ok(shops.iter().find(|s| s.owner_user_id == owner_user_id).cloned())
    }

    async fn create(&self, shop: NewShop) -> AppResult<String> {
        let id = new_id();
        self.shops.lock().unwrap().push(Shop {
            id: id.clone(),
            owner_user_id: shop.owner_user_id,
            name: shop.name,
            created_at: Utc::now(),
        });
        Ok(id)
    }
}

#[async_trait]
impl OperatorRepository for MemoryStore {
    async fn list(&self, shop_id: &str) -> AppResult<Vec<Operator>> {
        let operators = self.operators.lock().unwrap();
        Ok(operators.iter().filter(|o| o.shop_id == shop_id).cloned().collect())
    }

    async fn create(&self, operator: NewOperator) -> AppResult<String> {
        let id = new_id();
        self.operators.lock().unwrap().push(Operator {
            id: id.clone(),
            shop_id: operator.shop_id,
            name: operator.name,
            service_ids: operator.service_ids,
            working_hours: operator.working_hours,
        });
        Ok(id)
    }
}

#[async_trait]
impl ServiceRepository for MemoryStore {
    async fn list(&self, shop_id: &str) -> AppResult<Vec<Service>> {
        let services = self.services.lock().unwrap();
        Ok(services.iter().filter(|s| s.shop_id == shop_id).cloned().collect())
    }

    async fn find(&self, shop_id: &str, service_id: &str) -> AppResult<Option<Service>> {
        let services = self.services.lock().unwrap();
        Ok(services
            .iter()
            .find(|s| s.shop_id == shop_id && s.id == service_id)
            .cloned())
    }

    async fn create(&self, service: NewService) -> AppResult<String> {
        let id = new_id();
        self.insert_service(Service {
            id: id.clone(),
            shop_id: service.shop_id,
            name: service.name,
            duration_minutes: Some(service.duration_minutes),
            price: service.price,
        });
        Ok(id)
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn list_between(&self, shop_id: &str, range: DayRange) -> AppResult<Vec<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings
            .iter()
            .filter(|b| b.shop_id == shop_id && range.contains(&b.start_time))
            .cloned()
            .collect())
    }

    async fn create(&self, booking: NewBooking) -> AppResult<String> {
        let id = new_id();
        self.bookings.lock().unwrap().push(Booking {
            id: id.clone(),
            shop_id: booking.shop_id,
            customer_name: booking.customer_name,
            customer_phone: booking.customer_phone,
            service_id: booking.service_id,
            operator_id: booking.operator_id,
            start_time: booking.start_time,
            end_time: booking.end_time,
            notes: booking.notes,
        });
        Ok(id)
    }
}

/// Build the full router over the given repositories.
pub fn app(repos: Repositories) -> Router {
    create_router(AppState::from_repositories(repos), &CorsConfig::default())
}

/// Send a request and decode the JSON response body (`Null` when empty).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}
