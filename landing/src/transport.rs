// Browser transport for form submissions
// Developed with 🌍 by The TravelWorld Team (c)2025

use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use travelworld_forms::{HttpRequest, HttpResponse, Method, Transport, TransportFailure};

/// `fetch` via gloo-net, raced against a timeout.
#[derive(Debug, Clone, Copy)]
pub struct FetchTransport {
    timeout: Duration,
}

impl FetchTransport {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn exchange(request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let mut builder = match request.method {
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let outgoing = builder
            .body(request.body)
            .map_err(|e| TransportFailure::Encode(e.to_string()))?;

        let response = outgoing
            .send()
            .await
            .map_err(|e| TransportFailure::Network(e.to_string()))?;

        // the status alone decides success; an unreadable body is just empty
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let exchange = pin!(Self::exchange(request));
        let deadline = pin!(TimeoutFuture::new(millis));

        match select(exchange, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(TransportFailure::TimedOut(self.timeout)),
        }
    }
}
