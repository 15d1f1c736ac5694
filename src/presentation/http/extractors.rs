// src/presentation/http/extractors.rs
use super::error::HttpError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// `Json<T>` whose rejections use the common error body and always answer
/// 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError::bad_request(rejection.body_text())),
        }
    }
}

/// Query string decoded leniently: when a key repeats, its first value wins,
/// and rejections use the common error body.
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

        let mut first_values = Map::new();
        for (key, value) in pairs {
            first_values.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(first_values))
            .map(Self)
            .map_err(|err| HttpError::bad_request(format!("invalid query string: {err}")))
    }
}
