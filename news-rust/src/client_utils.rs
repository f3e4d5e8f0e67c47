use crate::ServiceError;
use reqwest::{RequestBuilder, Response};
use serde_json::Value;

/// Send a request and parse the JSON body.
/// Returns an error on a non-success status code.
pub async fn send_json(request: RequestBuilder) -> Result<Value, ServiceError> {
    let response = check_status(request.send().await?).await?;
    Ok(response.json::<Value>().await?)
}

/// Send a request whose response body is not needed.
/// Returns an error on a non-success status code.
pub async fn send_empty(request: RequestBuilder) -> Result<(), ServiceError> {
    check_status(request.send().await?).await?;
    Ok(())
}

async fn check_status(response: Response) -> Result<Response, ServiceError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ServiceError::StatusCode(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    }
}

/// Unwrap the `{"article": {...}}` / `{"data": {...}}` envelopes some
/// backends put around a single article.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut object) if !object.contains_key("id") && !object.contains_key("_id") => {
            let key = ["article", "data"]
                .into_iter()
                .find(|key| object.get(*key).is_some_and(Value::is_object));
            match key {
                Some(key) => object.remove(key).unwrap_or_default(),
                None => Value::Object(object),
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::unwrap_envelope;
    use serde_json::json;

    #[test]
    fn unwraps_known_envelopes() {
        let article = json!({ "id": "a1", "title": "T" });

        assert_eq!(unwrap_envelope(json!({ "article": article })), article);
        assert_eq!(unwrap_envelope(json!({ "data": article })), article);
        assert_eq!(unwrap_envelope(article.clone()), article);
    }

    #[test]
    fn leaves_unknown_shapes_alone() {
        let value = json!({ "message": "ok", "data": "not an object" });
        assert_eq!(unwrap_envelope(value.clone()), value);
        assert_eq!(unwrap_envelope(json!([1, 2])), json!([1, 2]));
    }
}
