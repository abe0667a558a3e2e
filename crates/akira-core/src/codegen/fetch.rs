//! JavaScript `fetch` calls

use super::SampleRequest;
use crate::model::HttpMethod;

pub(super) fn render(request: &SampleRequest<'_>) -> String {
    let mut code = format!("fetch('{}'", request.url);

    if request.method != HttpMethod::Get || request.has_body() {
        let config = request.config;
        code.push_str(", {\n");
        code.push_str(&format!("  method: '{}',\n", request.method.as_upper()));
        code.push_str("  headers: {\n    'Content-Type': 'application/json'");
        if request.has_body() {
            code.push_str(&format!(
                ",\n    '{}': '{}'",
                config.credential_header, config.credential
            ));
        }
        code.push_str("\n  }");
        if request.has_body() {
            code.push_str(",\n  body: JSON.stringify({\n    // Add request body here\n");
            for field in request.body_fields() {
                code.push_str(&format!("    // {field}\n"));
            }
            code.push_str("  })");
        }
        code.push_str("\n}");
    }

    code.push_str(
        ")\n  .then(response => response.json())\n  \
         .then(data => console.log(data))\n  \
         .catch(error => console.error('Error:', error));",
    );
    code
}

#[cfg(test)]
mod tests {
    use crate::codegen::{CodeSampleGenerator, Dialect, FALLBACK_SERVER};
    use crate::model::{HttpMethod, Schema, Server};
    use pretty_assertions::assert_eq;

    fn generate(method: HttpMethod, body: Option<&Schema>) -> String {
        CodeSampleGenerator::default().generate(
            Dialect::Fetch,
            &Server::new(FALLBACK_SERVER),
            method,
            "/planets",
            &[],
            body,
        )
    }

    #[test]
    fn test_get_has_no_options() {
        assert_eq!(
            generate(HttpMethod::Get, None),
            "fetch('http://api.example.com/v1/planets')\n  \
             .then(response => response.json())\n  \
             .then(data => console.log(data))\n  \
             .catch(error => console.error('Error:', error));"
        );
    }

    #[test]
    fn test_post_with_body() {
        let sample = generate(HttpMethod::Post, Some(&Schema::of_type("object")));
        assert!(sample.starts_with(
            "fetch('http://api.example.com/v1/planets', {\n  method: 'POST',\n  headers: {\n    \
             'Content-Type': 'application/json',\n    'X-API-Key': 'YOUR_API_KEY'\n  },\n  \
             body: JSON.stringify({\n    // Add request body here\n  })\n})"
        ));
    }

    #[test]
    fn test_get_with_body_keeps_scaffolding() {
        let sample = generate(HttpMethod::Get, Some(&Schema::of_type("object")));
        assert!(sample.starts_with(
            "fetch('http://api.example.com/v1/planets', {\n  method: 'GET',\n  headers: {\n    \
             'Content-Type': 'application/json',\n    'X-API-Key': 'YOUR_API_KEY'\n  },\n  \
             body: JSON.stringify({\n    // Add request body here\n  })\n})"
        ));
    }

    #[test]
    fn test_delete_without_body() {
        let sample = generate(HttpMethod::Delete, None);
        assert!(sample.contains("method: 'DELETE'"));
        assert!(!sample.contains("body:"));
        assert!(!sample.contains("X-API-Key"));
    }
}
