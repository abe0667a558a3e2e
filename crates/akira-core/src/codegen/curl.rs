//! `curl` command lines

use super::SampleRequest;

pub(super) fn render(request: &SampleRequest<'_>) -> String {
    let mut code = format!("curl -X {} '{}'", request.method.as_upper(), request.url);

    if request.has_body() {
        let config = request.config;
        code.push_str(" \\\n  -H 'Content-Type: application/json'");
        code.push_str(&format!(
            " \\\n  -H '{}: {}'",
            config.credential_header, config.credential
        ));
        code.push_str(" \\\n  -d '{\n    // Add request body here\n");
        for field in request.body_fields() {
            code.push_str(&format!("    // {field}\n"));
        }
        code.push_str("  }'");
    }

    code
}
