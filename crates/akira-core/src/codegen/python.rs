//! Python `requests` scripts

use super::SampleRequest;

pub(super) fn render(request: &SampleRequest<'_>) -> String {
    let mut code = format!("import requests\n\nurl = '{}'\n", request.url);
    let mut args = String::from("url");

    if request.has_body() {
        let config = request.config;
        code.push_str(&format!(
            "headers = {{'{}': '{}'}}\n\ndata = {{\n    # Add request body here\n",
            config.credential_header, config.credential
        ));
        for field in request.body_fields() {
            code.push_str(&format!("    # {field}\n"));
        }
        code.push_str("}\n");
        args.push_str(", headers=headers, json=data");
    }

    code.push_str(&format!(
        "\nresponse = requests.{}({})\nprint(response.json())",
        request.method.as_str(),
        args
    ));
    code
}
