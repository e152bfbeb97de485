use crate::app::App;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, text_response, ResultResp};
use crate::templates;
use astra::Request;
use log::debug;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!("{method} {path}");

    match (method, path) {
        // Every page view is a mount: one fetch, then the layer is synced.
        ("GET", "/") => html_response(templates::pages::map_page(&app.mount())),

        ("GET", "/markers.json") => {
            let if_none_match = req
                .headers()
                .get("If-None-Match")
                .and_then(|v| v.to_str().ok());
            let view = app.current_view();
            json_response(view.layer.as_ref(), if_none_match)
        }

        ("GET", "/health") => text_response("ok"),

        (_, "/" | "/markers.json" | "/health") => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}
