//! API route definitions
//!
//! Thin handlers: validate the request fields, resolve the session context,
//! delegate to a service, wrap the result. Items and layout endpoints always
//! answer 200 with the envelope; the password flow always answers with a 302
//! redirect and a flash message.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Form, Json, Router,
};
use serde_json::json;

use super::state::AppState;
use super::types::*;
use crate::playlists::{FieldValue, InsertItemFactory, ItemField};
use crate::session::{session_middleware, FlashLevel, SessionContext};
use crate::users::{apply_password_change, FormBuilder, PasswordChangeInput, MIN_PASSWORD_LENGTH};

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Status endpoint
        .route("/api/status", get(status_handler))
        // Playlist items
        .route("/api/playlists/:playlist_id/items", get(load_items))
        .route(
            "/api/playlists/items",
            post(insert_item).patch(edit_item).delete(delete_item),
        )
        .route("/api/playlists/items/:item_id", get(fetch_item))
        .route("/api/playlists/items/reorder", post(reorder_items))
        // Player layouts
        .route("/api/players/:player_id/layout", get(player_layout))
        // User password editing
        .route("/users/edit", get(show_password_form))
        .route("/users/edit/password", post(edit_password))
        // Session cookie resolution for all routes
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .with_state(state)
}

// ============================================================================
// Status Handler
// ============================================================================

async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================================
// Items Handlers
// ============================================================================

/// Resolve the acting user; items endpoints fail their envelope without one.
fn acting_uid(session: &Option<Extension<SessionContext>>) -> Result<u64, Json<AjaxEnvelope>> {
    session
        .as_ref()
        .map(|Extension(ctx)| ctx.uid)
        .ok_or_else(|| Json(AjaxEnvelope::error("Not authenticated.")))
}

async fn load_items(
    State(state): State<AppState>,
    session: Option<Extension<SessionContext>>,
    Path(playlist_id): Path<u64>,
) -> Json<AjaxEnvelope> {
    if let Err(envelope) = acting_uid(&session) {
        return envelope;
    }
    if playlist_id == 0 {
        return Json(AjaxEnvelope::error("Playlist ID not valid."));
    }

    let list = state.items.load_items_for_composer(playlist_id);
    Json(AjaxEnvelope::ok_data(list))
}

async fn insert_item(
    State(state): State<AppState>,
    session: Option<Extension<SessionContext>>,
    body: Option<Json<InsertItemRequest>>,
) -> Json<AjaxEnvelope> {
    let uid = match acting_uid(&session) {
        Ok(uid) => uid,
        Err(envelope) => return envelope,
    };
    // A malformed body behaves like a body with every field missing.
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let Some(playlist_id) = req.playlist_id.filter(|&id| id != 0) else {
        return Json(AjaxEnvelope::error("Playlist ID not valid."));
    };
    let Some(content_id) = req.id.filter(|id| !id.is_empty()) else {
        return Json(AjaxEnvelope::error("Content ID not valid."));
    };
    let Some(source) = req.source.filter(|s| !s.is_empty()) else {
        return Json(AjaxEnvelope::error("Source not valid."));
    };
    let Some(position) = req.position.filter(|&p| p != 0) else {
        return Json(AjaxEnvelope::error("Position not valid."));
    };

    let Some(strategy) = InsertItemFactory::create(&source) else {
        return Json(AjaxEnvelope::error("Error inserting item."));
    };

    match strategy.insert(&state.items, uid, playlist_id, &content_id, position as usize) {
        Ok(item) => Json(AjaxEnvelope::ok_data(item)),
        Err(err) => {
            tracing::warn!(playlist_id, %source, %err, "item insert rejected");
            Json(AjaxEnvelope::error("Error inserting item."))
        }
    }
}

async fn edit_item(
    State(state): State<AppState>,
    session: Option<Extension<SessionContext>>,
    body: Option<Json<EditItemRequest>>,
) -> Json<AjaxEnvelope> {
    if let Err(envelope) = acting_uid(&session) {
        return envelope;
    }
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let Some(item_id) = req.item_id.filter(|&id| id != 0) else {
        return Json(AjaxEnvelope::error("Item ID not valid."));
    };
    let Some(name) = req.name.filter(|n| !n.is_empty()) else {
        return Json(AjaxEnvelope::error("No parameter name."));
    };
    let Some(value) = req.value.filter(|v| !v.is_empty()) else {
        return Json(AjaxEnvelope::error("No parameter value."));
    };

    let Ok(field) = name.parse::<ItemField>() else {
        return Json(AjaxEnvelope::error("No valid parametername."));
    };

    let field_value = match field {
        ItemField::Name => FieldValue::Name(value),
        ItemField::Duration => match value.parse::<i64>() {
            Ok(secs) => FieldValue::Duration(secs),
            Err(_) => return Json(AjaxEnvelope::error("No parameter value.")),
        },
    };

    if state.items.update_field(item_id, field_value) == 0 {
        return Json(AjaxEnvelope::error(format!("Error updating item field: {}.", field)));
    }

    Json(AjaxEnvelope::ok())
}

async fn fetch_item(
    State(state): State<AppState>,
    session: Option<Extension<SessionContext>>,
    Path(item_id): Path<u64>,
) -> Json<AjaxEnvelope> {
    if let Err(envelope) = acting_uid(&session) {
        return envelope;
    }
    if item_id == 0 {
        return Json(AjaxEnvelope::error("Item ID not valid."));
    }

    match state.items.fetch_item_by_id(item_id) {
        Some(item) => Json(AjaxEnvelope::ok_item(item)),
        None => Json(AjaxEnvelope::error("Item not found.")),
    }
}

async fn reorder_items(
    State(state): State<AppState>,
    session: Option<Extension<SessionContext>>,
    body: Option<Json<ReorderItemsRequest>>,
) -> Json<AjaxEnvelope> {
    if let Err(envelope) = acting_uid(&session) {
        return envelope;
    }
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let Some(playlist_id) = req.playlist_id.filter(|&id| id != 0) else {
        return Json(AjaxEnvelope::error("Playlist ID not valid."));
    };
    let Some(positions) = req.items_positions.filter(|p| !p.is_empty()) else {
        return Json(AjaxEnvelope::error("Items Position array is not valid."));
    };

    let result = state.items.update_item_order(playlist_id, &positions);
    Json(AjaxEnvelope::from_flag(result))
}

async fn delete_item(
    State(state): State<AppState>,
    session: Option<Extension<SessionContext>>,
    body: Option<Json<DeleteItemRequest>>,
) -> Json<AjaxEnvelope> {
    if let Err(envelope) = acting_uid(&session) {
        return envelope;
    }
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let Some(playlist_id) = req.playlist_id.filter(|&id| id != 0) else {
        return Json(AjaxEnvelope::error("Playlist ID not valid."));
    };
    let Some(item_id) = req.item_id.filter(|&id| id != 0) else {
        return Json(AjaxEnvelope::error("Item ID not valid."));
    };

    match state.items.delete(playlist_id, item_id) {
        Some(item) => Json(AjaxEnvelope::ok_data(item)),
        None => Json(AjaxEnvelope::error("Error deleting item.")),
    }
}

// ============================================================================
// Player Layout Handler
// ============================================================================

async fn player_layout(
    State(state): State<AppState>,
    Path(player_id): Path<u64>,
) -> Json<AjaxEnvelope> {
    if player_id == 0 {
        return Json(AjaxEnvelope::error("Player ID not valid."));
    }

    match state.players.prepare_layouts(player_id) {
        Some(layouts) => Json(AjaxEnvelope::ok_data(layouts)),
        None => Json(AjaxEnvelope::error("Player not found.")),
    }
}

// ============================================================================
// Password Handlers
// ============================================================================

/// 302 redirect; the password flow never signals failure through the status
fn redirect_found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

async fn edit_password(
    State(state): State<AppState>,
    session: Option<Extension<SessionContext>>,
    Form(input): Form<PasswordChangeInput>,
) -> Response {
    let Some(Extension(ctx)) = session else {
        return redirect_found("/login");
    };

    match apply_password_change(&state.users, Some(&ctx.csrf_token), ctx.uid, &input) {
        Ok(()) => {
            state
                .sessions
                .push_flash(ctx.session_id, FlashLevel::Success, "User data changed");
        }
        Err(err) => {
            tracing::warn!(uid = ctx.uid, %err, "password change rejected");
            state
                .sessions
                .push_flash(ctx.session_id, FlashLevel::Error, err.to_string());
        }
    }

    redirect_found("/users/edit")
}

async fn show_password_form(
    State(state): State<AppState>,
    session: Option<Extension<SessionContext>>,
) -> Response {
    let Some(Extension(ctx)) = session else {
        return redirect_found("/login");
    };

    let prepared =
        FormBuilder::prepare_form(FormBuilder::password_form(&ctx.csrf_token, MIN_PASSWORD_LENGTH));
    let flash = state.sessions.take_flashes(ctx.session_id);

    Json(json!({
        "main_layout": {
            "LANG_PAGE_TITLE": "User options",
            "additional_css": ["/css/user/options.css"],
        },
        "this_layout": {
            "template": "generic/edit",
            "data": {
                "LANG_PAGE_HEADER": "User options",
                "FORM_ACTION": "/users/edit/password",
                "element_hidden": prepared.hidden,
                "form_element": prepared.visible,
                "form_button": [{
                    "ELEMENT_BUTTON_TYPE": "submit",
                    "ELEMENT_BUTTON_NAME": "submit",
                    "LANG_ELEMENT_BUTTON": "Save",
                }],
            },
        },
        "flash": flash,
    }))
    .into_response()
}
