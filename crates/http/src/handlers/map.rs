use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Redirect, Response},
    Form,
};
use sandwich_map_core::PriceRange;
use sandwich_map_service::FormSubmission;

use crate::api_error::ApiError;
use crate::query_types::{AddForm, AddressQuery, HomeQuery};
use crate::response_types::{MapView, Notice, NoticeKind};
use crate::viewer::render_map;
use crate::AppState;

const SEARCH_MISS_MESSAGE: &str =
    "Could not find this address. Please try a more specific NYC address.";
const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

pub async fn home(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HomeQuery>,
) -> Result<Response, ApiError> {
    let range = query.filter.lenient_range();
    let records = state.price_service.map_records(range).await?;
    let notice = query
        .notice
        .filter(|m| !m.trim().is_empty())
        .map(|message| Notice { message, kind: NoticeKind::parse(query.notice_kind.as_deref()) });
    render_map(&MapView::overview(records, range).with_notice(notice))
}

pub async fn search_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AddressQuery>,
) -> Result<Response, ApiError> {
    search(&state, &query.address).await
}

pub async fn search_post(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddressQuery>,
) -> Result<Response, ApiError> {
    search(&state, &form.address).await
}

async fn search(state: &AppState, address: &str) -> Result<Response, ApiError> {
    let outcome = state.price_service.search(address).await?;
    let records = state.price_service.map_records(PriceRange::default()).await?;
    let mut view = MapView::overview(records, PriceRange::default());
    if !outcome.address.is_empty() {
        view.search_query = Some(outcome.address.clone());
    }
    if outcome.is_miss() {
        view = view.with_notice(Some(Notice::error(SEARCH_MISS_MESSAGE)));
    }
    if let Some(hit) = outcome.location {
        view = view.focused_on(hit, outcome.nearby);
    }
    render_map(&view)
}

pub async fn add_price(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> Redirect {
    let submission = FormSubmission { name: form.name, address: form.address, price: form.price };
    let notice = match state.price_service.add_from_form(&submission).await {
        Ok(record) => {
            Notice::success(format!("Added {} with price ${:.2}", record.name, record.price))
        },
        Err(e) if e.is_client_error() => Notice::error(e.to_string()),
        Err(e) => {
            tracing::error!(error = %e, "failed to add price");
            Notice::error(GENERIC_FAILURE_MESSAGE)
        },
    };
    Redirect::to(&notice_location(&notice))
}

/// `/` with the notice carried in the query string.
fn notice_location(notice: &Notice) -> String {
    let params = [("notice", notice.message.as_str()), ("notice_kind", notice.kind.as_str())];
    match serde_urlencoded::to_string(params) {
        Ok(query) => format!("/?{query}"),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode notice");
            "/".to_owned()
        },
    }
}
