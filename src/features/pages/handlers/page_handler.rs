use std::sync::Arc;

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::core::error::Result;
use crate::features::pages::services::PageService;
use crate::shared::templates::render_template;

pub async fn home_page(State(service): State<Arc<PageService>>) -> Result<Html<String>> {
    let context = service.home().await?;
    Ok(Html(render_template("home.html", context)?))
}

pub async fn updates_page(State(service): State<Arc<PageService>>) -> Result<Html<String>> {
    let context = service.updates().await?;
    Ok(Html(render_template("updates.html", context)?))
}

pub async fn control_measures_page(
    State(service): State<Arc<PageService>>,
) -> Result<Html<String>> {
    let context = service.control_measures().await?;
    Ok(Html(render_template("control_measures.html", context)?))
}

pub async fn about_page() -> Result<Html<String>> {
    Ok(Html(render_template("about.html", context! {})?))
}

pub async fn contact_page() -> Result<Html<String>> {
    Ok(Html(render_template("contact.html", context! {})?))
}
