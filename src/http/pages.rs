//! Page handlers.
//!
//! Each handler resolves its path against the catalog and returns the page
//! model the front-end renders. Resolution misses become `404`.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    category_for_slug_in, tool_for_category_and_slug, url_for_category, url_for_tool, Catalog,
    Category, ToolId, ToolRecord,
};
use crate::locale::dictionary::{category_name, site_title, tool_text};
use crate::locale::Locale;
use crate::observability::metrics;
use crate::routing::translate_path;

/// Page lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown tool '{0}'")]
    UnknownTool(String),
    #[error("no such page")]
    NoRoute,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": "not_found",
            "message": self.to_string(),
        }));
        (StatusCode::NOT_FOUND, body).into_response()
    }
}

/// The same page in another locale.
#[derive(Debug, Serialize)]
pub struct Alternate {
    pub locale: Locale,
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryLink {
    pub id: Category,
    pub name: &'static str,
    pub url: String,
    pub tool_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ToolLink {
    pub id: ToolId,
    pub name: &'static str,
    pub description: &'static str,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub locale: Locale,
    pub title: &'static str,
    pub categories: Vec<CategoryLink>,
    pub alternates: Vec<Alternate>,
}

#[derive(Debug, Serialize)]
pub struct CategoryPage {
    pub locale: Locale,
    pub category: Category,
    pub name: &'static str,
    pub url: String,
    pub tools: Vec<ToolLink>,
    pub alternates: Vec<Alternate>,
}

#[derive(Debug, Serialize)]
pub struct ToolPage {
    pub locale: Locale,
    pub id: ToolId,
    pub category: Category,
    pub name: &'static str,
    pub description: &'static str,
    /// Front-end component rendering this tool.
    pub widget: &'static str,
    pub ready: bool,
    pub url: String,
    pub alternates: Vec<Alternate>,
}

/// Component that renders `tool`.
pub fn widget_for(tool: ToolId) -> &'static str {
    match tool {
        ToolId::PasswordGenerator => "PasswordGenerator",
        ToolId::LoremIpsum => "LoremIpsumGenerator",
        ToolId::QrCode => "QrCodeGenerator",
        ToolId::BmiCalculator => "BmiCalculator",
        ToolId::ProportionCalculator => "ProportionCalculator",
        ToolId::SleepCalculator => "SleepCalculator",
        ToolId::PercentageCalculator => "PercentageCalculator",
        ToolId::CharacterCounter => "CharacterCounter",
        ToolId::WordCounter => "WordCounter",
        ToolId::CaseConverter => "CaseConverter",
        ToolId::CountdownTimer => "CountdownTimer",
        ToolId::Stopwatch => "Stopwatch",
        ToolId::RandomNumber => "RandomNumberPicker",
        ToolId::CoinFlip => "CoinFlip",
        ToolId::YesOrNo => "YesOrNo",
    }
}

fn alternates(url: impl Fn(Locale) -> String) -> Vec<Alternate> {
    Locale::ALL
        .into_iter()
        .map(|locale| Alternate {
            locale,
            label: locale.native_name(),
            url: url(locale),
        })
        .collect()
}

fn parse_locale(code: &str) -> Result<Locale, PageError> {
    Locale::from_code(code).ok_or_else(|| PageError::UnknownLocale(code.to_string()))
}

fn record<T>(kind: &'static str, result: Result<T, PageError>) -> Result<Json<T>, PageError> {
    match &result {
        Ok(_) => metrics::record_page(kind, 200),
        Err(e) => {
            tracing::debug!(kind, error = %e, "Page not found");
            metrics::record_page(kind, 404);
        }
    }
    result.map(Json)
}

pub fn build_home_page(locale: Locale) -> HomePage {
    let catalog = Catalog::get();
    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryLink {
            id: category,
            name: category_name(category, locale),
            url: url_for_category(category, locale),
            tool_count: catalog.ready_tools_in(category).count(),
        })
        .collect();

    HomePage {
        locale,
        title: site_title(locale),
        categories,
        alternates: alternates(|l| l.home_path().to_string()),
    }
}

pub fn build_category_page(locale: Locale, category: Category) -> CategoryPage {
    let tools = Catalog::get()
        .ready_tools_in(category)
        .map(|tool| {
            let text = tool_text(tool.id, locale);
            ToolLink {
                id: tool.id,
                name: text.name,
                description: text.description,
                url: url_for_tool(tool, locale),
            }
        })
        .collect();

    CategoryPage {
        locale,
        category,
        name: category_name(category, locale),
        url: url_for_category(category, locale),
        tools,
        alternates: alternates(|l| url_for_category(category, l)),
    }
}

pub fn build_tool_page(locale: Locale, tool: &ToolRecord) -> ToolPage {
    let text = tool_text(tool.id, locale);
    ToolPage {
        locale,
        id: tool.id,
        category: tool.category,
        name: text.name,
        description: text.description,
        widget: widget_for(tool.id),
        ready: tool.ready,
        url: url_for_tool(tool, locale),
        alternates: alternates(|l| url_for_tool(tool, l)),
    }
}

pub async fn home_page(Path(locale): Path<String>) -> Result<Json<HomePage>, PageError> {
    record("home", parse_locale(&locale).map(build_home_page))
}

pub async fn category_page(
    Path((locale, category)): Path<(String, String)>,
) -> Result<Json<CategoryPage>, PageError> {
    let result = parse_locale(&locale).and_then(|locale| {
        category_for_slug_in(&category, locale)
            .map(|c| build_category_page(locale, c))
            .ok_or(PageError::UnknownCategory(category))
    });
    record("category", result)
}

pub async fn tool_page(
    Path((locale, category, tool)): Path<(String, String, String)>,
) -> Result<Json<ToolPage>, PageError> {
    let result = parse_locale(&locale).and_then(|locale| {
        if category_for_slug_in(&category, locale).is_none() {
            return Err(PageError::UnknownCategory(category));
        }
        tool_for_category_and_slug(&category, &tool, locale)
            .map(|record| build_tool_page(locale, record))
            .ok_or(PageError::UnknownTool(tool))
    });
    record("tool", result)
}

#[derive(Debug, Deserialize)]
pub struct TranslateQuery {
    pub path: String,
    pub from: Locale,
    pub to: Locale,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub locale: Locale,
    pub path: String,
}

/// Language switcher: the current page's path in another locale.
pub async fn translate(Query(query): Query<TranslateQuery>) -> Json<TranslateResponse> {
    let path = translate_path(&query.path, query.from, query.to);
    tracing::debug!(from = %query.path, to = %path, locale = %query.to, "Translated path");
    Json(TranslateResponse {
        locale: query.to,
        path,
    })
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found() -> PageError {
    metrics::record_page("fallback", 404);
    PageError::NoRoute
}
