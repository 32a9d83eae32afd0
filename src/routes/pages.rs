//! Page route handlers

use askama::Template;
use axum::{
    extract::{Query, State},
    http::Method,
    response::Html,
};
use rust_decimal::prelude::*;

use crate::cache::PageCache;
use crate::error::{AppError, Result};
use crate::pricing::{
    format_usd, parse_amount, services, Catalog, Estimate, EstimateInput, PricingError,
};
use crate::site::{Carousel, CarouselDot, ItineraryDay, Layout, NavItem, Package};
use crate::AppState;

const DEFAULT_DAYS: &str = "20";
const DEFAULT_PEOPLE: &str = "2";
const DEFAULT_AIRFARE: &str = "0";

/// Package as shown on the home and packages pages
struct PackageView {
    anchor: &'static str,
    title: &'static str,
    summary: &'static str,
    nightly_rate: String,
    has_rate: bool,
    day_count: usize,
    preview: Vec<ItineraryDay>,
    remainder: Vec<ItineraryDay>,
    collapsible: bool,
}

impl PackageView {
    fn new(package: &Package, catalog: &Catalog) -> Self {
        let tier = catalog.tier(package.tier_id);
        Self {
            anchor: package.anchor,
            title: package.title,
            summary: package.summary,
            nightly_rate: tier.map(|t| format_usd(t.hotel_per_night)).unwrap_or_default(),
            has_rate: tier.is_some(),
            day_count: package.days.len(),
            preview: package.preview().to_vec(),
            remainder: package.remainder().to_vec(),
            collapsible: package.is_collapsible(),
        }
    }
}

/// Homepage template
#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    layout: Layout,
    packages: Vec<PackageView>,
    has_testimonials: bool,
    quote: &'static str,
    author: &'static str,
    meta: &'static str,
    dots: Vec<CarouselDot>,
    prev_index: usize,
    next_index: usize,
}

/// Packages page template
#[derive(Template)]
#[template(path = "packages.html")]
struct PackagesTemplate {
    layout: Layout,
    packages: Vec<PackageView>,
}

struct TierOption {
    id: String,
    name: String,
    rates: String,
    selected: bool,
}

struct ActivityOption {
    id: String,
    name: String,
    price: String,
    checked: bool,
}

/// Rendered breakdown under the estimator form
struct EstimateView {
    label: String,
    days: u32,
    travelers: u32,
    rooms: u32,
    hotel_rate: String,
    vehicle_rate: String,
    guide_rate: String,
    airfare_rate: String,
    hotel_total: String,
    vehicle_total: String,
    guide_total: String,
    activities: String,
    activities_total: String,
    ground_total: String,
    airfare_total: String,
    grand_total: String,
}

impl From<&Estimate> for EstimateView {
    fn from(estimate: &Estimate) -> Self {
        let request = &estimate.request;
        let result = &estimate.result;
        let activities = request
            .activities
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            label: request.tier.id.to_uppercase(),
            days: request.days,
            travelers: request.travelers,
            rooms: result.rooms,
            hotel_rate: format_usd(request.tier.hotel_per_night),
            vehicle_rate: format_usd(request.tier.vehicle_per_day),
            guide_rate: format_usd(request.tier.guide_per_day),
            airfare_rate: format_usd(request.airfare_per_person),
            hotel_total: format_usd(result.hotel_total),
            vehicle_total: format_usd(result.vehicle_total),
            guide_total: format_usd(result.guide_total),
            activities: if activities.is_empty() {
                "none selected".to_string()
            } else {
                activities
            },
            activities_total: format_usd(result.activities_total),
            ground_total: format_usd(result.ground_total),
            airfare_total: format_usd(result.airfare_total),
            grand_total: format_usd(result.grand_total),
        }
    }
}

/// Estimator page template
#[derive(Template)]
#[template(path = "estimator.html")]
pub struct EstimatorTemplate {
    layout: Layout,
    tiers: Vec<TierOption>,
    activities: Vec<ActivityOption>,
    days: String,
    people: String,
    airfare: String,
    estimate: Option<EstimateView>,
    error: Option<String>,
}

/// Homepage handler; `?slide=n` picks the testimonial (last one wins)
pub async fn home(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>> {
    let requested = last_value(&pairs, "slide")
        .map(parse_amount)
        .and_then(|slide| slide.trunc().to_i64())
        .unwrap_or(0);
    let carousel = Carousel::starting_at(&state.site.testimonials, requested);

    let key = PageCache::home_key(carousel.index());
    if let Some(html) = state.cache.get(&key).await {
        return Ok(Html((*html).clone()));
    }

    let slide = carousel.current();
    let template = HomeTemplate {
        layout: state.site.layout(NavItem::Home),
        packages: package_views(&state),
        has_testimonials: slide.is_some(),
        quote: slide.map(|s| s.quote).unwrap_or_default(),
        author: slide.map(|s| s.author).unwrap_or_default(),
        meta: slide.map(|s| s.meta).unwrap_or_default(),
        dots: carousel.dots(),
        prev_index: carousel.prev_index(),
        next_index: carousel.next_index(),
    };

    let html = state.cache.insert(key, template.render()?).await;
    Ok(Html((*html).clone()))
}

/// Packages page handler
pub async fn packages(State(state): State<AppState>) -> Result<Html<String>> {
    if let Some(html) = state.cache.get(PageCache::PACKAGES_KEY).await {
        return Ok(Html((*html).clone()));
    }

    let template = PackagesTemplate {
        layout: state.site.layout(NavItem::Packages),
        packages: package_views(&state),
    };

    let html = state
        .cache
        .insert(PageCache::PACKAGES_KEY, template.render()?)
        .await;
    Ok(Html((*html).clone()))
}

/// Estimator page handler.
///
/// The form submits with GET; the breakdown is shown once the `calc`
/// button is part of the query. `?package=<anchor>` comes from the packages
/// page and pre-fills that package's tier and length.
pub async fn estimator(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<EstimatorTemplate> {
    let package = last_value(&pairs, "package")
        .and_then(|anchor| state.site.package(anchor.trim()));
    let mut input = EstimateInput::from_pairs(&pairs);
    if input.tier.is_none() {
        input.tier = package.map(|p| p.tier_id.to_string());
    }
    let submitted = pairs.iter().any(|(key, _)| key == "calc");

    let (estimate, error) = if submitted {
        match services::estimate(&state.catalog, &input) {
            Ok(estimate) => (Some(estimate), None),
            Err(PricingError::EmptyCatalog) => {
                return Err(AppError::Internal(PricingError::EmptyCatalog.to_string()));
            }
            Err(err) => {
                tracing::warn!("Estimator form rejected: {}", err);
                (None, Some(err.to_string()))
            }
        }
    } else {
        (None, None)
    };

    let catalog = &state.catalog;
    let selected_tier = estimate
        .as_ref()
        .map(|e| e.request.tier.id.clone())
        .or_else(|| {
            input
                .tier
                .as_deref()
                .and_then(|id| catalog.tier(id))
                .map(|t| t.id.clone())
        })
        .or_else(|| catalog.default_tier().map(|t| t.id.clone()))
        .unwrap_or_default();

    let tiers = catalog
        .tiers
        .iter()
        .map(|tier| TierOption {
            id: tier.id.clone(),
            name: tier.name.clone(),
            rates: format!(
                "{}/night hotel, {}/day vehicle, {}/day guide",
                format_usd(tier.hotel_per_night),
                format_usd(tier.vehicle_per_day),
                format_usd(tier.guide_per_day)
            ),
            selected: tier.id == selected_tier,
        })
        .collect();

    let activities = catalog
        .activities
        .iter()
        .map(|activity| ActivityOption {
            id: activity.id.clone(),
            name: activity.name.clone(),
            price: format_usd(activity.price_per_person),
            checked: input
                .activities
                .iter()
                .any(|id| id.trim().eq_ignore_ascii_case(&activity.id)),
        })
        .collect();

    let (days, people, airfare) = match &estimate {
        Some(e) => (
            e.request.days.to_string(),
            e.request.travelers.to_string(),
            e.request.airfare_per_person.normalize().to_string(),
        ),
        None => (
            last_value(&pairs, "days")
                .map(str::to_string)
                .or_else(|| package.map(|p| p.days.len().to_string()))
                .unwrap_or_else(|| DEFAULT_DAYS.to_string()),
            raw_field(&pairs, "people", DEFAULT_PEOPLE),
            raw_field(&pairs, "airfare", DEFAULT_AIRFARE),
        ),
    };

    Ok(EstimatorTemplate {
        layout: state.site.layout(NavItem::Estimator),
        tiers,
        activities,
        days,
        people,
        airfare,
        estimate: estimate.as_ref().map(EstimateView::from),
        error,
    })
}

/// Unknown paths render the homepage; other methods get a 404
pub async fn fallback(
    method: Method,
    state: State<AppState>,
    query: Query<Vec<(String, String)>>,
) -> Result<Html<String>> {
    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::NotFound);
    }
    home(state, query).await
}

fn package_views(state: &AppState) -> Vec<PackageView> {
    state
        .site
        .packages
        .iter()
        .map(|package| PackageView::new(package, &state.catalog))
        .collect()
}

fn last_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn raw_field(pairs: &[(String, String)], key: &str, default: &str) -> String {
    last_value(pairs, key).unwrap_or(default).to_string()
}
