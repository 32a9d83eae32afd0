//! Site content and the shared page layout.

pub mod itinerary;
pub mod testimonials;

use chrono::Datelike;

pub use itinerary::{builtin_packages, ItineraryDay, Package, PREVIEW_ROWS};
pub use testimonials::{Carousel, CarouselDot, Testimonial, TESTIMONIALS};

/// Top-level pages in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Packages,
    Estimator,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::Home, NavItem::Packages, NavItem::Estimator];

    pub fn href(self) -> &'static str {
        match self {
            NavItem::Home => "/",
            NavItem::Packages => "/packages",
            NavItem::Estimator => "/estimator",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Packages => "Packages",
            NavItem::Estimator => "Cost Estimator",
        }
    }
}

/// Navigation link as rendered by the header partial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Data consumed by `base.html` and its header/footer partials
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_name: String,
    pub tagline: String,
    pub nav: Vec<NavLink>,
    pub year: i32,
    pub whatsapp_url: String,
}

/// Static site content
#[derive(Debug, Clone)]
pub struct Site {
    pub name: String,
    pub tagline: String,
    /// International number without `+`, as wa.me expects
    pub whatsapp_number: String,
    pub testimonials: Vec<Testimonial>,
    pub packages: Vec<Package>,
}

impl Site {
    pub fn builtin() -> Self {
        Self {
            name: "Hamro Vacation".to_string(),
            tagline: "Private journeys through Nepal, planned end to end".to_string(),
            whatsapp_number: "18023106841".to_string(),
            testimonials: TESTIMONIALS.to_vec(),
            packages: builtin_packages(),
        }
    }

    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }

    pub fn package(&self, anchor: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.anchor == anchor)
    }

    /// Layout for a page, with `active` highlighted in the nav
    pub fn layout(&self, active: NavItem) -> Layout {
        Layout {
            site_name: self.name.clone(),
            tagline: self.tagline.clone(),
            nav: NavItem::ALL
                .iter()
                .map(|&item| NavLink {
                    href: item.href(),
                    label: item.label(),
                    active: item == active,
                })
                .collect(),
            year: chrono::Local::now().year(),
            whatsapp_url: self.whatsapp_url(),
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_marks_active_nav() {
        let layout = Site::builtin().layout(NavItem::Packages);
        let active: Vec<_> = layout.nav.iter().filter(|l| l.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "/packages");
        assert!(layout.year >= 2024);
    }

    #[test]
    fn test_whatsapp_url() {
        assert_eq!(Site::builtin().whatsapp_url(), "https://wa.me/18023106841");
    }

    #[test]
    fn test_package_lookup() {
        let site = Site::builtin();
        assert_eq!(site.package("luxury-20").unwrap().tier_id, "luxury");
        assert!(site.package("budget-5").is_none());
    }
}
