//! Homepage testimonials and the carousel that cycles through them.

/// A short guest quote shown on the homepage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub meta: &'static str,
}

/// Testimonials shipped with the site
pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "\u{201c}We felt cared for the entire time. Every transfer, guide, and detail just happened.\u{201d}",
        author: "- The Jensen family, Vermont",
        meta: "Family Journey \u{b7} 24-Day Premium Plan",
    },
    Testimonial {
        quote: "\u{201c}Wellness days, culture, and adventure were paced perfectly. We came home rested and inspired.\u{201d}",
        author: "- Priya & Jordan, California",
        meta: "Wellness Escape \u{b7} 20-Day Luxury Plan",
    },
    Testimonial {
        quote: "\u{201c}The surprises were so thoughtful: calligraphed itineraries, helicopter champagne, the works.\u{201d}",
        author: "- Camille & Aaron, Toronto",
        meta: "Anniversary Journey \u{b7} Custom 18-Day Itinerary",
    },
];

/// One pagination dot under the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselDot {
    pub index: usize,
    /// 1-based position for labels
    pub number: usize,
    pub active: bool,
}

/// Carousel position over a fixed set of slides.
///
/// Every page render owns its own carousel; navigation wraps in both
/// directions.
#[derive(Debug, Clone)]
pub struct Carousel<'a> {
    slides: &'a [Testimonial],
    index: usize,
}

impl<'a> Carousel<'a> {
    pub fn new(slides: &'a [Testimonial]) -> Self {
        Self { slides, index: 0 }
    }

    /// A carousel positioned at `index`, wrapped into range
    pub fn starting_at(slides: &'a [Testimonial], index: i64) -> Self {
        let mut carousel = Self::new(slides);
        carousel.go_to(index);
        carousel
    }

    /// Move to a slide; out-of-range and negative targets wrap around
    pub fn go_to(&mut self, target: i64) {
        if self.slides.is_empty() {
            return;
        }
        let len = self.slides.len() as i64;
        self.index = target.rem_euclid(len) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.index as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.index as i64 - 1);
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> Option<&'a Testimonial> {
        self.slides.get(self.index)
    }

    pub fn prev_index(&self) -> usize {
        let mut other = self.clone();
        other.prev();
        other.index
    }

    pub fn next_index(&self) -> usize {
        let mut other = self.clone();
        other.next();
        other.index
    }

    pub fn dots(&self) -> Vec<CarouselDot> {
        (0..self.slides.len())
            .map(|index| CarouselDot {
                index,
                number: index + 1,
                active: index == self.index,
            })
            .collect()
    }
}
