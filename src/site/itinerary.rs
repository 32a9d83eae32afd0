//! Signature packages and their day-by-day itineraries.

/// Rows shown before an itinerary table collapses
pub const PREVIEW_ROWS: usize = 6;

/// One row of an itinerary table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: &'static str,
    pub overnight: &'static str,
}

/// A published package on the packages page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Section anchor, e.g. `premium-20`
    pub anchor: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// Catalog tier used when estimating this package
    pub tier_id: &'static str,
    pub days: Vec<ItineraryDay>,
}

impl Package {
    /// Rows visible while the table is collapsed
    pub fn preview(&self) -> &[ItineraryDay] {
        &self.days[..self.days.len().min(PREVIEW_ROWS)]
    }

    /// Rows revealed by "See full itinerary"
    pub fn remainder(&self) -> &[ItineraryDay] {
        &self.days[self.days.len().min(PREVIEW_ROWS)..]
    }

    pub fn is_collapsible(&self) -> bool {
        self.days.len() > PREVIEW_ROWS
    }
}

fn days(rows: &[(&'static str, &'static str)]) -> Vec<ItineraryDay> {
    rows.iter()
        .zip(1u32..)
        .map(|(&(title, overnight), day)| ItineraryDay {
            day,
            title,
            overnight,
        })
        .collect()
}

/// Packages shipped with the site
pub fn builtin_packages() -> Vec<Package> {
    vec![
        Package {
            anchor: "premium-20",
            title: "Premium Nepal, 20 Days",
            summary: "Heritage Kathmandu, the lakes of Pokhara, jungle days in Chitwan and a short Himalayan trek, with handpicked four-star stays.",
            tier_id: "premium",
            days: days(&[
                ("Arrive in Kathmandu, private transfer and welcome dinner", "Kathmandu"),
                ("Swayambhunath and Kathmandu Durbar Square", "Kathmandu"),
                ("Pashupatinath and Boudhanath stupa", "Kathmandu"),
                ("Bhaktapur pottery square and Changu Narayan", "Bhaktapur"),
                ("Nagarkot sunrise, drive to Dhulikhel", "Dhulikhel"),
                ("Scenic drive to Pokhara", "Pokhara"),
                ("Sarangkot sunrise and Phewa Lake boating", "Pokhara"),
                ("Trek to Dhampus", "Dhampus"),
                ("Trek to Australian Camp", "Australian Camp"),
                ("Descend to Pokhara, afternoon at leisure", "Pokhara"),
                ("World Peace Pagoda and Davis Falls", "Pokhara"),
                ("Drive to Chitwan National Park", "Chitwan"),
                ("Jeep safari and Tharu village walk", "Chitwan"),
                ("Canoe ride and elephant breeding centre", "Chitwan"),
                ("Drive to Lumbini", "Lumbini"),
                ("Maya Devi temple and monastic zone", "Lumbini"),
                ("Fly to Kathmandu", "Kathmandu"),
                ("Patan Durbar Square and metalwork workshops", "Kathmandu"),
                ("Free day for shopping in Thamel", "Kathmandu"),
                ("Departure transfer", "-"),
            ]),
        },
        Package {
            anchor: "luxury-20",
            title: "Luxury Nepal, 20 Days",
            summary: "Boutique heritage hotels, a private Everest helicopter landing, wellness retreats and curated private guiding throughout.",
            tier_id: "luxury",
            days: days(&[
                ("Arrive in Kathmandu, VIP meet and assist", "Dwarika's, Kathmandu"),
                ("Private heritage walk with an art historian", "Dwarika's, Kathmandu"),
                ("Boudhanath blessing ceremony and rooftop lunch", "Dwarika's, Kathmandu"),
                ("Everest helicopter tour with Kala Patthar landing", "Dwarika's, Kathmandu"),
                ("Bhaktapur by private vehicle, Newari feast", "Dhulikhel Mountain Resort"),
                ("Spa morning, Himalayan panorama at sunset", "Dhulikhel Mountain Resort"),
                ("Fly to Pokhara", "Tiger Mountain Lodge"),
                ("Guided village walk and yoga session", "Tiger Mountain Lodge"),
                ("Paragliding over Phewa Lake", "Tiger Mountain Lodge"),
                ("Private lake cruise and lakeside dinner", "Pokhara"),
                ("Fly to Bharatpur, transfer to Chitwan", "Meghauli Serai"),
                ("Dawn jeep safari with a naturalist", "Meghauli Serai"),
                ("River canoe and birding excursion", "Meghauli Serai"),
                ("Fly to Kathmandu, afternoon at leisure", "Dwarika's, Kathmandu"),
                ("Drive to Namobuddha retreat", "Namo Buddha Resort"),
                ("Meditation and organic farm day", "Namo Buddha Resort"),
                ("Return to Kathmandu, Patan private tour", "Dwarika's, Kathmandu"),
                ("Cooking masterclass with the hotel chef", "Dwarika's, Kathmandu"),
                ("Free day with optional mountain flight", "Dwarika's, Kathmandu"),
                ("Departure with private transfer", "-"),
            ]),
        },
    ]
}
