//! Deterministic itinerary used when the Gemini call is skipped or fails.
//!
//! The output is a pure function of its inputs: same inputs produce
//! byte-identical Markdown.

/// Render a fixed-shape multi-day itinerary for `destination`.
///
/// Day 1 is always present, Day 2 only when `days > 1`, Day 3 only when
/// `days > 2`. Trips longer than three days still receive the three-day
/// template plus the notes section. Two Day-2 lines react to case-sensitive
/// substrings of the raw preference text: "outdoor" swaps the morning
/// activity for a hike, "family" swaps the evening plan.
pub fn fallback_itinerary(destination: &str, days: u32, preferences: &str) -> String {
    let mut itinerary = format!(
        "# {} Itinerary - {} Day{}\n",
        destination,
        days,
        if days > 1 { "s" } else { "" }
    );

    itinerary.push_str(&format!(
        "\n## Day 1\n\
         - **8:00 AM**: Breakfast at Central Café (Downtown {destination})\n\
         - **9:30 AM**: Visit the main attractions in {destination} ({destination} City Center)\n\
         - **12:30 PM**: Lunch at Local Flavors Restaurant (123 Main Street)\n\
         - **2:00 PM**: Explore museums and cultural sites (Cultural District)\n\
         - **6:00 PM**: Dinner with local cuisine at Authentic Kitchen (456 Harbor View)\n\
         - **8:00 PM**: Evening walk or entertainment (Waterfront Promenade)\n"
    ));

    if days > 1 {
        let morning = if preferences.contains("outdoor") {
            "hiking at Nature Trail Park (3 miles north of downtown)"
        } else {
            "City Gardens Tour (Botanical Gardens)"
        };
        let evening = if preferences.contains("family") {
            "with family at Starlight Plaza"
        } else {
            "at Jazz & Blues Club (Entertainment District)"
        };

        itinerary.push_str(&format!(
            "\n## Day 2\n\
             - **8:30 AM**: Morning coffee and pastries at Morning Brew (78 Sunrise Avenue)\n\
             - **10:00 AM**: Outdoor activities - {morning}\n\
             - **1:00 PM**: Lunch at Trendy Bites (Fashion District)\n\
             - **3:00 PM**: Shopping or relaxation time (Market Square)\n\
             - **7:00 PM**: Dinner at Gourmet Heights Restaurant (Skyline Tower, 20th floor)\n\
             - **9:00 PM**: Nightlife or relaxing evening {evening}\n"
        ));
    }

    if days > 2 {
        itinerary.push_str(&format!(
            "\n## Day 3\n\
             - **9:00 AM**: Leisurely breakfast at Sunrise Café (Beachfront)\n\
             - **10:30 AM**: Day trip to nearby {destination} Falls (15 miles east of city center)\n\
             - **1:30 PM**: Picnic lunch at Scenic Viewpoint or local eatery (Countryside)\n\
             - **3:30 PM**: Visit to Hidden Gems Museum (Old Town district)\n\
             - **6:30 PM**: Farewell dinner at Sunset Restaurant (Hilltop Drive)\n\
             - **8:30 PM**: Final evening activities at Moonlight Square\n"
        ));
    }

    itinerary.push_str(&format!(
        "\n**Notes:**\n\
         - This itinerary is customized based on your preferences: {preferences}\n\
         - All times are approximate and can be adjusted\n\
         - Transportation options include: public transit, walking, or rental car\n\
         - Best time to visit most attractions is weekday mornings to avoid crowds\n\
         - Consider purchasing a city pass for multiple attractions\n"
    ));

    itinerary
}
