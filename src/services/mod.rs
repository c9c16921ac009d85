pub mod gemini_service;
pub mod itinerary_fallback;
