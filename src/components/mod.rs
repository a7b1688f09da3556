//! UI Components for the Driftwood reader.

mod card;
mod featured_content;

pub use card::Card;
pub use featured_content::FeaturedContent;
