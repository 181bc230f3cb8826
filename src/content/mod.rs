//! Domain entities as delivered by the document store.
//!
//! Every user-facing text field is a [`LocalizedText`]; the core only reads
//! these entities and never modifies their localized fields.

mod article;
mod catalog;
mod category;
mod course;
mod favorite;
mod team;
mod text;

pub use article::{read_time_for, Article, Rating, RatingError};
pub use catalog::{ArticleQuery, Catalog, SortOrder};
pub use category::{Category, UnknownCategoryError};
pub use course::Course;
pub use favorite::{FavoriteSnapshot, Favorites};
pub use team::{default_team, TeamMember};
pub use text::{resolve, LocalizedText};
