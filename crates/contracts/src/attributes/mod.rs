pub mod categories;
pub mod fields;
pub mod validation;

pub use categories::{visible_fields, Category, CATEGORIES, DEFAULT_CATEGORY_ID};
pub use fields::Field;
pub use validation::{FieldVerdict, ValidateQuery};
