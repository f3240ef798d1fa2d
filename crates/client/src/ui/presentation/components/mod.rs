//! Editor building blocks: form fields, the relationship picker, and the
//! per-category list/detail/form sections.

mod characters;
mod combobox;
mod common;
mod locations;
mod organizations;
mod races;
mod world_form;

pub use characters::CharacterSection;
pub use combobox::RelationshipPicker;
pub use common::{DeleteButton, ImageField, TextAreaField, TextField};
pub use locations::LocationSection;
pub use organizations::OrganizationSection;
pub use races::RaceSection;
pub use world_form::WorldForm;
