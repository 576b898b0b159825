pub use super::dog::Entity as Dog;
