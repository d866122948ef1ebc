pub mod use_customers;
pub mod use_restaurants;
