pub mod about;
pub mod contact;
pub mod credentials;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod packages;
pub mod preloader;
pub mod quote;
pub mod services;
pub mod testimonials;
